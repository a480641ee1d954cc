use super::*;

/// Tests completing a pending match.
///
/// Expected: Ok(Match) finished with score and teams untouched
#[tokio::test]
async fn finishes_pending_match() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::helpers::create_league(db).await?;
    let (home, away, fixture) =
        factory::helpers::create_match_with_teams(db, league.tournament.id, league.season.id)
            .await?;

    let completed = MatchService::new(db).complete(fixture.id).await?;

    assert_eq!(completed.status, Some(MatchStatus::Finished));
    assert_eq!(completed.home_team.map(|t| t.id), Some(home.id));
    assert_eq!(completed.away_team.map(|t| t.id), Some(away.id));
    assert_eq!(completed.home_score, fixture.home_score);

    Ok(())
}

/// Tests completing a match that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_match() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MatchService::new(db).complete(3).await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(message)) if message == "Match not found with id 3"
    ));

    Ok(())
}
