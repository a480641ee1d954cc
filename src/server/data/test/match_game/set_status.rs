use super::*;

/// Tests completing a pending match.
///
/// Expected: Ok(Match) with status Finished and the score untouched
#[tokio::test]
async fn marks_match_finished() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::match_game::MatchFactory::new(db)
        .score(2, 1)
        .build()
        .await?;

    let updated = MatchRepository::new(db)
        .set_status(fixture.id, MatchStatus::Finished)
        .await?;

    assert_eq!(updated.status, Some(MatchStatus::Finished));
    assert_eq!(updated.home_score, 2);
    assert_eq!(updated.away_score, 1);
    assert_eq!(updated.match_time, fixture.match_time);

    Ok(())
}

/// Tests completing a match that does not exist.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_missing_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MatchRepository::new(db)
        .set_status(9999, MatchStatus::Finished)
        .await;

    assert!(result.is_err());

    Ok(())
}
