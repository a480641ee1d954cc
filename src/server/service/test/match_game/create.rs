use super::*;

/// Tests creating a match between two existing teams.
///
/// Expected: Ok(Match) with both team names inlined and listed for each team
#[tokio::test]
async fn inlines_both_team_names() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::team::TeamFactory::new(db)
        .name("Falcons")
        .build()
        .await?;
    let away = factory::team::TeamFactory::new(db)
        .name("Hawks")
        .build()
        .await?;

    let service = MatchService::new(db);
    let created = service
        .create(SaveMatchParams {
            match_time: (Utc::now() + Duration::days(3)).naive_utc(),
            location: Some("North Field".to_string()),
            home_team_id: Some(home.id),
            away_team_id: Some(away.id),
            home_score: 0,
            away_score: 0,
            tournament_id: None,
            season_id: None,
            status: Some(MatchStatus::Pending),
        })
        .await?;

    assert_eq!(
        created.home_team.as_ref().map(|t| t.name.as_str()),
        Some("Falcons")
    );
    assert_eq!(
        created.away_team.as_ref().map(|t| t.name.as_str()),
        Some("Hawks")
    );
    assert_eq!(service.get_by_team(home.id).await?, vec![created.clone()]);
    assert_eq!(service.get_by_team(away.id).await?, vec![created]);

    Ok(())
}

/// Tests creating a match against a team that does not exist.
///
/// Expected: Err(AppError::NotFound) naming the away team
#[tokio::test]
async fn fails_for_missing_away_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::create_team(db).await?;

    let result = MatchService::new(db)
        .create(SaveMatchParams {
            match_time: Utc::now().naive_utc(),
            location: None,
            home_team_id: Some(home.id),
            away_team_id: Some(888),
            home_score: 0,
            away_score: 0,
            tournament_id: None,
            season_id: None,
            status: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(message)) if message == "Team not found with id 888"
    ));

    Ok(())
}
