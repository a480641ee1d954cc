use super::*;

/// Tests moving a team to another season.
///
/// Expected: Ok(Team) with the new season name and the tournament kept, readable through get
#[tokio::test]
async fn resolves_new_season_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::helpers::create_league(db).await?;
    let next_season = factory::season::SeasonFactory::new(db)
        .name("2026")
        .build()
        .await?;

    let service = TeamService::new(db);
    let mut update = params("Falcons FC", None, Some(next_season.id));
    update.season_points = 12;
    update.season_rank = Some(1);

    let updated = service.update(league.team.id, update).await?;

    assert_eq!(service.get_by_id(league.team.id).await?, updated);
    assert_eq!(updated.name, "Falcons FC");
    assert_eq!(updated.season_points, 12);
    assert_eq!(updated.season_rank, Some(1));
    assert_eq!(updated.season.map(|s| s.name), Some("2026".to_string()));
    assert_eq!(
        updated.tournament.map(|t| t.id),
        Some(league.tournament.id)
    );

    Ok(())
}

/// Tests creating a team for a tournament that does not exist.
///
/// Expected: Err(AppError::NotFound) naming the tournament
#[tokio::test]
async fn create_fails_for_missing_tournament() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeamService::new(db)
        .create(params("Falcons", Some(31), None))
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(message)) if message == "Tournament not found with id 31"
    ));

    Ok(())
}
