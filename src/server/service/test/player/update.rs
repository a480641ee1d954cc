use super::*;

/// Tests an update that leaves out the team and season.
///
/// Expected: Ok(Player) keeping the existing team and season
#[tokio::test]
async fn keeps_references_left_out() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::helpers::create_league(db).await?;

    let updated = PlayerService::new(db)
        .update(league.player.id, params("Renamed", None, None))
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.team.map(|t| t.id), Some(league.team.id));
    assert_eq!(updated.season.map(|s| s.id), Some(league.season.id));

    Ok(())
}

/// Tests moving a player to a season that does not exist.
///
/// Expected: Err(AppError::NotFound) and the stored player unchanged
#[tokio::test]
async fn rejects_missing_season() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::helpers::create_league(db).await?;
    let service = PlayerService::new(db);

    let result = service
        .update(league.player.id, params("Renamed", None, Some(404)))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(
        service.get_by_id(league.player.id).await?.name,
        league.player.name
    );

    Ok(())
}

/// Tests updating a player that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PlayerService::new(db)
        .update(42, params("Nobody", None, None))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
