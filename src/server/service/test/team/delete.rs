use super::*;

/// Tests deleting a team and reading it back.
///
/// Expected: get fails with NotFound and the team's players are gone
#[tokio::test]
async fn removes_team_and_players() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::helpers::create_league(db).await?;
    let service = TeamService::new(db);

    service.delete(league.team.id).await?;

    assert!(matches!(
        service.get_by_id(league.team.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(crate::server::service::player::PlayerService::new(db)
        .get_by_team(league.team.id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests deleting a team that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeamService::new(db).delete(5).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
