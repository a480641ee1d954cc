use super::*;

/// Tests inserting a team with parents and aggregates.
///
/// Expected: Ok(Team) with parent names resolved and counters stored
#[tokio::test]
async fn inserts_team_with_parents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::season::SeasonFactory::new(db)
        .name("2025")
        .build()
        .await?;

    let saved = TeamRepository::new(db)
        .save(
            None,
            SaveTeamParams {
                name: "Falcons".to_string(),
                tournament_id: None,
                season_id: Some(season.id),
                season_goals: 11,
                season_cards: 3,
                season_points: 9,
                season_rank: Some(2),
                historical_goals: 40,
                historical_cards: 12,
            },
        )
        .await?;

    assert_eq!(saved.name, "Falcons");
    assert_eq!(saved.tournament, None);
    assert_eq!(saved.season.map(|s| s.name), Some("2025".to_string()));
    assert_eq!(saved.season_goals, 11);
    assert_eq!(saved.season_rank, Some(2));
    assert_eq!(saved.historical_cards, 12);

    Ok(())
}

/// Tests that a dangling season ID is rejected by the foreign key.
///
/// Expected: Err(DbErr) and nothing stored
#[tokio::test]
async fn rejects_dangling_season_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeamRepository::new(db)
        .save(
            None,
            SaveTeamParams {
                name: "Orphans".to_string(),
                tournament_id: None,
                season_id: Some(777),
                season_goals: 0,
                season_cards: 0,
                season_points: 0,
                season_rank: None,
                historical_goals: 0,
                historical_cards: 0,
            },
        )
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Team::find().count(db).await?, 0);

    Ok(())
}
