use super::*;

/// Tests listing events by match, by player and by season.
///
/// Expected: each filter returns only the events referencing that row
#[tokio::test]
async fn filters_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::helpers::create_league(db).await?;
    let first = factory::create_match(db).await?;
    let second = factory::create_match(db).await?;

    let goal = factory::event::EventFactory::new(db, first.id)
        .player_id(league.player.id)
        .team_id(league.team.id)
        .season_id(league.season.id)
        .build()
        .await?;
    let card = factory::event::EventFactory::new(db, first.id)
        .event_type("red card")
        .build()
        .await?;
    let later_goal = factory::event::EventFactory::new(db, second.id)
        .player_id(league.player.id)
        .build()
        .await?;

    let repo = EventRepository::new(db);

    let by_match: Vec<i32> = repo
        .find_by_match(first.id)
        .await?
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(by_match, vec![goal.id, card.id]);

    let by_player: Vec<i32> = repo
        .find_by_player(league.player.id)
        .await?
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(by_player, vec![goal.id, later_goal.id]);

    let by_season = repo.find_by_season(league.season.id).await?;
    assert_eq!(by_season.len(), 1);
    assert_eq!(by_season[0].id, goal.id);
    assert_eq!(
        by_season[0].player.as_ref().map(|p| p.name.clone()),
        Some(league.player.name.clone())
    );
    assert_eq!(
        by_season[0].team.as_ref().map(|t| t.name.clone()),
        Some(league.team.name.clone())
    );

    Ok(())
}
