use super::*;

/// Tests inserting an event with only its match.
///
/// Expected: Ok(Event) with team, player and season unset
#[tokio::test]
async fn inserts_event_for_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::create_match(db).await?;

    let saved = EventRepository::new(db)
        .save(
            None,
            fixture.id,
            SaveEventParams {
                match_id: Some(fixture.id),
                event_type: "goal".to_string(),
                team_id: None,
                player_id: None,
                season_id: None,
            },
        )
        .await?;

    assert_eq!(saved.match_id, fixture.id);
    assert_eq!(saved.event_type, "goal");
    assert_eq!(saved.team, None);
    assert_eq!(saved.player, None);

    Ok(())
}

/// Tests deleting a player keeps their events with the player cleared.
///
/// Expected: Ok with the event's player set to NULL
#[tokio::test]
async fn keeps_event_when_player_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::create_match(db).await?;
    let player = factory::create_player(db).await?;
    let event = factory::event::EventFactory::new(db, fixture.id)
        .player_id(player.id)
        .build()
        .await?;

    entity::prelude::Player::delete_by_id(player.id)
        .exec(db)
        .await?;

    let found = EventRepository::new(db).find_by_id(event.id).await?.unwrap();
    assert_eq!(found.player, None);
    assert_eq!(found.match_id, fixture.id);

    Ok(())
}
