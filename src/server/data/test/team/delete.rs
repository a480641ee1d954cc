use super::*;

/// Tests deleting a team removes its players.
///
/// Expected: Ok with the team and its players gone
#[tokio::test]
async fn deletes_team_with_players() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::helpers::create_league(db).await?;
    let other_player = factory::create_player(db).await?;

    TeamRepository::new(db).delete(league.team.id).await?;

    assert!(entity::prelude::Team::find_by_id(league.team.id)
        .one(db)
        .await?
        .is_none());
    let players = entity::prelude::Player::find().all(db).await?;
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].id, other_player.id);

    Ok(())
}

/// Tests deleting a team keeps its matches and events with the team cleared.
///
/// Expected: Ok with the match's home team and the event's team set to NULL
#[tokio::test]
async fn clears_team_from_matches_and_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db).await?;
    let season = factory::create_season(db).await?;
    let (home, away, fixture) =
        factory::helpers::create_match_with_teams(db, tournament.id, season.id).await?;
    let event = factory::event::EventFactory::new(db, fixture.id)
        .team_id(home.id)
        .build()
        .await?;

    TeamRepository::new(db).delete(home.id).await?;

    let fixture = entity::prelude::MatchGame::find_by_id(fixture.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(fixture.home_team_id, None);
    assert_eq!(fixture.away_team_id, Some(away.id));

    let event = entity::prelude::Event::find_by_id(event.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(event.team_id, None);

    Ok(())
}
