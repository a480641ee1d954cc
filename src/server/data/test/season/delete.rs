use super::*;

/// Tests deleting a season removes everything recorded in it.
///
/// Verifies the cascade reaches teams, players, matches and events, while the
/// tournament the teams were entered in is untouched.
///
/// Expected: Ok with no teams, players, matches or events left
#[tokio::test]
async fn deletes_season_with_dependent_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::helpers::create_league(db).await?;
    let (_, _, fixture) =
        factory::helpers::create_match_with_teams(db, league.tournament.id, league.season.id)
            .await?;
    factory::event::EventFactory::new(db, fixture.id)
        .season_id(league.season.id)
        .player_id(league.player.id)
        .build()
        .await?;

    SeasonRepository::new(db).delete(league.season.id).await?;

    assert_eq!(entity::prelude::Team::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Player::find().count(db).await?, 0);
    assert_eq!(entity::prelude::MatchGame::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Event::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Tournament::find().count(db).await?, 1);

    Ok(())
}
