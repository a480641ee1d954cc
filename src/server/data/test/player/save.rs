use super::*;

/// Tests overwriting a player moves them to another team.
///
/// Expected: Ok(Player) with the new team name resolved
#[tokio::test]
async fn overwrites_player_and_resolves_new_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hawks = factory::team::TeamFactory::new(db)
        .name("Hawks")
        .build()
        .await?;
    let league = factory::helpers::create_league(db).await?;

    let saved = PlayerRepository::new(db)
        .save(
            Some(league.player.id),
            SavePlayerParams {
                name: "Sam".to_string(),
                gender: Gender::Female,
                team_id: Some(hawks.id),
                season_id: Some(league.season.id),
                season_goals: 5,
                season_cards: 0,
                historical_goals: 5,
                historical_cards: 1,
            },
        )
        .await?;

    assert_eq!(saved.id, league.player.id);
    assert_eq!(saved.name, "Sam");
    assert_eq!(saved.gender, Gender::Female);
    assert_eq!(saved.team.map(|t| t.name), Some("Hawks".to_string()));
    assert_eq!(saved.season.map(|s| s.id), Some(league.season.id));

    let stored = entity::prelude::Player::find_by_id(league.player.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.team_id, Some(hawks.id));
    assert_eq!(stored.season_goals, 5);

    Ok(())
}
