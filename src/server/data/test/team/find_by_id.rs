use super::*;

/// Tests that a found team carries its parents' IDs and names.
///
/// Expected: Ok(Some(Team)) with tournament and season references
#[tokio::test]
async fn resolves_parent_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::tournament::TournamentFactory::new(db)
        .name("City Cup")
        .build()
        .await?;
    let season = factory::season::SeasonFactory::new(db)
        .name("2025")
        .build()
        .await?;
    let team = factory::team::TeamFactory::new(db)
        .name("Falcons")
        .tournament_id(tournament.id)
        .season_id(season.id)
        .build()
        .await?;

    let found = TeamRepository::new(db).find_by_id(team.id).await?.unwrap();

    assert_eq!(found.name, "Falcons");
    let found_tournament = found.tournament.unwrap();
    assert_eq!(found_tournament.id, tournament.id);
    assert_eq!(found_tournament.name, "City Cup");
    let found_season = found.season.unwrap();
    assert_eq!(found_season.id, season.id);
    assert_eq!(found_season.name, "2025");

    Ok(())
}

/// Tests a team without parents.
///
/// Expected: Ok(Some(Team)) with both references unset
#[tokio::test]
async fn leaves_unset_parents_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;

    let found = TeamRepository::new(db).find_by_id(team.id).await?.unwrap();

    assert_eq!(found.tournament, None);
    assert_eq!(found.season, None);

    Ok(())
}

/// Tests looking up an ID that was never created.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = TeamRepository::new(db).find_by_id(9999).await?;

    assert!(found.is_none());

    Ok(())
}
