use super::*;

/// Tests that a team's matches include home and away fixtures.
///
/// Expected: Ok with both fixtures of the team and none of the unrelated one
#[tokio::test]
async fn finds_home_and_away_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let falcons = factory::team::TeamFactory::new(db)
        .name("Falcons")
        .build()
        .await?;
    let hawks = factory::team::TeamFactory::new(db)
        .name("Hawks")
        .build()
        .await?;
    let owls = factory::create_team(db).await?;
    let ravens = factory::create_team(db).await?;

    let home = factory::match_game::MatchFactory::new(db)
        .home_team_id(falcons.id)
        .away_team_id(hawks.id)
        .build()
        .await?;
    let away = factory::match_game::MatchFactory::new(db)
        .home_team_id(owls.id)
        .away_team_id(falcons.id)
        .match_time(home.match_time + chrono::Duration::days(7))
        .build()
        .await?;
    factory::match_game::MatchFactory::new(db)
        .home_team_id(owls.id)
        .away_team_id(ravens.id)
        .build()
        .await?;

    let matches = MatchRepository::new(db).find_by_team(falcons.id).await?;

    let ids: Vec<i32> = matches.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![home.id, away.id]);
    assert_eq!(
        matches[0].away_team.as_ref().map(|t| t.name.as_str()),
        Some("Hawks")
    );
    assert_eq!(
        matches[1].away_team.as_ref().map(|t| t.name.as_str()),
        Some("Falcons")
    );

    Ok(())
}
