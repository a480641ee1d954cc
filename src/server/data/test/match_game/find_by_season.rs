use super::*;

/// Tests listing the matches of one season.
///
/// Expected: Ok with only that season's matches, earliest kick-off first and ties by id
#[tokio::test]
async fn finds_season_matches_in_kick_off_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let spring = factory::season::create_season(db).await?;
    let autumn = factory::season::create_season(db).await?;
    let kick_off = chrono::Utc::now().naive_utc() + chrono::Duration::days(3);

    let late = factory::match_game::MatchFactory::new(db)
        .season_id(spring.id)
        .match_time(kick_off + chrono::Duration::days(7))
        .build()
        .await?;
    let early = factory::match_game::MatchFactory::new(db)
        .season_id(spring.id)
        .match_time(kick_off)
        .build()
        .await?;
    let same_time = factory::match_game::MatchFactory::new(db)
        .season_id(spring.id)
        .match_time(kick_off)
        .build()
        .await?;
    factory::match_game::MatchFactory::new(db)
        .season_id(autumn.id)
        .match_time(kick_off)
        .build()
        .await?;
    factory::match_game::create_match(db).await?;

    let matches = MatchRepository::new(db).find_by_season(spring.id).await?;

    let ids: Vec<i32> = matches.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![early.id, same_time.id, late.id]);
    assert!(matches
        .iter()
        .all(|m| m.season.as_ref().map(|s| s.id) == Some(spring.id)));
    assert_eq!(
        matches[0].season.as_ref().map(|s| s.name.as_str()),
        Some(spring.name.as_str())
    );

    Ok(())
}

/// Tests listing matches of a season with no fixtures.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_for_season_without_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::season::create_season(db).await?;
    factory::match_game::create_match(db).await?;

    let matches = MatchRepository::new(db).find_by_season(season.id).await?;

    assert!(matches.is_empty());

    Ok(())
}
