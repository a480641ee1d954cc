use super::*;

/// Tests listing the matches of one tournament.
///
/// Expected: Ok with only that tournament's matches, earliest kick-off first and ties by id
#[tokio::test]
async fn finds_tournament_matches_in_kick_off_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cup = factory::tournament::create_tournament(db).await?;
    let league = factory::tournament::create_tournament(db).await?;
    let kick_off = chrono::Utc::now().naive_utc() + chrono::Duration::days(3);

    let final_match = factory::match_game::MatchFactory::new(db)
        .tournament_id(cup.id)
        .match_time(kick_off + chrono::Duration::days(14))
        .build()
        .await?;
    let first_semi = factory::match_game::MatchFactory::new(db)
        .tournament_id(cup.id)
        .match_time(kick_off)
        .build()
        .await?;
    let second_semi = factory::match_game::MatchFactory::new(db)
        .tournament_id(cup.id)
        .match_time(kick_off)
        .build()
        .await?;
    factory::match_game::MatchFactory::new(db)
        .tournament_id(league.id)
        .match_time(kick_off - chrono::Duration::days(1))
        .build()
        .await?;

    let matches = MatchRepository::new(db).find_by_tournament(cup.id).await?;

    let ids: Vec<i32> = matches.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![first_semi.id, second_semi.id, final_match.id]);
    assert_eq!(
        matches[2].tournament.as_ref().map(|t| t.name.as_str()),
        Some(cup.name.as_str())
    );

    Ok(())
}
