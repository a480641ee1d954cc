use super::*;

/// Tests filtering teams by tournament, by season and by both.
///
/// Four teams cover each combination of two tournaments and two seasons.
///
/// Expected: each filter returns exactly the matching teams
#[tokio::test]
async fn filters_by_foreign_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cup = factory::create_tournament(db).await?;
    let league = factory::create_tournament(db).await?;
    let spring = factory::create_season(db).await?;
    let autumn = factory::create_season(db).await?;

    let cup_spring = factory::team::TeamFactory::new(db)
        .tournament_id(cup.id)
        .season_id(spring.id)
        .build()
        .await?;
    let cup_autumn = factory::team::TeamFactory::new(db)
        .tournament_id(cup.id)
        .season_id(autumn.id)
        .build()
        .await?;
    let league_spring = factory::team::TeamFactory::new(db)
        .tournament_id(league.id)
        .season_id(spring.id)
        .build()
        .await?;
    factory::team::TeamFactory::new(db)
        .tournament_id(league.id)
        .season_id(autumn.id)
        .build()
        .await?;

    let repo = TeamRepository::new(db);

    let by_cup: Vec<i32> = repo
        .find_by_tournament(cup.id)
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(by_cup, vec![cup_spring.id, cup_autumn.id]);

    let by_spring: Vec<i32> = repo
        .find_by_season(spring.id)
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(by_spring, vec![cup_spring.id, league_spring.id]);

    let both = repo.find_by_tournament_and_season(cup.id, spring.id).await?;
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].id, cup_spring.id);

    let none = repo.find_by_tournament_and_season(cup.id, 9999).await?;
    assert!(none.is_empty());

    Ok(())
}
