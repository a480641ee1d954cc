use super::*;

/// Tests deleting a tournament cascades to its teams and matches.
///
/// Teams and matches of other tournaments must survive.
///
/// Expected: Ok with only the other tournament's rows left
#[tokio::test]
async fn deletes_tournament_with_teams_and_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = factory::create_tournament(db).await?;
    let kept = factory::create_tournament(db).await?;

    factory::team::TeamFactory::new(db)
        .tournament_id(doomed.id)
        .build()
        .await?;
    let kept_team = factory::team::TeamFactory::new(db)
        .tournament_id(kept.id)
        .build()
        .await?;
    factory::match_game::MatchFactory::new(db)
        .tournament_id(doomed.id)
        .build()
        .await?;

    TournamentRepository::new(db).delete(doomed.id).await?;

    assert!(entity::prelude::Tournament::find_by_id(doomed.id)
        .one(db)
        .await?
        .is_none());

    let teams = entity::prelude::Team::find().all(db).await?;
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].id, kept_team.id);

    let matches = entity::prelude::MatchGame::find().count(db).await?;
    assert_eq!(matches, 0);

    Ok(())
}
