use super::*;

/// Tests deleting a match removes its events only.
///
/// Expected: Ok with the match's events gone and the other match's event kept
#[tokio::test]
async fn deletes_match_with_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = factory::create_match(db).await?;
    let kept = factory::create_match(db).await?;
    factory::create_event(db, doomed.id).await?;
    factory::event::EventFactory::new(db, doomed.id)
        .event_type("yellow card")
        .build()
        .await?;
    let kept_event = factory::create_event(db, kept.id).await?;

    MatchRepository::new(db).delete(doomed.id).await?;

    assert_eq!(entity::prelude::MatchGame::find().count(db).await?, 1);
    let events = entity::prelude::Event::find().all(db).await?;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, kept_event.id);

    Ok(())
}
