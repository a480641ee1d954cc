use super::*;

/// Tests updating an event without sending its match.
///
/// Expected: Ok(Event) still attached to the original match
#[tokio::test]
async fn keeps_match_when_left_out() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::create_match(db).await?;
    let event = factory::create_event(db, fixture.id).await?;

    let mut update = params(None, None);
    update.event_type = "yellow card".to_string();

    let updated = EventService::new(db).update(event.id, update).await?;

    assert_eq!(updated.match_id, fixture.id);
    assert_eq!(updated.event_type, "yellow card");

    Ok(())
}
