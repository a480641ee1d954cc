use super::*;

/// Tests mapping season IDs to names.
///
/// Expected: Ok with one entry per existing ID, unknown IDs skipped
#[tokio::test]
async fn maps_existing_ids_to_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let spring = factory::season::SeasonFactory::new(db)
        .name("2025 Spring")
        .build()
        .await?;
    let autumn = factory::season::SeasonFactory::new(db)
        .name("2025 Autumn")
        .build()
        .await?;

    let names = SeasonRepository::new(db)
        .names_by_ids(vec![spring.id, autumn.id, 9999])
        .await?;

    assert_eq!(names.len(), 2);
    assert_eq!(names.get(&spring.id).map(String::as_str), Some("2025 Spring"));
    assert_eq!(names.get(&autumn.id).map(String::as_str), Some("2025 Autumn"));

    Ok(())
}

/// Tests that an empty ID list skips the query.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn returns_empty_map_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let names = SeasonRepository::new(db).names_by_ids(vec![]).await?;

    assert!(names.is_empty());

    Ok(())
}
