use super::*;

fn params(name: &str) -> SaveTournamentParams {
    SaveTournamentParams {
        name: name.to_string(),
        tournament_type: Some("league".to_string()),
        participant_type: Some("club".to_string()),
        gender_restriction: Some(GenderRestriction::Female),
    }
}

/// Tests inserting a tournament when no ID is given.
///
/// Expected: Ok with a new ID and all fields stored
#[tokio::test]
async fn inserts_new_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TournamentRepository::new(db);
    let saved = repo.save(None, params("City Cup")).await?;

    assert!(saved.id > 0);
    assert_eq!(saved.name, "City Cup");
    assert_eq!(saved.gender_restriction, Some(GenderRestriction::Female));

    let found = repo.find_by_id(saved.id).await?;
    assert_eq!(found, Some(saved));

    Ok(())
}

/// Tests overwriting an existing tournament by ID.
///
/// Verifies every column is replaced, including optional ones cleared to NULL.
///
/// Expected: Ok with the same ID and the new values
#[tokio::test]
async fn overwrites_existing_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_tournament(db).await?;

    let repo = TournamentRepository::new(db);
    let saved = repo
        .save(
            Some(existing.id),
            SaveTournamentParams {
                name: "Renamed".to_string(),
                tournament_type: None,
                participant_type: None,
                gender_restriction: None,
            },
        )
        .await?;

    assert_eq!(saved.id, existing.id);
    assert_eq!(saved.name, "Renamed");
    assert_eq!(saved.tournament_type, None);
    assert_eq!(saved.gender_restriction, None);

    let count = entity::prelude::Tournament::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests overwriting a tournament that does not exist.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_to_overwrite_missing_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TournamentRepository::new(db)
        .save(Some(9999), params("Ghost Cup"))
        .await;

    assert!(result.is_err());

    Ok(())
}
