use super::*;

/// Tests loading credentials by username.
///
/// Expected: Ok(Some) with the stored hash, Ok(None) for an unknown username
#[tokio::test]
async fn finds_hash_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("referee")
        .password_hash("$argon2id$stored")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let credentials = repo.find_credentials("referee").await?.unwrap();
    assert_eq!(credentials.user.id, user.id);
    assert_eq!(credentials.password_hash, "$argon2id$stored");

    assert!(repo.find_credentials("linesman").await?.is_none());

    Ok(())
}
