use super::*;

/// Tests creating a user.
///
/// Expected: Ok(User) active with the requested role
#[tokio::test]
async fn creates_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParams {
            username: "referee".to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
            role: UserRole::Recorder,
        })
        .await?;

    assert_eq!(user.username, "referee");
    assert_eq!(user.role, UserRole::Recorder);
    assert!(user.active);

    Ok(())
}

/// Tests that usernames are unique.
///
/// Expected: Err(DbErr) for the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("referee")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParams {
            username: "referee".to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
            role: UserRole::Viewer,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
