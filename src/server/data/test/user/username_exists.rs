use super::*;

/// Tests username lookup for a taken and a free name.
///
/// Expected: Ok(true) for the existing user, Ok(false) otherwise
#[tokio::test]
async fn detects_taken_username() -> Result<(), DbErr> {
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

    let user_repo = UserRepository::new(db);

    assert!(user_repo.username_exists("referee").await?);
    assert!(!user_repo.username_exists("linesman").await?);

    Ok(())
}
