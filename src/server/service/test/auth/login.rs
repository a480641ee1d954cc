use super::*;

/// Tests logging in with the right password.
///
/// Expected: Ok(User) for the matching account
#[tokio::test]
async fn accepts_matching_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("referee")
        .password_hash(hash_password("whistle")?)
        .role(UserRole::Recorder)
        .build()
        .await?;

    let logged_in = AuthService::new(db).login("referee", "whistle").await?;

    assert_eq!(logged_in.id, user.id);
    assert_eq!(logged_in.role, UserRole::Recorder);

    Ok(())
}

/// Tests logging in with a wrong password, an unknown username and a deactivated account.
///
/// Expected: Err(AuthError::InvalidCredentials) in every case
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("referee")
        .password_hash(hash_password("whistle")?)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("retired")
        .password_hash(hash_password("whistle")?)
        .active(false)
        .build()
        .await?;

    let service = AuthService::new(db);

    for (username, password) in [
        ("referee", "offside"),
        ("linesman", "whistle"),
        ("retired", "whistle"),
    ] {
        let result = service.login(username, password).await;
        assert!(
            matches!(result, Err(AppError::AuthErr(AuthError::InvalidCredentials))),
            "{} should be rejected",
            username
        );
    }

    Ok(())
}
