use super::*;

/// Tests registering a recorder and logging in with the new account.
///
/// Expected: Ok(User) with the granted role, then a successful login
#[tokio::test]
async fn registered_user_can_log_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let auth_service = AuthService::new(db);
    let user = auth_service
        .register(" scorer ", "whistle", UserRole::Recorder)
        .await?;

    assert_eq!(user.username, "scorer");
    assert_eq!(user.role, UserRole::Recorder);
    assert!(user.active);

    let logged_in = auth_service.login("scorer", "whistle").await?;
    assert_eq!(logged_in.id, user.id);

    Ok(())
}

/// Tests registering a username that is already taken.
///
/// Expected: Err(AppError::BadRequest) and no second account
#[tokio::test]
async fn rejects_taken_username() -> Result<(), AppError> {
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

    let result = AuthService::new(db)
        .register("referee", "whistle", UserRole::Admin)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests registering with a blank username or password.
///
/// Expected: Err(AppError::BadRequest) in both cases
#[tokio::test]
async fn rejects_blank_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let auth_service = AuthService::new(db);

    let blank_name = auth_service.register("  ", "whistle", UserRole::Viewer).await;
    let blank_password = auth_service.register("fan", "", UserRole::Viewer).await;

    assert!(matches!(blank_name, Err(AppError::BadRequest(_))));
    assert!(matches!(blank_password, Err(AppError::BadRequest(_))));

    Ok(())
}
