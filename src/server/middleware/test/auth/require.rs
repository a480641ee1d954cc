use super::*;

/// Tests a request without a logged-in user.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Record])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a user that no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase) carrying the stale ID
#[tokio::test]
async fn rejects_session_user_missing_from_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).login(4242).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(user_id))) => {
            assert_eq!(user_id, 4242)
        }
        other => panic!("Expected UserNotInDatabase, got: {:?}", other),
    }

    Ok(())
}

/// Tests that recorders may create and update records.
///
/// Expected: Ok(User) with the recorder role
#[tokio::test]
async fn grants_record_permission_to_recorder() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("scorekeeper")
        .role(UserRole::Recorder)
        .build()
        .await?;
    AuthSession::new(session).login(user.id).await?;

    let returned = AuthGuard::new(db, session)
        .require(&[Permission::Record])
        .await?;

    assert_eq!(returned.id, user.id);
    assert_eq!(returned.username, "scorekeeper");
    assert_eq!(returned.role, UserRole::Recorder);

    Ok(())
}

/// Tests that admins pass both the record and admin checks at once.
///
/// Expected: Ok(User)
#[tokio::test]
async fn admin_passes_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::UserFactory::new(db)
        .role(UserRole::Admin)
        .build()
        .await?;
    AuthSession::new(session).login(admin.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Record, Permission::Admin])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that viewers cannot write.
///
/// Expected: Err(AuthError::AccessDenied) for the viewer's ID
#[tokio::test]
async fn denies_record_permission_to_viewer() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let viewer = factory::create_user(db).await?;
    AuthSession::new(session).login(viewer.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Record])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, viewer.id);
            assert!(message.contains("recorder"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}

/// Tests that recorders cannot delete.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_permission_to_recorder() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let recorder = factory::user::UserFactory::new(db)
        .role(UserRole::Recorder)
        .build()
        .await?;
    AuthSession::new(session).login(recorder.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that a deactivated admin loses access.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_deactivated_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::UserFactory::new(db)
        .role(UserRole::Admin)
        .active(false)
        .build()
        .await?;
    AuthSession::new(session).login(admin.id).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
