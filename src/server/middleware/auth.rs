use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Capability checked by `AuthGuard::require`.
pub enum Permission {
    /// Create and update league records. Granted to admins and recorders.
    Record,
    /// Delete league records. Granted to admins only.
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Logged-in, active user holding all permissions
    /// - `Err(AuthError::UserNotInSession)` - No user in session
    /// - `Err(AuthError::UserNotInDatabase)` - Session user was deleted
    /// - `Err(AuthError::AccessDenied)` - Account inactive or a permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.active {
            return Err(
                AuthError::AccessDenied(user_id, "account is deactivated".to_string()).into(),
            );
        }

        for permission in permissions {
            match permission {
                Permission::Record => {
                    if !matches!(user.role, UserRole::Admin | UserRole::Recorder) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "creating or updating records requires the recorder or admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::Admin => {
                    if user.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "deleting records requires the admin role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
