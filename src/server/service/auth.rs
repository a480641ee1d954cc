//! Username and password authentication.
//!
//! The service checks credentials and creates accounts. Storing the logged-in user in the session is left to
//! the controller through `AuthSession`.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, User},
    util::password::{hash_password, verify_password, DUMMY_HASH},
};

/// Service for registering users and logging them in with a username and password.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks a username and password.
    ///
    /// Unknown usernames, wrong passwords and deactivated accounts all fail with the same
    /// error. An unknown username is still checked against `DUMMY_HASH` so it takes as long
    /// as a wrong password.
    ///
    /// # Arguments
    /// - `username` - Login name
    /// - `password` - Plain text password from the request
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match an active account
    /// - `Err(AppError::AuthErr(AuthError::InvalidCredentials))` - Credentials rejected
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(credentials) = UserRepository::new(self.db)
            .find_credentials(username)
            .await?
        else {
            verify_password(password, DUMMY_HASH);
            tracing::debug!("Login attempt for unknown user {}", username);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &credentials.password_hash) {
            tracing::debug!("Wrong password for user {}", credentials.user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        if !credentials.user.active {
            tracing::debug!("Login attempt for deactivated user {}", credentials.user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!("User {} logged in", credentials.user.username);

        Ok(credentials.user)
    }

    /// Creates an active account with the given role.
    ///
    /// # Arguments
    /// - `username` - Login name, surrounding whitespace is trimmed
    /// - `password` - Plain text password, stored only as an Argon2id hash
    /// - `role` - Role granted to the new account
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Blank username or password, or username taken
    /// - `Err(AppError::DbErr)` - Database error during insert
    /// - `Err(AppError::InternalErr)` - Password could not be hashed
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        role: UserRole,
    ) -> Result<User, AppError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::BadRequest("username must not be blank".to_string()));
        }
        if password.is_empty() {
            return Err(AppError::BadRequest("password must not be blank".to_string()));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.username_exists(username).await? {
            return Err(AppError::BadRequest(format!(
                "Username {} is already taken",
                username
            )));
        }

        let user = user_repo
            .create(CreateUserParams {
                username: username.to_string(),
                password_hash: hash_password(password)?,
                role,
            })
            .await?;

        tracing::info!("Registered user {} as {:?}", user.username, user.role);

        Ok(user)
    }
}
