//! User domain models and parameters.
//!
//! Users exist only to authorize writes; they are not part of the league data.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;

use crate::model::user::{RoleDto, UserDto};

/// Application user without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub role: UserRole,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            role: self.role.into(),
        }
    }

    /// Converts an entity model to a user domain model, dropping the password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            role: entity.role,
            active: entity.active,
            created_at: entity.created_at,
        }
    }
}

/// A user together with the stored password hash, used only during login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    /// Argon2id PHC string, never the plain password.
    pub password_hash: String,
    pub role: UserRole,
}

impl From<RoleDto> for UserRole {
    fn from(value: RoleDto) -> Self {
        match value {
            RoleDto::Admin => UserRole::Admin,
            RoleDto::Recorder => UserRole::Recorder,
            RoleDto::Viewer => UserRole::Viewer,
        }
    }
}

impl From<UserRole> for RoleDto {
    fn from(value: UserRole) -> Self {
        match value {
            UserRole::Admin => RoleDto::Admin,
            UserRole::Recorder => RoleDto::Recorder,
            UserRole::Viewer => RoleDto::Viewer,
        }
    }
}
