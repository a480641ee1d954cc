use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    /// Application name
    pub app: String,
    /// Crate version
    pub version: String,
    /// `up` when the database answered a ping, otherwise `down`
    pub db: String,
    /// `ok` or `degraded`
    pub status: String,
}
