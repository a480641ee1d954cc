//! Season factory for creating test season entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test seasons with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let season = SeasonFactory::new(&db).name("2025 Spring").build().await?;
/// ```
pub struct SeasonFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    start_time: Option<NaiveDateTime>,
    end_time: Option<NaiveDateTime>,
}

impl<'a> SeasonFactory<'a> {
    /// Creates a new SeasonFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Season {id}"`
    /// - start_time: now
    /// - end_time: 90 days from now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now().naive_utc();
        Self {
            db,
            name: format!("Season {}", id),
            start_time: Some(now),
            end_time: Some(now + Duration::days(90)),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn start_time(mut self, start_time: Option<NaiveDateTime>) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn end_time(mut self, end_time: Option<NaiveDateTime>) -> Self {
        self.end_time = end_time;
        self
    }

    /// Builds and inserts the season entity into the database.
    pub async fn build(self) -> Result<entity::season::Model, DbErr> {
        entity::season::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a season with default values.
pub async fn create_season(db: &DatabaseConnection) -> Result<entity::season::Model, DbErr> {
    SeasonFactory::new(db).build().await
}
