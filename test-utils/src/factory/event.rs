//! Event factory for creating test match event entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events. The match is required, everything else is optional.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    match_id: i32,
    event_type: String,
    team_id: Option<i32>,
    player_id: Option<i32>,
    season_id: Option<i32>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory for the given match.
    ///
    /// Defaults:
    /// - event_type: `"goal"`
    /// - team_id / player_id / season_id: `None`
    pub fn new(db: &'a DatabaseConnection, match_id: i32) -> Self {
        Self {
            db,
            match_id,
            event_type: "goal".to_string(),
            team_id: None,
            player_id: None,
            season_id: None,
        }
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    pub fn team_id(mut self, team_id: i32) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn player_id(mut self, player_id: i32) -> Self {
        self.player_id = Some(player_id);
        self
    }

    pub fn season_id(mut self, season_id: i32) -> Self {
        self.season_id = Some(season_id);
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            id: ActiveValue::NotSet,
            match_id: ActiveValue::Set(self.match_id),
            event_type: ActiveValue::Set(self.event_type),
            team_id: ActiveValue::Set(self.team_id),
            player_id: ActiveValue::Set(self.player_id),
            season_id: ActiveValue::Set(self.season_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a goal event for the given match.
pub async fn create_event(
    db: &DatabaseConnection,
    match_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, match_id).build().await
}
