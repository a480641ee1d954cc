//! Player factory for creating test player entities.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::Gender;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    gender: Gender,
    team_id: Option<i32>,
    season_id: Option<i32>,
    season_goals: i32,
    season_cards: i32,
    historical_goals: i32,
    historical_cards: i32,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Player {id}"`
    /// - gender: `Male`
    /// - team_id / season_id: `None`
    /// - aggregates: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Player {}", id),
            gender: Gender::Male,
            team_id: None,
            season_id: None,
            season_goals: 0,
            season_cards: 0,
            historical_goals: 0,
            historical_cards: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn team_id(mut self, team_id: i32) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn season_id(mut self, season_id: i32) -> Self {
        self.season_id = Some(season_id);
        self
    }

    pub fn season_goals(mut self, season_goals: i32) -> Self {
        self.season_goals = season_goals;
        self
    }

    /// Builds and inserts the player entity into the database.
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            gender: ActiveValue::Set(self.gender),
            team_id: ActiveValue::Set(self.team_id),
            season_id: ActiveValue::Set(self.season_id),
            season_goals: ActiveValue::Set(self.season_goals),
            season_cards: ActiveValue::Set(self.season_cards),
            historical_goals: ActiveValue::Set(self.historical_goals),
            historical_cards: ActiveValue::Set(self.historical_cards),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values and no parents.
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}
