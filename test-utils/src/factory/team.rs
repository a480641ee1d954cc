//! Team factory for creating test team entities.
//!
//! Teams default to no tournament and no season and zeroed aggregates.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let team = TeamFactory::new(&db)
///     .name("Falcons")
///     .season_id(season.id)
///     .season_points(12)
///     .build()
///     .await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    tournament_id: Option<i32>,
    season_id: Option<i32>,
    season_goals: i32,
    season_cards: i32,
    season_points: i32,
    season_rank: Option<i32>,
    historical_goals: i32,
    historical_cards: i32,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Team {id}"`
    /// - tournament_id / season_id: `None`
    /// - aggregates: `0`, season_rank: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Team {}", id),
            tournament_id: None,
            season_id: None,
            season_goals: 0,
            season_cards: 0,
            season_points: 0,
            season_rank: None,
            historical_goals: 0,
            historical_cards: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn tournament_id(mut self, tournament_id: i32) -> Self {
        self.tournament_id = Some(tournament_id);
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

    pub fn season_points(mut self, season_points: i32) -> Self {
        self.season_points = season_points;
        self
    }

    pub fn season_rank(mut self, season_rank: Option<i32>) -> Self {
        self.season_rank = season_rank;
        self
    }

    /// Builds and inserts the team entity into the database.
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            tournament_id: ActiveValue::Set(self.tournament_id),
            season_id: ActiveValue::Set(self.season_id),
            season_goals: ActiveValue::Set(self.season_goals),
            season_cards: ActiveValue::Set(self.season_cards),
            season_points: ActiveValue::Set(self.season_points),
            season_rank: ActiveValue::Set(self.season_rank),
            historical_goals: ActiveValue::Set(self.historical_goals),
            historical_cards: ActiveValue::Set(self.historical_cards),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values and no parents.
pub async fn create_team(db: &DatabaseConnection) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).build().await
}
