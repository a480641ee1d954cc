//! Match factory for creating test match entities.

use chrono::{Duration, NaiveDateTime, Utc};
use entity::sea_orm_active_enums::MatchStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test matches with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = MatchFactory::new(&db)
///     .home_team_id(home.id)
///     .away_team_id(away.id)
///     .score(2, 1)
///     .status(Some(MatchStatus::Finished))
///     .build()
///     .await?;
/// ```
pub struct MatchFactory<'a> {
    db: &'a DatabaseConnection,
    match_time: NaiveDateTime,
    location: Option<String>,
    home_team_id: Option<i32>,
    away_team_id: Option<i32>,
    home_score: i32,
    away_score: i32,
    tournament_id: Option<i32>,
    season_id: Option<i32>,
    status: Option<MatchStatus>,
}

impl<'a> MatchFactory<'a> {
    /// Creates a new MatchFactory with default values.
    ///
    /// Defaults:
    /// - match_time: 1 day from now
    /// - location: `Some("Main Pitch")`
    /// - teams, tournament, season: `None`
    /// - score: `0 - 0`
    /// - status: `Some(Pending)`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            match_time: Utc::now().naive_utc() + Duration::days(1),
            location: Some("Main Pitch".to_string()),
            home_team_id: None,
            away_team_id: None,
            home_score: 0,
            away_score: 0,
            tournament_id: None,
            season_id: None,
            status: Some(MatchStatus::Pending),
        }
    }

    pub fn match_time(mut self, match_time: NaiveDateTime) -> Self {
        self.match_time = match_time;
        self
    }

    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    pub fn home_team_id(mut self, team_id: i32) -> Self {
        self.home_team_id = Some(team_id);
        self
    }

    pub fn away_team_id(mut self, team_id: i32) -> Self {
        self.away_team_id = Some(team_id);
        self
    }

    pub fn score(mut self, home: i32, away: i32) -> Self {
        self.home_score = home;
        self.away_score = away;
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

    pub fn status(mut self, status: Option<MatchStatus>) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the match entity into the database.
    pub async fn build(self) -> Result<entity::match_game::Model, DbErr> {
        entity::match_game::ActiveModel {
            id: ActiveValue::NotSet,
            match_time: ActiveValue::Set(self.match_time),
            location: ActiveValue::Set(self.location),
            home_team_id: ActiveValue::Set(self.home_team_id),
            away_team_id: ActiveValue::Set(self.away_team_id),
            home_score: ActiveValue::Set(self.home_score),
            away_score: ActiveValue::Set(self.away_score),
            tournament_id: ActiveValue::Set(self.tournament_id),
            season_id: ActiveValue::Set(self.season_id),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending match with default values and no parents.
pub async fn create_match(db: &DatabaseConnection) -> Result<entity::match_game::Model, DbErr> {
    MatchFactory::new(db).build().await
}
