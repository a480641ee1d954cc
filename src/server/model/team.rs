//! Team domain models and parameters.

use crate::{
    model::team::TeamDto,
    server::{
        error::AppError,
        model::parent::{require_name, ParentNames, ParentRef},
    },
};

/// A team with its tournament and season references resolved to display names.
///
/// The season counters and rank are set externally; nothing in the application derives
/// them from match results.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub tournament: Option<ParentRef>,
    pub season: Option<ParentRef>,
    pub season_goals: i32,
    pub season_cards: i32,
    pub season_points: i32,
    pub season_rank: Option<i32>,
    pub historical_goals: i32,
    pub historical_cards: i32,
}

impl Team {
    /// Converts an entity model to a team domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The team row
    /// - `names` - Display names preloaded for the batch the row belongs to
    pub fn from_entity(entity: entity::team::Model, names: &ParentNames) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            tournament: names.tournament(entity.tournament_id),
            season: names.season(entity.season_id),
            season_goals: entity.season_goals,
            season_cards: entity.season_cards,
            season_points: entity.season_points,
            season_rank: entity.season_rank,
            historical_goals: entity.historical_goals,
            historical_cards: entity.historical_cards,
        }
    }

    /// Converts the team domain model to a DTO for API responses.
    pub fn into_dto(self) -> TeamDto {
        let (tournament_id, tournament_name) = ParentRef::into_parts(self.tournament);
        let (season_id, season_name) = ParentRef::into_parts(self.season);

        TeamDto {
            team_id: Some(self.id),
            team_name: self.name,
            tournament_id,
            tournament_name,
            season_id,
            season_name,
            season_goals: self.season_goals,
            season_cards: self.season_cards,
            season_points: self.season_points,
            season_rank: self.season_rank,
            historical_goals: self.historical_goals,
            historical_cards: self.historical_cards,
        }
    }
}

/// Writable team fields. Reference IDs are validated by the service before saving.
#[derive(Debug, Clone)]
pub struct SaveTeamParams {
    pub name: String,
    pub tournament_id: Option<i32>,
    pub season_id: Option<i32>,
    pub season_goals: i32,
    pub season_cards: i32,
    pub season_points: i32,
    pub season_rank: Option<i32>,
    pub historical_goals: i32,
    pub historical_cards: i32,
}

impl SaveTeamParams {
    /// Converts a request DTO. Inlined names are ignored.
    pub fn from_dto(dto: TeamDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_name("teamName", dto.team_name)?,
            tournament_id: dto.tournament_id,
            season_id: dto.season_id,
            season_goals: dto.season_goals,
            season_cards: dto.season_cards,
            season_points: dto.season_points,
            season_rank: dto.season_rank,
            historical_goals: dto.historical_goals,
            historical_cards: dto.historical_cards,
        })
    }

    /// Keeps the existing tournament and season for references the update left out.
    pub fn keep_references_of(mut self, existing: &Team) -> Self {
        self.tournament_id = self
            .tournament_id
            .or(existing.tournament.as_ref().map(|t| t.id));
        self.season_id = self.season_id.or(existing.season.as_ref().map(|s| s.id));
        self
    }
}
