//! Player domain models and parameters.

use entity::sea_orm_active_enums::Gender;

use crate::{
    model::player::{GenderDto, PlayerDto},
    server::{
        error::AppError,
        model::parent::{require_name, ParentNames, ParentRef},
    },
};

/// A player with team and season references resolved to display names.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub gender: Gender,
    pub team: Option<ParentRef>,
    pub season: Option<ParentRef>,
    pub season_goals: i32,
    pub season_cards: i32,
    pub historical_goals: i32,
    pub historical_cards: i32,
}

impl Player {
    /// Converts an entity model to a player domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The player row
    /// - `names` - Display names preloaded for the batch the row belongs to
    pub fn from_entity(entity: entity::player::Model, names: &ParentNames) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            gender: entity.gender,
            team: names.team(entity.team_id),
            season: names.season(entity.season_id),
            season_goals: entity.season_goals,
            season_cards: entity.season_cards,
            historical_goals: entity.historical_goals,
            historical_cards: entity.historical_cards,
        }
    }

    /// Converts the player domain model to a DTO for API responses.
    pub fn into_dto(self) -> PlayerDto {
        let (team_id, team_name) = ParentRef::into_parts(self.team);
        let (season_id, season_name) = ParentRef::into_parts(self.season);

        PlayerDto {
            player_id: Some(self.id),
            player_name: self.name,
            gender: self.gender.into(),
            team_id,
            team_name,
            season_id,
            season_name,
            season_goals: self.season_goals,
            season_cards: self.season_cards,
            historical_goals: self.historical_goals,
            historical_cards: self.historical_cards,
        }
    }
}

/// Writable player fields. Reference IDs are validated by the service before saving.
#[derive(Debug, Clone)]
pub struct SavePlayerParams {
    pub name: String,
    pub gender: Gender,
    pub team_id: Option<i32>,
    pub season_id: Option<i32>,
    pub season_goals: i32,
    pub season_cards: i32,
    pub historical_goals: i32,
    pub historical_cards: i32,
}

impl SavePlayerParams {
    /// Converts a request DTO. Inlined names are ignored.
    pub fn from_dto(dto: PlayerDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_name("playerName", dto.player_name)?,
            gender: dto.gender.into(),
            team_id: dto.team_id,
            season_id: dto.season_id,
            season_goals: dto.season_goals,
            season_cards: dto.season_cards,
            historical_goals: dto.historical_goals,
            historical_cards: dto.historical_cards,
        })
    }

    /// Keeps the existing team and season for references the update left out.
    pub fn keep_references_of(mut self, existing: &Player) -> Self {
        self.team_id = self.team_id.or(existing.team.as_ref().map(|t| t.id));
        self.season_id = self.season_id.or(existing.season.as_ref().map(|s| s.id));
        self
    }
}

impl From<Gender> for GenderDto {
    fn from(value: Gender) -> Self {
        match value {
            Gender::Male => GenderDto::Male,
            Gender::Female => GenderDto::Female,
        }
    }
}

impl From<GenderDto> for Gender {
    fn from(value: GenderDto) -> Self {
        match value {
            GenderDto::Male => Gender::Male,
            GenderDto::Female => Gender::Female,
        }
    }
}
