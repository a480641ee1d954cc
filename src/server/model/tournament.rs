//! Tournament domain models and parameters.

use entity::sea_orm_active_enums::GenderRestriction;

use crate::{
    model::tournament::{GenderRestrictionDto, TournamentDto},
    server::{error::AppError, model::parent::require_name},
};

/// A competition that teams and matches are entered into.
#[derive(Debug, Clone, PartialEq)]
pub struct Tournament {
    pub id: i32,
    pub name: String,
    pub tournament_type: Option<String>,
    pub participant_type: Option<String>,
    pub gender_restriction: Option<GenderRestriction>,
}

impl Tournament {
    /// Converts an entity model to a tournament domain model at the repository boundary.
    pub fn from_entity(entity: entity::tournament::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            tournament_type: entity.tournament_type,
            participant_type: entity.participant_type,
            gender_restriction: entity.gender_restriction,
        }
    }

    /// Converts the tournament domain model to a DTO for API responses.
    pub fn into_dto(self) -> TournamentDto {
        TournamentDto {
            tournament_id: Some(self.id),
            tournament_name: self.name,
            tournament_type: self.tournament_type,
            participant_type: self.participant_type,
            gender_restriction: self.gender_restriction.map(Into::into),
        }
    }
}

/// Full set of writable tournament fields, used for both create and update.
#[derive(Debug, Clone)]
pub struct SaveTournamentParams {
    pub name: String,
    pub tournament_type: Option<String>,
    pub participant_type: Option<String>,
    pub gender_restriction: Option<GenderRestriction>,
}

impl SaveTournamentParams {
    /// Converts a request DTO, rejecting a blank name.
    pub fn from_dto(dto: TournamentDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_name("tournamentName", dto.tournament_name)?,
            tournament_type: dto.tournament_type,
            participant_type: dto.participant_type,
            gender_restriction: dto.gender_restriction.map(Into::into),
        })
    }
}

impl From<GenderRestriction> for GenderRestrictionDto {
    fn from(value: GenderRestriction) -> Self {
        match value {
            GenderRestriction::Male => GenderRestrictionDto::Male,
            GenderRestriction::Female => GenderRestrictionDto::Female,
            GenderRestriction::Unrestricted => GenderRestrictionDto::Unrestricted,
        }
    }
}

impl From<GenderRestrictionDto> for GenderRestriction {
    fn from(value: GenderRestrictionDto) -> Self {
        match value {
            GenderRestrictionDto::Male => GenderRestriction::Male,
            GenderRestrictionDto::Female => GenderRestriction::Female,
            GenderRestrictionDto::Unrestricted => GenderRestriction::Unrestricted,
        }
    }
}
