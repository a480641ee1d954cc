//! Season domain models and parameters.

use chrono::NaiveDateTime;

use crate::{
    model::season::SeasonDto,
    server::{error::AppError, model::parent::require_name},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Season {
    pub id: i32,
    pub name: String,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
}

impl Season {
    pub fn from_entity(entity: entity::season::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            start_time: entity.start_time,
            end_time: entity.end_time,
        }
    }

    pub fn into_dto(self) -> SeasonDto {
        SeasonDto {
            season_id: Some(self.id),
            season_name: self.name,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveSeasonParams {
    pub name: String,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
}

impl SaveSeasonParams {
    /// Converts a request DTO.
    ///
    /// # Returns
    /// - `Ok(SaveSeasonParams)` - Valid parameters
    /// - `Err(AppError::BadRequest)` - Blank name, or the season ends before it starts
    pub fn from_dto(dto: SeasonDto) -> Result<Self, AppError> {
        if let (Some(start), Some(end)) = (dto.start_time, dto.end_time) {
            if end < start {
                return Err(AppError::BadRequest(
                    "Season endTime must not be before startTime".to_string(),
                ));
            }
        }

        Ok(Self {
            name: require_name("seasonName", dto.season_name)?,
            start_time: dto.start_time,
            end_time: dto.end_time,
        })
    }
}
