//! Match event domain models and parameters.

use crate::{
    model::event::EventDto,
    server::{
        error::AppError,
        model::parent::{require_name, ParentNames, ParentRef},
    },
};

/// Something that happened during a match. `event_type` is free text such as
/// "goal", "yellow card" or "red card".
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub match_id: i32,
    pub event_type: String,
    pub team: Option<ParentRef>,
    pub player: Option<ParentRef>,
    pub season: Option<ParentRef>,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model, names: &ParentNames) -> Self {
        Self {
            id: entity.id,
            match_id: entity.match_id,
            event_type: entity.event_type,
            team: names.team(entity.team_id),
            player: names.player(entity.player_id),
            season: names.season(entity.season_id),
        }
    }

    pub fn into_dto(self) -> EventDto {
        let (team_id, team_name) = ParentRef::into_parts(self.team);
        let (player_id, player_name) = ParentRef::into_parts(self.player);
        let (season_id, season_name) = ParentRef::into_parts(self.season);

        EventDto {
            event_id: Some(self.id),
            match_id: Some(self.match_id),
            event_type: self.event_type,
            team_id,
            team_name,
            player_id,
            player_name,
            season_id,
            season_name,
        }
    }
}

/// Writable event fields.
///
/// `match_id` is optional here so an update can leave the match unchanged; creating an
/// event without one is rejected by the service.
#[derive(Debug, Clone)]
pub struct SaveEventParams {
    pub match_id: Option<i32>,
    pub event_type: String,
    pub team_id: Option<i32>,
    pub player_id: Option<i32>,
    pub season_id: Option<i32>,
}

impl SaveEventParams {
    pub fn from_dto(dto: EventDto) -> Result<Self, AppError> {
        Ok(Self {
            match_id: dto.match_id,
            event_type: require_name("eventType", dto.event_type)?,
            team_id: dto.team_id,
            player_id: dto.player_id,
            season_id: dto.season_id,
        })
    }

    /// Keeps the existing match, team, player and season for references the update left out.
    pub fn keep_references_of(mut self, existing: &Event) -> Self {
        self.match_id = self.match_id.or(Some(existing.match_id));
        self.team_id = self.team_id.or(existing.team.as_ref().map(|t| t.id));
        self.player_id = self.player_id.or(existing.player.as_ref().map(|p| p.id));
        self.season_id = self.season_id.or(existing.season.as_ref().map(|s| s.id));
        self
    }
}
