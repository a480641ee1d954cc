//! Match domain models and parameters.

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::MatchStatus;

use crate::{
    model::match_game::{MatchDto, MatchStatusDto},
    server::model::parent::{ParentNames, ParentRef},
};

/// A scheduled or played match between two teams.
///
/// Either team may be unset, either because it was never assigned or because the team
/// was deleted after the match was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: i32,
    pub match_time: NaiveDateTime,
    pub location: Option<String>,
    pub home_team: Option<ParentRef>,
    pub away_team: Option<ParentRef>,
    pub home_score: i32,
    pub away_score: i32,
    pub tournament: Option<ParentRef>,
    pub season: Option<ParentRef>,
    pub status: Option<MatchStatus>,
}

impl Match {
    pub fn from_entity(entity: entity::match_game::Model, names: &ParentNames) -> Self {
        Self {
            id: entity.id,
            match_time: entity.match_time,
            location: entity.location,
            home_team: names.team(entity.home_team_id),
            away_team: names.team(entity.away_team_id),
            home_score: entity.home_score,
            away_score: entity.away_score,
            tournament: names.tournament(entity.tournament_id),
            season: names.season(entity.season_id),
            status: entity.status,
        }
    }

    pub fn into_dto(self) -> MatchDto {
        let (home_team_id, home_team_name) = ParentRef::into_parts(self.home_team);
        let (away_team_id, away_team_name) = ParentRef::into_parts(self.away_team);
        let (tournament_id, tournament_name) = ParentRef::into_parts(self.tournament);
        let (season_id, season_name) = ParentRef::into_parts(self.season);

        MatchDto {
            match_id: Some(self.id),
            match_time: self.match_time,
            match_location: self.location,
            home_team_id,
            home_team_name,
            away_team_id,
            away_team_name,
            home_score: self.home_score,
            away_score: self.away_score,
            tournament_id,
            tournament_name,
            season_id,
            season_name,
            match_status: self.status.map(Into::into),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveMatchParams {
    pub match_time: NaiveDateTime,
    pub location: Option<String>,
    pub home_team_id: Option<i32>,
    pub away_team_id: Option<i32>,
    pub home_score: i32,
    pub away_score: i32,
    pub tournament_id: Option<i32>,
    pub season_id: Option<i32>,
    pub status: Option<MatchStatus>,
}

impl SaveMatchParams {
    /// Converts a request DTO. Inlined names are ignored.
    pub fn from_dto(dto: MatchDto) -> Self {
        Self {
            match_time: dto.match_time,
            location: dto.match_location,
            home_team_id: dto.home_team_id,
            away_team_id: dto.away_team_id,
            home_score: dto.home_score,
            away_score: dto.away_score,
            tournament_id: dto.tournament_id,
            season_id: dto.season_id,
            status: dto.match_status.map(Into::into),
        }
    }

    /// Keeps the existing teams, tournament and season for references the update left out.
    pub fn keep_references_of(mut self, existing: &Match) -> Self {
        self.home_team_id = self
            .home_team_id
            .or(existing.home_team.as_ref().map(|t| t.id));
        self.away_team_id = self
            .away_team_id
            .or(existing.away_team.as_ref().map(|t| t.id));
        self.tournament_id = self
            .tournament_id
            .or(existing.tournament.as_ref().map(|t| t.id));
        self.season_id = self.season_id.or(existing.season.as_ref().map(|s| s.id));
        self
    }
}

impl From<MatchStatus> for MatchStatusDto {
    fn from(value: MatchStatus) -> Self {
        match value {
            MatchStatus::Finished => MatchStatusDto::Finished,
            MatchStatus::Pending => MatchStatusDto::Pending,
        }
    }
}

impl From<MatchStatusDto> for MatchStatus {
    fn from(value: MatchStatusDto) -> Self {
        match value {
            MatchStatusDto::Finished => MatchStatus::Finished,
            MatchStatusDto::Pending => MatchStatus::Pending,
        }
    }
}
