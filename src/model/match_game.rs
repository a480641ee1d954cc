use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MatchStatusDto {
    #[serde(rename = "F")]
    Finished,
    #[serde(rename = "P")]
    Pending,
}

/// Match record with both teams, the tournament and the season inlined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    #[serde(default)]
    pub match_id: Option<i32>,
    pub match_time: NaiveDateTime,
    #[serde(default)]
    pub match_location: Option<String>,
    #[serde(default)]
    pub home_team_id: Option<i32>,
    #[serde(default)]
    pub home_team_name: Option<String>,
    #[serde(default)]
    pub away_team_id: Option<i32>,
    #[serde(default)]
    pub away_team_name: Option<String>,
    #[serde(default)]
    pub home_score: i32,
    #[serde(default)]
    pub away_score: i32,
    #[serde(default)]
    pub tournament_id: Option<i32>,
    #[serde(default)]
    pub tournament_name: Option<String>,
    #[serde(default)]
    pub season_id: Option<i32>,
    #[serde(default)]
    pub season_name: Option<String>,
    #[serde(default)]
    pub match_status: Option<MatchStatusDto>,
}
