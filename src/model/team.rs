use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Team record with its tournament and season inlined.
///
/// Aggregate counters left out of a request are stored as `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    #[serde(default)]
    pub team_id: Option<i32>,
    pub team_name: String,
    #[serde(default)]
    pub tournament_id: Option<i32>,
    #[serde(default)]
    pub tournament_name: Option<String>,
    #[serde(default)]
    pub season_id: Option<i32>,
    #[serde(default)]
    pub season_name: Option<String>,
    #[serde(default)]
    pub season_goals: i32,
    #[serde(default)]
    pub season_cards: i32,
    #[serde(default)]
    pub season_points: i32,
    #[serde(default)]
    pub season_rank: Option<i32>,
    #[serde(default)]
    pub historical_goals: i32,
    #[serde(default)]
    pub historical_cards: i32,
}
