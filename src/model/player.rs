use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum GenderDto {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

/// Player record with its team and season inlined.
///
/// Aggregate counters left out of a request are stored as `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    #[serde(default)]
    pub player_id: Option<i32>,
    pub player_name: String,
    pub gender: GenderDto,
    #[serde(default)]
    pub team_id: Option<i32>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub season_id: Option<i32>,
    #[serde(default)]
    pub season_name: Option<String>,
    #[serde(default)]
    pub season_goals: i32,
    #[serde(default)]
    pub season_cards: i32,
    #[serde(default)]
    pub historical_goals: i32,
    #[serde(default)]
    pub historical_cards: i32,
}
