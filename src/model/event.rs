use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Something that happened during a match, such as a goal or a card.
///
/// `matchId` is required when creating an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    #[serde(default)]
    pub event_id: Option<i32>,
    #[serde(default)]
    pub match_id: Option<i32>,
    pub event_type: String,
    #[serde(default)]
    pub team_id: Option<i32>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub player_id: Option<i32>,
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub season_id: Option<i32>,
    #[serde(default)]
    pub season_name: Option<String>,
}
