use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Which players a tournament admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum GenderRestrictionDto {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "U")]
    Unrestricted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDto {
    #[serde(default)]
    pub tournament_id: Option<i32>,
    pub tournament_name: String,
    #[serde(default)]
    pub tournament_type: Option<String>,
    #[serde(default)]
    pub participant_type: Option<String>,
    #[serde(default)]
    pub gender_restriction: Option<GenderRestrictionDto>,
}
