use crate::server::{error::AppError, model::team::SaveTeamParams, service::team::TeamService};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod update;

fn params(name: &str, tournament_id: Option<i32>, season_id: Option<i32>) -> SaveTeamParams {
    SaveTeamParams {
        name: name.to_string(),
        tournament_id,
        season_id,
        season_goals: 0,
        season_cards: 0,
        season_points: 0,
        season_rank: None,
        historical_goals: 0,
        historical_cards: 0,
    }
}
