use crate::server::{
    error::AppError, model::player::SavePlayerParams, service::player::PlayerService,
};
use entity::sea_orm_active_enums::Gender;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod update;

fn params(name: &str, team_id: Option<i32>, season_id: Option<i32>) -> SavePlayerParams {
    SavePlayerParams {
        name: name.to_string(),
        gender: Gender::Male,
        team_id,
        season_id,
        season_goals: 0,
        season_cards: 0,
        historical_goals: 0,
        historical_cards: 0,
    }
}
