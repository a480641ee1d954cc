use crate::server::{
    error::AppError, model::match_game::SaveMatchParams, service::match_game::MatchService,
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::MatchStatus;
use test_utils::{builder::TestBuilder, factory};

mod complete;
mod create;
