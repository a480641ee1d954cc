use crate::server::data::match_game::MatchRepository;
use entity::sea_orm_active_enums::MatchStatus;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_season;
mod find_by_team;
mod find_by_tournament;
mod set_status;
