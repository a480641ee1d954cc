use crate::server::{data::team::TeamRepository, model::team::SaveTeamParams};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_id;
mod find_by_tournament_and_season;
mod save;
