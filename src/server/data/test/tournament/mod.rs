use crate::server::{
    data::tournament::TournamentRepository, model::tournament::SaveTournamentParams,
};
use entity::sea_orm_active_enums::GenderRestriction;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod save;
