use crate::server::{data::player::PlayerRepository, model::player::SavePlayerParams};
use entity::sea_orm_active_enums::Gender;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod save;
