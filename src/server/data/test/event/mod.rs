use crate::server::{data::event::EventRepository, model::event::SaveEventParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_by_match;
mod save;
