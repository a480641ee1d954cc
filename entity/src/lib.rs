//! SeaORM entity models for the league schema.
//!
//! Tables form a fixed hierarchy: tournaments and seasons own teams, teams own players,
//! matches belong to a tournament and season, and events belong to a match.

pub mod prelude;

pub mod event;
pub mod match_game;
pub mod player;
pub mod sea_orm_active_enums;
pub mod season;
pub mod team;
pub mod tournament;
pub mod user;
