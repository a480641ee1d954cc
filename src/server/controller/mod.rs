//! HTTP request handlers.
//!
//! One module per league table plus authentication and health. Handlers convert DTOs to
//! domain parameters, call the matching service and convert the result back. Every
//! mutating handler calls `AuthGuard::require` before anything else.

pub mod auth;
pub mod event;
pub mod health;
pub mod match_game;
pub mod player;
pub mod season;
pub mod team;
pub mod tournament;

#[cfg(test)]
mod test;
