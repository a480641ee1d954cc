//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! league records and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parent associations are held as `ParentRef` values (id plus display name), never as
//! the parent record itself.

pub mod event;
pub mod health;
pub mod match_game;
pub mod parent;
pub mod player;
pub mod season;
pub mod team;
pub mod tournament;
pub mod user;
