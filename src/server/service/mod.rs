//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Reference Resolution**: Checking every foreign key of a request before saving
//! - **Orchestration**: Coordinating repository calls for a single create, update or delete
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod event;
pub mod health;
pub mod match_game;
pub mod player;
pub mod reference;
pub mod season;
pub mod team;
pub mod tournament;

#[cfg(test)]
mod test;
