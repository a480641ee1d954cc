//! Data transfer objects shared by the HTTP API.
//!
//! Every league record travels as one flat, camelCase JSON object used for both requests and
//! responses. Parent associations are inlined as an id plus display name pair, so a player
//! carries `teamId` and `teamName` rather than a nested team. Identifier and name fields
//! filled in by the server are ignored when they appear in a request body.

pub mod api;
pub mod event;
pub mod health;
pub mod match_game;
pub mod player;
pub mod season;
pub mod team;
pub mod tournament;
pub mod user;
