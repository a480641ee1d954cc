//! Leagueboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! leagueboard service. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and factories for every league table.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_player_operations() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_league_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let team = factory::create_team(db).await?;
//!     let player = factory::player::PlayerFactory::new(db).team_id(team.id).build().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
