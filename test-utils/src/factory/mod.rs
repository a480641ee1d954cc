//! Factory methods for creating test data.
//!
//! Each table has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Foreign keys default to
//! `None` so rows can be created without their parents; set them through the builder.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let season = factory::create_season(&db).await?;
//! let team = factory::team::TeamFactory::new(&db)
//!     .name("Falcons")
//!     .season_id(season.id)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `tournament`, `season`, `team`, `player`, `match_game`, `event`, `user`
//! - `helpers` - ID counter and multi-entity setups

pub mod event;
pub mod helpers;
pub mod match_game;
pub mod player;
pub mod season;
pub mod team;
pub mod tournament;
pub mod user;

pub use event::create_event;
pub use match_game::create_match;
pub use player::create_player;
pub use season::create_season;
pub use team::create_team;
pub use tournament::create_tournament;
pub use user::create_user;
