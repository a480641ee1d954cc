//! Foreign key resolution shared by the league services.
//!
//! Every reference id carried by a create or update request is looked up by identity before
//! anything is persisted, so a dangling id fails with `AppError::NotFound` instead of a
//! database constraint error.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        match_game::MatchRepository, player::PlayerRepository, season::SeasonRepository,
        team::TeamRepository, tournament::TournamentRepository,
    },
    error::AppError,
};

pub struct ReferenceResolver<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReferenceResolver<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks that the referenced tournament exists. `None` leaves the association unset.
    ///
    /// # Returns
    /// - `Ok(())` - No reference, or the tournament exists
    /// - `Err(AppError::NotFound)` - No tournament with that id
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn tournament(&self, id: Option<i32>) -> Result<(), AppError> {
        match id {
            Some(id) if !TournamentRepository::new(self.db).exists(id).await? => {
                Err(AppError::not_found("Tournament", id))
            }
            _ => Ok(()),
        }
    }

    pub async fn season(&self, id: Option<i32>) -> Result<(), AppError> {
        match id {
            Some(id) if !SeasonRepository::new(self.db).exists(id).await? => {
                Err(AppError::not_found("Season", id))
            }
            _ => Ok(()),
        }
    }

    pub async fn team(&self, id: Option<i32>) -> Result<(), AppError> {
        match id {
            Some(id) if !TeamRepository::new(self.db).exists(id).await? => {
                Err(AppError::not_found("Team", id))
            }
            _ => Ok(()),
        }
    }

    pub async fn player(&self, id: Option<i32>) -> Result<(), AppError> {
        match id {
            Some(id) if !PlayerRepository::new(self.db).exists(id).await? => {
                Err(AppError::not_found("Player", id))
            }
            _ => Ok(()),
        }
    }

    /// Checks that the match an event belongs to exists.
    pub async fn match_game(&self, id: i32) -> Result<(), AppError> {
        if !MatchRepository::new(self.db).exists(id).await? {
            return Err(AppError::not_found("Match", id));
        }

        Ok(())
    }
}
