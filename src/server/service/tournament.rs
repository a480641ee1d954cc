//! Tournament service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::tournament::TournamentRepository,
    error::AppError,
    model::tournament::{SaveTournamentParams, Tournament},
};

pub struct TournamentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TournamentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Tournament>, AppError> {
        Ok(TournamentRepository::new(self.db).find_all().await?)
    }

    /// Gets a tournament by ID.
    ///
    /// # Returns
    /// - `Ok(Tournament)` - Tournament found
    /// - `Err(AppError::NotFound)` - No tournament with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Tournament, AppError> {
        TournamentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Tournament", id))
    }

    pub async fn create(&self, params: SaveTournamentParams) -> Result<Tournament, AppError> {
        let tournament = TournamentRepository::new(self.db).save(None, params).await?;

        tracing::debug!("Created tournament {}", tournament.id);

        Ok(tournament)
    }

    /// Overwrites every field of an existing tournament.
    ///
    /// # Returns
    /// - `Ok(Tournament)` - Updated tournament
    /// - `Err(AppError::NotFound)` - No tournament with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        params: SaveTournamentParams,
    ) -> Result<Tournament, AppError> {
        let repo = TournamentRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::not_found("Tournament", id));
        }

        let tournament = repo.save(Some(id), params).await?;

        tracing::debug!("Updated tournament {}", id);

        Ok(tournament)
    }

    /// Deletes a tournament together with its teams and matches.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = TournamentRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::not_found("Tournament", id));
        }

        repo.delete(id).await?;

        tracing::debug!("Deleted tournament {}", id);

        Ok(())
    }
}
