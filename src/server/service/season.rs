//! Season service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::season::SeasonRepository,
    error::AppError,
    model::season::{SaveSeasonParams, Season},
};

pub struct SeasonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeasonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Season>, AppError> {
        Ok(SeasonRepository::new(self.db).find_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Season, AppError> {
        SeasonRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Season", id))
    }

    pub async fn create(&self, params: SaveSeasonParams) -> Result<Season, AppError> {
        let season = SeasonRepository::new(self.db).save(None, params).await?;

        tracing::debug!("Created season {}", season.id);

        Ok(season)
    }

    pub async fn update(&self, id: i32, params: SaveSeasonParams) -> Result<Season, AppError> {
        let repo = SeasonRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::not_found("Season", id));
        }

        let season = repo.save(Some(id), params).await?;

        tracing::debug!("Updated season {}", id);

        Ok(season)
    }

    /// Deletes a season and every team, player, match and event recorded in it.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = SeasonRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::not_found("Season", id));
        }

        repo.delete(id).await?;

        tracing::debug!("Deleted season {}", id);

        Ok(())
    }
}
