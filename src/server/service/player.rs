//! Player service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::player::PlayerRepository,
    error::AppError,
    model::player::{Player, SavePlayerParams},
    service::reference::ReferenceResolver,
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Player>, AppError> {
        Ok(PlayerRepository::new(self.db).find_all().await?)
    }

    /// Gets a player by ID.
    ///
    /// # Returns
    /// - `Ok(Player)` - Player with team and season names inlined
    /// - `Err(AppError::NotFound)` - No player with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Player, AppError> {
        PlayerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Player", id))
    }

    pub async fn get_by_team(&self, team_id: i32) -> Result<Vec<Player>, AppError> {
        Ok(PlayerRepository::new(self.db).find_by_team(team_id).await?)
    }

    pub async fn get_by_season(&self, season_id: i32) -> Result<Vec<Player>, AppError> {
        Ok(PlayerRepository::new(self.db)
            .find_by_season(season_id)
            .await?)
    }

    pub async fn get_by_team_and_season(
        &self,
        team_id: i32,
        season_id: i32,
    ) -> Result<Vec<Player>, AppError> {
        Ok(PlayerRepository::new(self.db)
            .find_by_team_and_season(team_id, season_id)
            .await?)
    }

    /// Creates a player after checking its team and season exist.
    ///
    /// Nothing is stored when a reference is missing.
    ///
    /// # Returns
    /// - `Ok(Player)` - Created player
    /// - `Err(AppError::NotFound)` - Referenced team or season does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: SavePlayerParams) -> Result<Player, AppError> {
        self.resolve_references(&params).await?;

        let player = PlayerRepository::new(self.db).save(None, params).await?;

        tracing::debug!("Created player {}", player.id);

        Ok(player)
    }

    pub async fn update(&self, id: i32, params: SavePlayerParams) -> Result<Player, AppError> {
        let existing = self.get_by_id(id).await?;
        let params = params.keep_references_of(&existing);

        self.resolve_references(&params).await?;

        let player = PlayerRepository::new(self.db).save(Some(id), params).await?;

        tracing::debug!("Updated player {}", id);

        Ok(player)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = PlayerRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::not_found("Player", id));
        }

        repo.delete(id).await?;

        tracing::debug!("Deleted player {}", id);

        Ok(())
    }

    async fn resolve_references(&self, params: &SavePlayerParams) -> Result<(), AppError> {
        let resolver = ReferenceResolver::new(self.db);

        resolver.team(params.team_id).await?;
        resolver.season(params.season_id).await?;

        Ok(())
    }
}
