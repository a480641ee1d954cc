//! Team service.
//!
//! Resolves the tournament and season a team references before every save and keeps the
//! existing references when an update leaves them out.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::team::TeamRepository,
    error::AppError,
    model::team::{SaveTeamParams, Team},
    service::reference::ReferenceResolver,
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Team>, AppError> {
        Ok(TeamRepository::new(self.db).find_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Team", id))
    }

    pub async fn get_by_tournament(&self, tournament_id: i32) -> Result<Vec<Team>, AppError> {
        Ok(TeamRepository::new(self.db)
            .find_by_tournament(tournament_id)
            .await?)
    }

    pub async fn get_by_season(&self, season_id: i32) -> Result<Vec<Team>, AppError> {
        Ok(TeamRepository::new(self.db).find_by_season(season_id).await?)
    }

    pub async fn get_by_tournament_and_season(
        &self,
        tournament_id: i32,
        season_id: i32,
    ) -> Result<Vec<Team>, AppError> {
        Ok(TeamRepository::new(self.db)
            .find_by_tournament_and_season(tournament_id, season_id)
            .await?)
    }

    /// Creates a team after checking its tournament and season exist.
    ///
    /// # Returns
    /// - `Ok(Team)` - Created team with parent names inlined
    /// - `Err(AppError::NotFound)` - Referenced tournament or season does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: SaveTeamParams) -> Result<Team, AppError> {
        self.resolve_references(&params).await?;

        let team = TeamRepository::new(self.db).save(None, params).await?;

        tracing::debug!("Created team {}", team.id);

        Ok(team)
    }

    /// Overwrites an existing team.
    ///
    /// A tournament or season id missing from `params` keeps the team's current one.
    ///
    /// # Returns
    /// - `Ok(Team)` - Updated team
    /// - `Err(AppError::NotFound)` - Team, tournament or season does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, id: i32, params: SaveTeamParams) -> Result<Team, AppError> {
        let existing = self.get_by_id(id).await?;
        let params = params.keep_references_of(&existing);

        self.resolve_references(&params).await?;

        let team = TeamRepository::new(self.db).save(Some(id), params).await?;

        tracing::debug!("Updated team {}", id);

        Ok(team)
    }

    /// Deletes a team and its players.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = TeamRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::not_found("Team", id));
        }

        repo.delete(id).await?;

        tracing::debug!("Deleted team {}", id);

        Ok(())
    }

    async fn resolve_references(&self, params: &SaveTeamParams) -> Result<(), AppError> {
        let resolver = ReferenceResolver::new(self.db);

        resolver.tournament(params.tournament_id).await?;
        resolver.season(params.season_id).await?;

        Ok(())
    }
}
