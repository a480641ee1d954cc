//! Match service.

use entity::sea_orm_active_enums::MatchStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::match_game::MatchRepository,
    error::AppError,
    model::match_game::{Match, SaveMatchParams},
    service::reference::ReferenceResolver,
};

pub struct MatchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Match>, AppError> {
        Ok(MatchRepository::new(self.db).find_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Match, AppError> {
        MatchRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Match", id))
    }

    pub async fn get_by_season(&self, season_id: i32) -> Result<Vec<Match>, AppError> {
        Ok(MatchRepository::new(self.db)
            .find_by_season(season_id)
            .await?)
    }

    pub async fn get_by_tournament(&self, tournament_id: i32) -> Result<Vec<Match>, AppError> {
        Ok(MatchRepository::new(self.db)
            .find_by_tournament(tournament_id)
            .await?)
    }

    /// Gets every match the team plays in, home or away.
    pub async fn get_by_team(&self, team_id: i32) -> Result<Vec<Match>, AppError> {
        Ok(MatchRepository::new(self.db).find_by_team(team_id).await?)
    }

    /// Creates a match after checking both teams, the tournament and the season exist.
    ///
    /// # Returns
    /// - `Ok(Match)` - Created match with every parent name inlined
    /// - `Err(AppError::NotFound)` - A referenced row does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: SaveMatchParams) -> Result<Match, AppError> {
        self.resolve_references(&params).await?;

        let fixture = MatchRepository::new(self.db).save(None, params).await?;

        tracing::debug!("Created match {}", fixture.id);

        Ok(fixture)
    }

    pub async fn update(&self, id: i32, params: SaveMatchParams) -> Result<Match, AppError> {
        let existing = self.get_by_id(id).await?;
        let params = params.keep_references_of(&existing);

        self.resolve_references(&params).await?;

        let fixture = MatchRepository::new(self.db).save(Some(id), params).await?;

        tracing::debug!("Updated match {}", id);

        Ok(fixture)
    }

    /// Marks a match as finished without touching any other field.
    ///
    /// # Returns
    /// - `Ok(Match)` - The finished match
    /// - `Err(AppError::NotFound)` - No match with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn complete(&self, id: i32) -> Result<Match, AppError> {
        let repo = MatchRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::not_found("Match", id));
        }

        let fixture = repo.set_status(id, MatchStatus::Finished).await?;

        tracing::debug!("Completed match {}", id);

        Ok(fixture)
    }

    /// Deletes a match and its events.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = MatchRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::not_found("Match", id));
        }

        repo.delete(id).await?;

        tracing::debug!("Deleted match {}", id);

        Ok(())
    }

    async fn resolve_references(&self, params: &SaveMatchParams) -> Result<(), AppError> {
        let resolver = ReferenceResolver::new(self.db);

        resolver.team(params.home_team_id).await?;
        resolver.team(params.away_team_id).await?;
        resolver.tournament(params.tournament_id).await?;
        resolver.season(params.season_id).await?;

        Ok(())
    }
}
