//! Match event service.
//!
//! Events always belong to a match: creating one without `matchId` is rejected, and an
//! update without `matchId` keeps the event on its current match.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::event::EventRepository,
    error::AppError,
    model::event::{Event, SaveEventParams},
    service::reference::ReferenceResolver,
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db).find_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Event, AppError> {
        EventRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Event", id))
    }

    pub async fn get_by_match(&self, match_id: i32) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db).find_by_match(match_id).await?)
    }

    pub async fn get_by_season(&self, season_id: i32) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db)
            .find_by_season(season_id)
            .await?)
    }

    pub async fn get_by_player(&self, player_id: i32) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db)
            .find_by_player(player_id)
            .await?)
    }

    /// Records a new event.
    ///
    /// # Returns
    /// - `Ok(Event)` - Created event
    /// - `Err(AppError::BadRequest)` - `matchId` missing
    /// - `Err(AppError::NotFound)` - Match, team, player or season does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: SaveEventParams) -> Result<Event, AppError> {
        let Some(match_id) = params.match_id else {
            return Err(AppError::BadRequest("matchId is required".to_string()));
        };

        self.resolve_references(match_id, &params).await?;

        let event = EventRepository::new(self.db)
            .save(None, match_id, params)
            .await?;

        tracing::debug!("Recorded event {} for match {}", event.id, match_id);

        Ok(event)
    }

    pub async fn update(&self, id: i32, params: SaveEventParams) -> Result<Event, AppError> {
        let existing = self.get_by_id(id).await?;
        let params = params.keep_references_of(&existing);
        let match_id = params.match_id.unwrap_or(existing.match_id);

        self.resolve_references(match_id, &params).await?;

        let event = EventRepository::new(self.db)
            .save(Some(id), match_id, params)
            .await?;

        tracing::debug!("Updated event {}", id);

        Ok(event)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = EventRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Event", id));
        }

        repo.delete(id).await?;

        tracing::debug!("Deleted event {}", id);

        Ok(())
    }

    async fn resolve_references(
        &self,
        match_id: i32,
        params: &SaveEventParams,
    ) -> Result<(), AppError> {
        let resolver = ReferenceResolver::new(self.db);

        resolver.match_game(match_id).await?;
        resolver.team(params.team_id).await?;
        resolver.player(params.player_id).await?;
        resolver.season(params.season_id).await?;

        Ok(())
    }
}
