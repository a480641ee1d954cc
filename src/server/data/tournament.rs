//! Tournament data repository for database operations.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::tournament::{SaveTournamentParams, Tournament};

/// Repository providing database operations for tournaments.
pub struct TournamentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TournamentRepository<'a> {
    /// Creates a new TournamentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all tournaments ordered by ID.
    pub async fn find_all(&self) -> Result<Vec<Tournament>, DbErr> {
        let entities = entity::prelude::Tournament::find()
            .order_by_asc(entity::tournament::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tournament::from_entity).collect())
    }

    /// Finds a tournament by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Tournament))` - Tournament found
    /// - `Ok(None)` - No tournament with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Tournament>, DbErr> {
        let entity = entity::prelude::Tournament::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Tournament::from_entity))
    }

    /// Checks whether a tournament with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Tournament::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new tournament, or overwrites every field of an existing one.
    ///
    /// # Arguments
    /// - `id` - `None` to insert, `Some(id)` to overwrite that row
    /// - `params` - Field values to store
    ///
    /// # Returns
    /// - `Ok(Tournament)` - The stored tournament
    /// - `Err(DbErr::RecordNotUpdated)` - `id` given but no such row exists
    pub async fn save(
        &self,
        id: Option<i32>,
        params: SaveTournamentParams,
    ) -> Result<Tournament, DbErr> {
        let model = entity::tournament::ActiveModel {
            id: id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            name: ActiveValue::Set(params.name),
            tournament_type: ActiveValue::Set(params.tournament_type),
            participant_type: ActiveValue::Set(params.participant_type),
            gender_restriction: ActiveValue::Set(params.gender_restriction),
        };

        let entity = match id {
            Some(_) => model.update(self.db).await?,
            None => model.insert(self.db).await?,
        };

        Ok(Tournament::from_entity(entity))
    }

    /// Deletes a tournament. Its teams and matches are removed by the database cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Tournament::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Maps tournament IDs to names with a single `IN` query. Unknown IDs are skipped.
    pub async fn names_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, String>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, String)> = entity::prelude::Tournament::find()
            .select_only()
            .column(entity::tournament::Column::Id)
            .column(entity::tournament::Column::Name)
            .filter(entity::tournament::Column::Id.is_in(ids))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().collect())
    }
}
