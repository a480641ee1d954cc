//! Season data repository for database operations.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::season::{SaveSeasonParams, Season};

/// Repository providing database operations for seasons.
pub struct SeasonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeasonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all seasons ordered by ID.
    pub async fn find_all(&self) -> Result<Vec<Season>, DbErr> {
        let entities = entity::prelude::Season::find()
            .order_by_asc(entity::season::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Season::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Season>, DbErr> {
        let entity = entity::prelude::Season::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Season::from_entity))
    }

    /// Checks whether a season with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Season::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new season, or overwrites every field of an existing one.
    ///
    /// # Arguments
    /// - `id` - `None` to insert, `Some(id)` to overwrite that row
    /// - `params` - Field values to store
    ///
    /// # Returns
    /// - `Ok(Season)` - The stored season
    /// - `Err(DbErr::RecordNotUpdated)` - `id` given but no such row exists
    pub async fn save(
        &self,
        id: Option<i32>,
        params: SaveSeasonParams,
    ) -> Result<Season, DbErr> {
        let model = entity::season::ActiveModel {
            id: id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            name: ActiveValue::Set(params.name),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
        };

        let entity = match id {
            Some(_) => model.update(self.db).await?,
            None => model.insert(self.db).await?,
        };

        Ok(Season::from_entity(entity))
    }

    /// Deletes a season.
    ///
    /// Teams, players, matches and events of the season are removed by the database cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Season::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Maps season IDs to names with a single `IN` query. Unknown IDs are skipped.
    pub async fn names_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, String>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, String)> = entity::prelude::Season::find()
            .select_only()
            .column(entity::season::Column::Id)
            .column(entity::season::Column::Name)
            .filter(entity::season::Column::Id.is_in(ids))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().collect())
    }
}
