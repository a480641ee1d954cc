//! Player data repository for database operations.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::{
    data::{distinct_ids, season::SeasonRepository, team::TeamRepository},
    model::{
        parent::ParentNames,
        player::{Player, SavePlayerParams},
    },
};

/// Repository providing database operations for players.
///
/// Returned players carry their team and season names, loaded in bulk for each query.
pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<Player>, DbErr> {
        self.fetch(entity::prelude::Player::find()).await
    }

    /// Finds a player by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - Player found, with team and season names
    /// - `Ok(None)` - No player with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Player>, DbErr> {
        let Some(entity) = entity::prelude::Player::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let names = self.load_names(std::slice::from_ref(&entity)).await?;

        Ok(Some(Player::from_entity(entity, &names)))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Player::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the roster of a team across all seasons.
    pub async fn find_by_team(&self, team_id: i32) -> Result<Vec<Player>, DbErr> {
        self.fetch(
            entity::prelude::Player::find().filter(entity::player::Column::TeamId.eq(team_id)),
        )
        .await
    }

    pub async fn find_by_season(&self, season_id: i32) -> Result<Vec<Player>, DbErr> {
        self.fetch(
            entity::prelude::Player::find().filter(entity::player::Column::SeasonId.eq(season_id)),
        )
        .await
    }

    /// Gets the players registered with a team for one season.
    pub async fn find_by_team_and_season(
        &self,
        team_id: i32,
        season_id: i32,
    ) -> Result<Vec<Player>, DbErr> {
        self.fetch(
            entity::prelude::Player::find()
                .filter(entity::player::Column::TeamId.eq(team_id))
                .filter(entity::player::Column::SeasonId.eq(season_id)),
        )
        .await
    }

    /// Inserts a new player (`id` is `None`) or overwrites every field of an existing one.
    ///
    /// # Returns
    /// - `Ok(Player)` - The stored player with resolved parent names
    /// - `Err(DbErr)` - Database error, including a foreign key violation
    pub async fn save(&self, id: Option<i32>, params: SavePlayerParams) -> Result<Player, DbErr> {
        let model = entity::player::ActiveModel {
            id: id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            name: ActiveValue::Set(params.name),
            gender: ActiveValue::Set(params.gender),
            team_id: ActiveValue::Set(params.team_id),
            season_id: ActiveValue::Set(params.season_id),
            season_goals: ActiveValue::Set(params.season_goals),
            season_cards: ActiveValue::Set(params.season_cards),
            historical_goals: ActiveValue::Set(params.historical_goals),
            historical_cards: ActiveValue::Set(params.historical_cards),
        };

        let entity = match id {
            Some(_) => model.update(self.db).await?,
            None => model.insert(self.db).await?,
        };

        let names = self.load_names(std::slice::from_ref(&entity)).await?;

        Ok(Player::from_entity(entity, &names))
    }

    /// Deletes a player. Events naming the player keep existing with the player cleared.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Player::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Maps player IDs to names with a single `IN` query. Unknown IDs are skipped.
    pub async fn names_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, String>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, String)> = entity::prelude::Player::find()
            .select_only()
            .column(entity::player::Column::Id)
            .column(entity::player::Column::Name)
            .filter(entity::player::Column::Id.is_in(ids))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().collect())
    }

    async fn fetch(&self, query: Select<entity::prelude::Player>) -> Result<Vec<Player>, DbErr> {
        let entities = query
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?;

        let names = self.load_names(&entities).await?;

        Ok(entities
            .into_iter()
            .map(|entity| Player::from_entity(entity, &names))
            .collect())
    }

    async fn load_names(&self, entities: &[entity::player::Model]) -> Result<ParentNames, DbErr> {
        let teams = TeamRepository::new(self.db)
            .names_by_ids(distinct_ids(entities.iter().map(|e| e.team_id)))
            .await?;
        let seasons = SeasonRepository::new(self.db)
            .names_by_ids(distinct_ids(entities.iter().map(|e| e.season_id)))
            .await?;

        Ok(ParentNames {
            teams,
            seasons,
            ..Default::default()
        })
    }
}
