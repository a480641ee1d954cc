//! Team data repository for database operations.
//!
//! Every query returning teams resolves tournament and season names for the whole result
//! set before converting rows into `Team` domain models.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::{
    data::{distinct_ids, season::SeasonRepository, tournament::TournamentRepository},
    model::{
        parent::ParentNames,
        team::{SaveTeamParams, Team},
    },
};

/// Repository providing database operations for teams.
pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    /// Creates a new TeamRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all teams ordered by ID.
    pub async fn find_all(&self) -> Result<Vec<Team>, DbErr> {
        self.fetch(entity::prelude::Team::find()).await
    }

    /// Finds a team by ID with its tournament and season names.
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - Team found
    /// - `Ok(None)` - No team with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let Some(entity) = entity::prelude::Team::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let names = self.load_names(std::slice::from_ref(&entity)).await?;

        Ok(Some(Team::from_entity(entity, &names)))
    }

    /// Checks whether a team with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Team::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Gets all teams entered in a tournament.
    pub async fn find_by_tournament(&self, tournament_id: i32) -> Result<Vec<Team>, DbErr> {
        self.fetch(
            entity::prelude::Team::find()
                .filter(entity::team::Column::TournamentId.eq(tournament_id)),
        )
        .await
    }

    /// Gets all teams playing in a season.
    pub async fn find_by_season(&self, season_id: i32) -> Result<Vec<Team>, DbErr> {
        self.fetch(entity::prelude::Team::find().filter(entity::team::Column::SeasonId.eq(season_id)))
            .await
    }

    /// Gets the teams that belong to both the tournament and the season.
    pub async fn find_by_tournament_and_season(
        &self,
        tournament_id: i32,
        season_id: i32,
    ) -> Result<Vec<Team>, DbErr> {
        self.fetch(
            entity::prelude::Team::find()
                .filter(entity::team::Column::TournamentId.eq(tournament_id))
                .filter(entity::team::Column::SeasonId.eq(season_id)),
        )
        .await
    }

    /// Inserts a new team, or overwrites every field of an existing one.
    ///
    /// Reference IDs are stored as given; callers check that they exist.
    ///
    /// # Arguments
    /// - `id` - `None` to insert, `Some(id)` to overwrite that row
    /// - `params` - Field values to store
    ///
    /// # Returns
    /// - `Ok(Team)` - The stored team with resolved parent names
    /// - `Err(DbErr)` - Database error, including a foreign key violation
    pub async fn save(&self, id: Option<i32>, params: SaveTeamParams) -> Result<Team, DbErr> {
        let model = entity::team::ActiveModel {
            id: id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            name: ActiveValue::Set(params.name),
            tournament_id: ActiveValue::Set(params.tournament_id),
            season_id: ActiveValue::Set(params.season_id),
            season_goals: ActiveValue::Set(params.season_goals),
            season_cards: ActiveValue::Set(params.season_cards),
            season_points: ActiveValue::Set(params.season_points),
            season_rank: ActiveValue::Set(params.season_rank),
            historical_goals: ActiveValue::Set(params.historical_goals),
            historical_cards: ActiveValue::Set(params.historical_cards),
        };

        let entity = match id {
            Some(_) => model.update(self.db).await?,
            None => model.insert(self.db).await?,
        };

        let names = self.load_names(std::slice::from_ref(&entity)).await?;

        Ok(Team::from_entity(entity, &names))
    }

    /// Deletes a team.
    ///
    /// Its players are removed by the database cascade; matches and events that
    /// referenced the team keep existing with the reference cleared.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Maps team IDs to names with a single `IN` query. Unknown IDs are skipped.
    pub async fn names_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, String>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, String)> = entity::prelude::Team::find()
            .select_only()
            .column(entity::team::Column::Id)
            .column(entity::team::Column::Name)
            .filter(entity::team::Column::Id.is_in(ids))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().collect())
    }

    async fn fetch(&self, query: Select<entity::prelude::Team>) -> Result<Vec<Team>, DbErr> {
        let entities = query
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await?;

        let names = self.load_names(&entities).await?;

        Ok(entities
            .into_iter()
            .map(|entity| Team::from_entity(entity, &names))
            .collect())
    }

    async fn load_names(&self, entities: &[entity::team::Model]) -> Result<ParentNames, DbErr> {
        let tournaments = TournamentRepository::new(self.db)
            .names_by_ids(distinct_ids(entities.iter().map(|e| e.tournament_id)))
            .await?;
        let seasons = SeasonRepository::new(self.db)
            .names_by_ids(distinct_ids(entities.iter().map(|e| e.season_id)))
            .await?;

        Ok(ParentNames {
            tournaments,
            seasons,
            ..Default::default()
        })
    }
}
