//! Match data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use entity::sea_orm_active_enums::MatchStatus;

use crate::server::{
    data::{
        distinct_ids, season::SeasonRepository, team::TeamRepository,
        tournament::TournamentRepository,
    },
    model::{
        match_game::{Match, SaveMatchParams},
        parent::ParentNames,
    },
};

/// Repository providing database operations for matches.
///
/// Results are ordered by kick-off time, then ID.
pub struct MatchRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchRepository<'a> {
    /// Creates a new MatchRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<Match>, DbErr> {
        self.fetch(entity::prelude::MatchGame::find()).await
    }

    /// Finds a match by ID with team, tournament and season names.
    ///
    /// # Returns
    /// - `Ok(Some(Match))` - Match found
    /// - `Ok(None)` - No match with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Match>, DbErr> {
        let Some(entity) = entity::prelude::MatchGame::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let names = self.load_names(std::slice::from_ref(&entity)).await?;

        Ok(Some(Match::from_entity(entity, &names)))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::MatchGame::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn find_by_season(&self, season_id: i32) -> Result<Vec<Match>, DbErr> {
        self.fetch(
            entity::prelude::MatchGame::find()
                .filter(entity::match_game::Column::SeasonId.eq(season_id)),
        )
        .await
    }

    pub async fn find_by_tournament(&self, tournament_id: i32) -> Result<Vec<Match>, DbErr> {
        self.fetch(
            entity::prelude::MatchGame::find()
                .filter(entity::match_game::Column::TournamentId.eq(tournament_id)),
        )
        .await
    }

    /// Gets every match the team plays in, at home or away.
    pub async fn find_by_team(&self, team_id: i32) -> Result<Vec<Match>, DbErr> {
        self.fetch(
            entity::prelude::MatchGame::find().filter(
                Condition::any()
                    .add(entity::match_game::Column::HomeTeamId.eq(team_id))
                    .add(entity::match_game::Column::AwayTeamId.eq(team_id)),
            ),
        )
        .await
    }

    /// Inserts a new match (`id` is `None`) or overwrites every field of an existing one.
    ///
    /// # Returns
    /// - `Ok(Match)` - The stored match with resolved parent names
    /// - `Err(DbErr)` - Database error, including a foreign key violation
    pub async fn save(&self, id: Option<i32>, params: SaveMatchParams) -> Result<Match, DbErr> {
        let model = entity::match_game::ActiveModel {
            id: id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            match_time: ActiveValue::Set(params.match_time),
            location: ActiveValue::Set(params.location),
            home_team_id: ActiveValue::Set(params.home_team_id),
            away_team_id: ActiveValue::Set(params.away_team_id),
            home_score: ActiveValue::Set(params.home_score),
            away_score: ActiveValue::Set(params.away_score),
            tournament_id: ActiveValue::Set(params.tournament_id),
            season_id: ActiveValue::Set(params.season_id),
            status: ActiveValue::Set(params.status),
        };

        let entity = match id {
            Some(_) => model.update(self.db).await?,
            None => model.insert(self.db).await?,
        };

        let names = self.load_names(std::slice::from_ref(&entity)).await?;

        Ok(Match::from_entity(entity, &names))
    }

    /// Updates only the status column of a match.
    ///
    /// # Returns
    /// - `Ok(Match)` - The match with its new status
    /// - `Err(DbErr::RecordNotUpdated)` - No match with that ID
    pub async fn set_status(&self, id: i32, status: MatchStatus) -> Result<Match, DbErr> {
        let entity = entity::match_game::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(Some(status)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        let names = self.load_names(std::slice::from_ref(&entity)).await?;

        Ok(Match::from_entity(entity, &names))
    }

    /// Deletes a match. Its events are removed by the database cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::MatchGame::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn fetch(&self, query: Select<entity::prelude::MatchGame>) -> Result<Vec<Match>, DbErr> {
        let entities = query
            .order_by_asc(entity::match_game::Column::MatchTime)
            .order_by_asc(entity::match_game::Column::Id)
            .all(self.db)
            .await?;

        let names = self.load_names(&entities).await?;

        Ok(entities
            .into_iter()
            .map(|entity| Match::from_entity(entity, &names))
            .collect())
    }

    /// Loads names for home and away teams together, so one query covers both columns.
    async fn load_names(
        &self,
        entities: &[entity::match_game::Model],
    ) -> Result<ParentNames, DbErr> {
        let team_ids = distinct_ids(
            entities
                .iter()
                .flat_map(|e| [e.home_team_id, e.away_team_id]),
        );

        let teams = TeamRepository::new(self.db).names_by_ids(team_ids).await?;
        let tournaments = TournamentRepository::new(self.db)
            .names_by_ids(distinct_ids(entities.iter().map(|e| e.tournament_id)))
            .await?;
        let seasons = SeasonRepository::new(self.db)
            .names_by_ids(distinct_ids(entities.iter().map(|e| e.season_id)))
            .await?;

        Ok(ParentNames {
            tournaments,
            seasons,
            teams,
            ..Default::default()
        })
    }
}
