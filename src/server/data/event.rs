//! Match event data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Select,
};

use crate::server::{
    data::{
        distinct_ids, player::PlayerRepository, season::SeasonRepository, team::TeamRepository,
    },
    model::{
        event::{Event, SaveEventParams},
        parent::ParentNames,
    },
};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<Event>, DbErr> {
        self.fetch(entity::prelude::Event::find()).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let Some(entity) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let names = self.load_names(std::slice::from_ref(&entity)).await?;

        Ok(Some(Event::from_entity(entity, &names)))
    }

    /// Gets the events of a match in the order they were recorded.
    pub async fn find_by_match(&self, match_id: i32) -> Result<Vec<Event>, DbErr> {
        self.fetch(entity::prelude::Event::find().filter(entity::event::Column::MatchId.eq(match_id)))
            .await
    }

    pub async fn find_by_season(&self, season_id: i32) -> Result<Vec<Event>, DbErr> {
        self.fetch(
            entity::prelude::Event::find().filter(entity::event::Column::SeasonId.eq(season_id)),
        )
        .await
    }

    pub async fn find_by_player(&self, player_id: i32) -> Result<Vec<Event>, DbErr> {
        self.fetch(
            entity::prelude::Event::find().filter(entity::event::Column::PlayerId.eq(player_id)),
        )
        .await
    }

    /// Inserts a new event (`id` is `None`) or overwrites every field of an existing one.
    ///
    /// # Arguments
    /// - `id` - Row to overwrite, or `None` to insert
    /// - `match_id` - Owning match, already checked by the caller
    /// - `params` - Remaining field values
    pub async fn save(
        &self,
        id: Option<i32>,
        match_id: i32,
        params: SaveEventParams,
    ) -> Result<Event, DbErr> {
        let model = entity::event::ActiveModel {
            id: id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            match_id: ActiveValue::Set(match_id),
            event_type: ActiveValue::Set(params.event_type),
            team_id: ActiveValue::Set(params.team_id),
            player_id: ActiveValue::Set(params.player_id),
            season_id: ActiveValue::Set(params.season_id),
        };

        let entity = match id {
            Some(_) => model.update(self.db).await?,
            None => model.insert(self.db).await?,
        };

        let names = self.load_names(std::slice::from_ref(&entity)).await?;

        Ok(Event::from_entity(entity, &names))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Event::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn fetch(&self, query: Select<entity::prelude::Event>) -> Result<Vec<Event>, DbErr> {
        let entities = query
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        let names = self.load_names(&entities).await?;

        Ok(entities
            .into_iter()
            .map(|entity| Event::from_entity(entity, &names))
            .collect())
    }

    async fn load_names(&self, entities: &[entity::event::Model]) -> Result<ParentNames, DbErr> {
        let teams = TeamRepository::new(self.db)
            .names_by_ids(distinct_ids(entities.iter().map(|e| e.team_id)))
            .await?;
        let players = PlayerRepository::new(self.db)
            .names_by_ids(distinct_ids(entities.iter().map(|e| e.player_id)))
            .await?;
        let seasons = SeasonRepository::new(self.db)
            .names_by_ids(distinct_ids(entities.iter().map(|e| e.season_id)))
            .await?;

        Ok(ParentNames {
            seasons,
            teams,
            players,
            ..Default::default()
        })
    }
}
