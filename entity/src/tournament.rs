use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::GenderRestriction;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tournament")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Format of play, e.g. 11-a-side or 8-a-side.
    pub tournament_type: Option<String>,
    /// Kind of participant, e.g. academy or club.
    pub participant_type: Option<String>,
    pub gender_restriction: Option<GenderRestriction>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::team::Entity")]
    Team,
    #[sea_orm(has_many = "super::match_game::Entity")]
    MatchGame,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::match_game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchGame.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
