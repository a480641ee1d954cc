//! Tournament factory for creating test tournament entities.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::GenderRestriction;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tournaments with customizable fields.
pub struct TournamentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    tournament_type: Option<String>,
    participant_type: Option<String>,
    gender_restriction: Option<GenderRestriction>,
}

impl<'a> TournamentFactory<'a> {
    /// Creates a new TournamentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Tournament {id}"`
    /// - tournament_type: `Some("11-a-side")`
    /// - participant_type: `Some("club")`
    /// - gender_restriction: `Some(Unrestricted)`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Tournament {}", id),
            tournament_type: Some("11-a-side".to_string()),
            participant_type: Some("club".to_string()),
            gender_restriction: Some(GenderRestriction::Unrestricted),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn tournament_type(mut self, tournament_type: Option<String>) -> Self {
        self.tournament_type = tournament_type;
        self
    }

    pub fn participant_type(mut self, participant_type: Option<String>) -> Self {
        self.participant_type = participant_type;
        self
    }

    pub fn gender_restriction(mut self, gender_restriction: Option<GenderRestriction>) -> Self {
        self.gender_restriction = gender_restriction;
        self
    }

    /// Builds and inserts the tournament entity into the database.
    pub async fn build(self) -> Result<entity::tournament::Model, DbErr> {
        entity::tournament::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            tournament_type: ActiveValue::Set(self.tournament_type),
            participant_type: ActiveValue::Set(self.participant_type),
            gender_restriction: ActiveValue::Set(self.gender_restriction),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tournament with default values.
pub async fn create_tournament(
    db: &DatabaseConnection,
) -> Result<entity::tournament::Model, DbErr> {
    TournamentFactory::new(db).build().await
}
