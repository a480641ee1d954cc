use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000002_create_season_table::Season, m20250301_000003_create_team_table::Team,
    m20250301_000004_create_player_table::Player,
    m20250301_000005_create_match_game_table::MatchGame,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(integer(Event::MatchId))
                    .col(string(Event::EventType))
                    .col(integer_null(Event::TeamId))
                    .col(integer_null(Event::PlayerId))
                    .col(integer_null(Event::SeasonId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_match_id")
                            .from(Event::Table, Event::MatchId)
                            .to(MatchGame::Table, MatchGame::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_team_id")
                            .from(Event::Table, Event::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_player_id")
                            .from(Event::Table, Event::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_season_id")
                            .from(Event::Table, Event::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    MatchId,
    EventType,
    TeamId,
    PlayerId,
    SeasonId,
}
