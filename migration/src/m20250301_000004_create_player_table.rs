use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000002_create_season_table::Season, m20250301_000003_create_team_table::Team,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string(Player::Name))
                    .col(string_len(Player::Gender, 1))
                    .col(integer_null(Player::TeamId))
                    .col(integer_null(Player::SeasonId))
                    .col(integer(Player::SeasonGoals).default(0))
                    .col(integer(Player::SeasonCards).default(0))
                    .col(integer(Player::HistoricalGoals).default(0))
                    .col(integer(Player::HistoricalCards).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_team_id")
                            .from(Player::Table, Player::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_season_id")
                            .from(Player::Table, Player::SeasonId)
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
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    Name,
    Gender,
    TeamId,
    SeasonId,
    SeasonGoals,
    SeasonCards,
    HistoricalGoals,
    HistoricalCards,
}
