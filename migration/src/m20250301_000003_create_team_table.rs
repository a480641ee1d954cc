use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_tournament_table::Tournament,
    m20250301_000002_create_season_table::Season,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(string(Team::Name))
                    .col(integer_null(Team::TournamentId))
                    .col(integer_null(Team::SeasonId))
                    .col(integer(Team::SeasonGoals).default(0))
                    .col(integer(Team::SeasonCards).default(0))
                    .col(integer(Team::SeasonPoints).default(0))
                    .col(integer_null(Team::SeasonRank))
                    .col(integer(Team::HistoricalGoals).default(0))
                    .col(integer(Team::HistoricalCards).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_tournament_id")
                            .from(Team::Table, Team::TournamentId)
                            .to(Tournament::Table, Tournament::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_season_id")
                            .from(Team::Table, Team::SeasonId)
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
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    Name,
    TournamentId,
    SeasonId,
    SeasonGoals,
    SeasonCards,
    SeasonPoints,
    SeasonRank,
    HistoricalGoals,
    HistoricalCards,
}
