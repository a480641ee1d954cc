use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_tournament_table::Tournament,
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
                    .table(MatchGame::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchGame::Id))
                    .col(timestamp(MatchGame::MatchTime))
                    .col(string_null(MatchGame::Location))
                    .col(integer_null(MatchGame::HomeTeamId))
                    .col(integer_null(MatchGame::AwayTeamId))
                    .col(integer(MatchGame::HomeScore).default(0))
                    .col(integer(MatchGame::AwayScore).default(0))
                    .col(integer_null(MatchGame::TournamentId))
                    .col(integer_null(MatchGame::SeasonId))
                    .col(string_len_null(MatchGame::Status, 1))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_game_home_team_id")
                            .from(MatchGame::Table, MatchGame::HomeTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_game_away_team_id")
                            .from(MatchGame::Table, MatchGame::AwayTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_game_tournament_id")
                            .from(MatchGame::Table, MatchGame::TournamentId)
                            .to(Tournament::Table, Tournament::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_game_season_id")
                            .from(MatchGame::Table, MatchGame::SeasonId)
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
            .drop_table(Table::drop().table(MatchGame::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MatchGame {
    Table,
    Id,
    MatchTime,
    Location,
    HomeTeamId,
    AwayTeamId,
    HomeScore,
    AwayScore,
    TournamentId,
    SeasonId,
    Status,
}
