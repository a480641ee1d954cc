pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_tournament_table;
mod m20250301_000002_create_season_table;
mod m20250301_000003_create_team_table;
mod m20250301_000004_create_player_table;
mod m20250301_000005_create_match_game_table;
mod m20250301_000006_create_event_table;
mod m20250308_000007_create_user_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_tournament_table::Migration),
            Box::new(m20250301_000002_create_season_table::Migration),
            Box::new(m20250301_000003_create_team_table::Migration),
            Box::new(m20250301_000004_create_player_table::Migration),
            Box::new(m20250301_000005_create_match_game_table::Migration),
            Box::new(m20250301_000006_create_event_table::Migration),
            Box::new(m20250308_000007_create_user_table::Migration),
        ]
    }
}
