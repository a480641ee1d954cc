//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// A tournament and season with one team in each, plus one player in that team.
pub struct LeagueFixture {
    pub tournament: entity::tournament::Model,
    pub season: entity::season::Model,
    pub team: entity::team::Model,
    pub player: entity::player::Model,
}

/// Creates a tournament, a season, a team in both and a player in that team and season.
///
/// # Returns
/// - `Ok(LeagueFixture)` - All created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_league(db: &DatabaseConnection) -> Result<LeagueFixture, DbErr> {
    let tournament = crate::factory::tournament::create_tournament(db).await?;
    let season = crate::factory::season::create_season(db).await?;
    let team = crate::factory::team::TeamFactory::new(db)
        .tournament_id(tournament.id)
        .season_id(season.id)
        .build()
        .await?;
    let player = crate::factory::player::PlayerFactory::new(db)
        .team_id(team.id)
        .season_id(season.id)
        .build()
        .await?;

    Ok(LeagueFixture {
        tournament,
        season,
        team,
        player,
    })
}

/// Creates a match between two fresh teams of the same tournament and season.
///
/// # Returns
/// - `Ok((home, away, match))` - Both teams and the pending match
/// - `Err(DbErr)` - Database error during creation
pub async fn create_match_with_teams(
    db: &DatabaseConnection,
    tournament_id: i32,
    season_id: i32,
) -> Result<
    (
        entity::team::Model,
        entity::team::Model,
        entity::match_game::Model,
    ),
    DbErr,
> {
    let home = crate::factory::team::TeamFactory::new(db)
        .tournament_id(tournament_id)
        .season_id(season_id)
        .build()
        .await?;
    let away = crate::factory::team::TeamFactory::new(db)
        .tournament_id(tournament_id)
        .season_id(season_id)
        .build()
        .await?;
    let fixture = crate::factory::match_game::MatchFactory::new(db)
        .home_team_id(home.id)
        .away_team_id(away.id)
        .tournament_id(tournament_id)
        .season_id(season_id)
        .build()
        .await?;

    Ok((home, away, fixture))
}
