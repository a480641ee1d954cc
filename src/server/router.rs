use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        event::EventDto,
        health::HealthDto,
        match_game::{MatchDto, MatchStatusDto},
        player::{GenderDto, PlayerDto},
        season::SeasonDto,
        team::TeamDto,
        tournament::{GenderRestrictionDto, TournamentDto},
        user::{LoginDto, RegisterDto, RoleDto, UserDto},
    },
    server::{
        controller::{auth, event, health, match_game, player, season, team, tournament},
        state::AppState,
    },
};

/// OpenAPI documentation served at `/api/openapi.json`
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leagueboard API",
        description = "Football league records: tournaments, seasons, teams, players, matches and events"
    ),
    paths(
        auth::login,
        auth::register,
        auth::logout,
        auth::get_user,
        health::health,
        tournament::get_tournaments,
        tournament::get_tournament,
        tournament::create_tournament,
        tournament::update_tournament,
        tournament::delete_tournament,
        season::get_seasons,
        season::get_season,
        season::create_season,
        season::update_season,
        season::delete_season,
        team::get_teams,
        team::get_team,
        team::get_teams_by_tournament,
        team::get_teams_by_season,
        team::get_teams_by_tournament_and_season,
        team::create_team,
        team::update_team,
        team::delete_team,
        player::get_players,
        player::get_player,
        player::get_players_by_team,
        player::get_players_by_season,
        player::get_players_by_team_and_season,
        player::create_player,
        player::update_player,
        player::delete_player,
        match_game::get_matches,
        match_game::get_match,
        match_game::get_matches_by_season,
        match_game::get_matches_by_tournament,
        match_game::get_matches_by_team,
        match_game::create_match,
        match_game::update_match,
        match_game::complete_match,
        match_game::delete_match,
        event::get_events,
        event::get_event,
        event::get_events_by_match,
        event::get_events_by_season,
        event::get_events_by_player,
        event::create_event,
        event::update_event,
        event::delete_event,
    ),
    components(
        schemas(
            ErrorDto,
            HealthDto,
            LoginDto,
            RegisterDto,
            UserDto,
            RoleDto,
            TournamentDto,
            GenderRestrictionDto,
            SeasonDto,
            TeamDto,
            PlayerDto,
            GenderDto,
            MatchDto,
            MatchStatusDto,
            EventDto,
        )
    ),
    tags(
        (name = "auth", description = "Login, logout, registration and the session user"),
        (name = "health", description = "Service health"),
        (name = "tournament", description = "Tournaments"),
        (name = "season", description = "Seasons"),
        (name = "team", description = "Teams, filterable by tournament and season"),
        (name = "player", description = "Players, filterable by team and season"),
        (name = "match", description = "Matches, filterable by season, tournament and team"),
        (name = "event", description = "Match events, filterable by match, season and player")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/health", get(health::health))
        .route(
            "/api/tournaments",
            get(tournament::get_tournaments).post(tournament::create_tournament),
        )
        .route(
            "/api/tournaments/{id}",
            get(tournament::get_tournament)
                .put(tournament::update_tournament)
                .delete(tournament::delete_tournament),
        )
        .route(
            "/api/seasons",
            get(season::get_seasons).post(season::create_season),
        )
        .route(
            "/api/seasons/{id}",
            get(season::get_season)
                .put(season::update_season)
                .delete(season::delete_season),
        )
        .route("/api/teams", get(team::get_teams).post(team::create_team))
        .route(
            "/api/teams/{id}",
            get(team::get_team)
                .put(team::update_team)
                .delete(team::delete_team),
        )
        .route(
            "/api/teams/tournament/{tournament_id}",
            get(team::get_teams_by_tournament),
        )
        .route(
            "/api/teams/season/{season_id}",
            get(team::get_teams_by_season),
        )
        .route(
            "/api/teams/tournament/{tournament_id}/season/{season_id}",
            get(team::get_teams_by_tournament_and_season),
        )
        .route(
            "/api/players",
            get(player::get_players).post(player::create_player),
        )
        .route(
            "/api/players/{id}",
            get(player::get_player)
                .put(player::update_player)
                .delete(player::delete_player),
        )
        .route("/api/players/team/{team_id}", get(player::get_players_by_team))
        .route(
            "/api/players/season/{season_id}",
            get(player::get_players_by_season),
        )
        .route(
            "/api/players/team/{team_id}/season/{season_id}",
            get(player::get_players_by_team_and_season),
        )
        .route(
            "/api/matches",
            get(match_game::get_matches).post(match_game::create_match),
        )
        .route(
            "/api/matches/{id}",
            get(match_game::get_match)
                .put(match_game::update_match)
                .delete(match_game::delete_match),
        )
        .route("/api/matches/{id}/complete", put(match_game::complete_match))
        .route(
            "/api/matches/season/{season_id}",
            get(match_game::get_matches_by_season),
        )
        .route(
            "/api/matches/tournament/{tournament_id}",
            get(match_game::get_matches_by_tournament),
        )
        .route(
            "/api/matches/team/{team_id}",
            get(match_game::get_matches_by_team),
        )
        .route("/api/events", get(event::get_events).post(event::create_event))
        .route(
            "/api/events/{id}",
            get(event::get_event)
                .put(event::update_event)
                .delete(event::delete_event),
        )
        .route("/api/events/match/{match_id}", get(event::get_events_by_match))
        .route(
            "/api/events/season/{season_id}",
            get(event::get_events_by_season),
        )
        .route(
            "/api/events/player/{player_id}",
            get(event::get_events_by_player),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
}
