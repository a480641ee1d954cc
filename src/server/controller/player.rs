use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, player::PlayerDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::player::{Player, SavePlayerParams},
        service::player::PlayerService,
        state::AppState,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

fn into_dtos(players: Vec<Player>) -> Vec<PlayerDto> {
    players.into_iter().map(Player::into_dto).collect()
}

#[utoipa::path(
    get,
    path = "/api/players",
    tag = PLAYER_TAG,
    responses(
        (status = 200, description = "All players", body = Vec<PlayerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let players = PlayerService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(players))))
}

/// Get a player by ID with team and season names inlined.
///
/// # Returns
/// - `200 OK` - The player
/// - `404 Not Found` - No player with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "The player", body = PlayerDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let player = PlayerService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/players/team/{team_id}",
    tag = PLAYER_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Players of the team", body = Vec<PlayerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players_by_team(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let players = PlayerService::new(&state.db).get_by_team(team_id).await?;

    Ok((StatusCode::OK, Json(into_dtos(players))))
}

#[utoipa::path(
    get,
    path = "/api/players/season/{season_id}",
    tag = PLAYER_TAG,
    params(
        ("season_id" = i32, Path, description = "Season ID")
    ),
    responses(
        (status = 200, description = "Players of the season", body = Vec<PlayerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players_by_season(
    State(state): State<AppState>,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let players = PlayerService::new(&state.db)
        .get_by_season(season_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(players))))
}

#[utoipa::path(
    get,
    path = "/api/players/team/{team_id}/season/{season_id}",
    tag = PLAYER_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID"),
        ("season_id" = i32, Path, description = "Season ID")
    ),
    responses(
        (status = 200, description = "Players in both the team and the season", body = Vec<PlayerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players_by_team_and_season(
    State(state): State<AppState>,
    Path((team_id, season_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let players = PlayerService::new(&state.db)
        .get_by_team_and_season(team_id, season_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(players))))
}

/// Create a player.
///
/// # Access Control
/// - `Record` - Admins and recorders
///
/// # Returns
/// - `200 OK` - The created player
/// - `400 Bad Request` - Blank name
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Missing role
/// - `404 Not Found` - `teamId` or `seasonId` does not exist; nothing is stored
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/players",
    tag = PLAYER_TAG,
    request_body = PlayerDto,
    responses(
        (status = 200, description = "Created player", body = PlayerDto),
        (status = 400, description = "Invalid player data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a recorder or admin", body = ErrorDto),
        (status = 404, description = "Referenced team or season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_player(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Record])
        .await?;

    let params = SavePlayerParams::from_dto(payload)?;
    let player = PlayerService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// Overwrite a player.
///
/// # Access Control
/// - `Record` - Admins and recorders
#[utoipa::path(
    put,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i32, Path, description = "Player ID")
    ),
    request_body = PlayerDto,
    responses(
        (status = 200, description = "Updated player", body = PlayerDto),
        (status = 400, description = "Invalid player data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a recorder or admin", body = ErrorDto),
        (status = 404, description = "Player or referenced row not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<PlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Record])
        .await?;

    let params = SavePlayerParams::from_dto(payload)?;
    let player = PlayerService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// Delete a player. Their events are kept with the player cleared.
///
/// # Access Control
/// - `Admin` - Only admins can delete
#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 204, description = "Player deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_player(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    PlayerService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
