use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, team::TeamDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::team::{SaveTeamParams, Team},
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

fn into_dtos(teams: Vec<Team>) -> Vec<TeamDto> {
    teams.into_iter().map(Team::into_dto).collect()
}

#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "All teams", body = Vec<TeamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(teams))))
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "The team", body = TeamDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// List the teams of a tournament. An unknown tournament yields an empty list.
#[utoipa::path(
    get,
    path = "/api/teams/tournament/{tournament_id}",
    tag = TEAM_TAG,
    params(
        ("tournament_id" = i32, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "Teams of the tournament", body = Vec<TeamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams_by_tournament(
    State(state): State<AppState>,
    Path(tournament_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::new(&state.db)
        .get_by_tournament(tournament_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(teams))))
}

#[utoipa::path(
    get,
    path = "/api/teams/season/{season_id}",
    tag = TEAM_TAG,
    params(
        ("season_id" = i32, Path, description = "Season ID")
    ),
    responses(
        (status = 200, description = "Teams of the season", body = Vec<TeamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams_by_season(
    State(state): State<AppState>,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::new(&state.db).get_by_season(season_id).await?;

    Ok((StatusCode::OK, Json(into_dtos(teams))))
}

#[utoipa::path(
    get,
    path = "/api/teams/tournament/{tournament_id}/season/{season_id}",
    tag = TEAM_TAG,
    params(
        ("tournament_id" = i32, Path, description = "Tournament ID"),
        ("season_id" = i32, Path, description = "Season ID")
    ),
    responses(
        (status = 200, description = "Teams in both the tournament and the season", body = Vec<TeamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams_by_tournament_and_season(
    State(state): State<AppState>,
    Path((tournament_id, season_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::new(&state.db)
        .get_by_tournament_and_season(tournament_id, season_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(teams))))
}

/// Create a team.
///
/// # Access Control
/// - `Record` - Admins and recorders
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Team fields; omitted counters are stored as `0`
///
/// # Returns
/// - `200 OK` - The created team with tournament and season names
/// - `400 Bad Request` - Blank name
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Missing role
/// - `404 Not Found` - `tournamentId` or `seasonId` does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = TeamDto,
    responses(
        (status = 200, description = "Created team", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a recorder or admin", body = ErrorDto),
        (status = 404, description = "Referenced tournament or season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<TeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Record])
        .await?;

    let params = SaveTeamParams::from_dto(payload)?;
    let team = TeamService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Overwrite a team.
///
/// A `tournamentId` or `seasonId` left out of the body keeps the current one.
///
/// # Access Control
/// - `Record` - Admins and recorders
#[utoipa::path(
    put,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    request_body = TeamDto,
    responses(
        (status = 200, description = "Updated team", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a recorder or admin", body = ErrorDto),
        (status = 404, description = "Team or referenced row not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<TeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Record])
        .await?;

    let params = SaveTeamParams::from_dto(payload)?;
    let team = TeamService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Delete a team and its players.
///
/// # Access Control
/// - `Admin` - Only admins can delete
#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TeamService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
