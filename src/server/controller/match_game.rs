use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, match_game::MatchDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::match_game::{Match, SaveMatchParams},
        service::match_game::MatchService,
        state::AppState,
    },
};

/// Tag for grouping match endpoints in OpenAPI documentation
pub static MATCH_TAG: &str = "match";

fn into_dtos(matches: Vec<Match>) -> Vec<MatchDto> {
    matches.into_iter().map(Match::into_dto).collect()
}

/// List every match ordered by kick-off time.
#[utoipa::path(
    get,
    path = "/api/matches",
    tag = MATCH_TAG,
    responses(
        (status = 200, description = "All matches", body = Vec<MatchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_matches(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let matches = MatchService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(matches))))
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(
        ("id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "The match", body = MatchDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let fixture = MatchService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(fixture.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/matches/season/{season_id}",
    tag = MATCH_TAG,
    params(
        ("season_id" = i32, Path, description = "Season ID")
    ),
    responses(
        (status = 200, description = "Matches of the season", body = Vec<MatchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_matches_by_season(
    State(state): State<AppState>,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let matches = MatchService::new(&state.db)
        .get_by_season(season_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(matches))))
}

#[utoipa::path(
    get,
    path = "/api/matches/tournament/{tournament_id}",
    tag = MATCH_TAG,
    params(
        ("tournament_id" = i32, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "Matches of the tournament", body = Vec<MatchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_matches_by_tournament(
    State(state): State<AppState>,
    Path(tournament_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let matches = MatchService::new(&state.db)
        .get_by_tournament(tournament_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(matches))))
}

/// List the matches a team plays in, home or away.
#[utoipa::path(
    get,
    path = "/api/matches/team/{team_id}",
    tag = MATCH_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Home and away matches of the team", body = Vec<MatchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_matches_by_team(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let matches = MatchService::new(&state.db).get_by_team(team_id).await?;

    Ok((StatusCode::OK, Json(into_dtos(matches))))
}

/// Schedule a match.
///
/// # Access Control
/// - `Record` - Admins and recorders
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Match fields; `matchTime` is required, omitted scores are stored as `0`
///
/// # Returns
/// - `200 OK` - The created match
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Missing role
/// - `404 Not Found` - A referenced team, tournament or season does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/matches",
    tag = MATCH_TAG,
    request_body = MatchDto,
    responses(
        (status = 200, description = "Created match", body = MatchDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a recorder or admin", body = ErrorDto),
        (status = 404, description = "Referenced row not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_match(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<MatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Record])
        .await?;

    let params = SaveMatchParams::from_dto(payload);
    let fixture = MatchService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(fixture.into_dto())))
}

/// Overwrite a match, including its score and status.
///
/// # Access Control
/// - `Record` - Admins and recorders
#[utoipa::path(
    put,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(
        ("id" = i32, Path, description = "Match ID")
    ),
    request_body = MatchDto,
    responses(
        (status = 200, description = "Updated match", body = MatchDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a recorder or admin", body = ErrorDto),
        (status = 404, description = "Match or referenced row not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_match(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<MatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Record])
        .await?;

    let params = SaveMatchParams::from_dto(payload);
    let fixture = MatchService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(fixture.into_dto())))
}

/// Mark a match as finished.
///
/// # Access Control
/// - `Record` - Admins and recorders
#[utoipa::path(
    put,
    path = "/api/matches/{id}/complete",
    tag = MATCH_TAG,
    params(
        ("id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Finished match", body = MatchDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a recorder or admin", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_match(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Record])
        .await?;

    let fixture = MatchService::new(&state.db).complete(id).await?;

    Ok((StatusCode::OK, Json(fixture.into_dto())))
}

/// Delete a match and its events.
///
/// # Access Control
/// - `Admin` - Only admins can delete
#[utoipa::path(
    delete,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(
        ("id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 204, description = "Match deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_match(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    MatchService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
