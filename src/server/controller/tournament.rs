use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, tournament::TournamentDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::tournament::{SaveTournamentParams, Tournament},
        service::tournament::TournamentService,
        state::AppState,
    },
};

/// Tag for grouping tournament endpoints in OpenAPI documentation
pub static TOURNAMENT_TAG: &str = "tournament";

/// List every tournament.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - All tournaments
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tournaments",
    tag = TOURNAMENT_TAG,
    responses(
        (status = 200, description = "All tournaments", body = Vec<TournamentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tournaments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let tournaments = TournamentService::new(&state.db).get_all().await?;

    let tournaments_dto: Vec<_> = tournaments.into_iter().map(Tournament::into_dto).collect();

    Ok((StatusCode::OK, Json(tournaments_dto)))
}

/// Get a tournament by ID.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Tournament ID
///
/// # Returns
/// - `200 OK` - The tournament
/// - `404 Not Found` - No tournament with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tournaments/{id}",
    tag = TOURNAMENT_TAG,
    params(
        ("id" = i32, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "The tournament", body = TournamentDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tournament(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let tournament = TournamentService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(tournament.into_dto())))
}

/// Create a tournament.
///
/// # Access Control
/// - `Record` - Admins and recorders
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Tournament fields; `tournamentId` is ignored
///
/// # Returns
/// - `200 OK` - The created tournament
/// - `400 Bad Request` - Blank name
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Missing role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/tournaments",
    tag = TOURNAMENT_TAG,
    request_body = TournamentDto,
    responses(
        (status = 200, description = "Created tournament", body = TournamentDto),
        (status = 400, description = "Invalid tournament data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a recorder or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tournament(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<TournamentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Record])
        .await?;

    let params = SaveTournamentParams::from_dto(payload)?;
    let tournament = TournamentService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(tournament.into_dto())))
}

/// Overwrite a tournament.
///
/// # Access Control
/// - `Record` - Admins and recorders
///
/// # Returns
/// - `200 OK` - The updated tournament
/// - `400 Bad Request` - Blank name
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Missing role
/// - `404 Not Found` - No tournament with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/tournaments/{id}",
    tag = TOURNAMENT_TAG,
    params(
        ("id" = i32, Path, description = "Tournament ID")
    ),
    request_body = TournamentDto,
    responses(
        (status = 200, description = "Updated tournament", body = TournamentDto),
        (status = 400, description = "Invalid tournament data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a recorder or admin", body = ErrorDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tournament(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<TournamentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Record])
        .await?;

    let params = SaveTournamentParams::from_dto(payload)?;
    let tournament = TournamentService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(tournament.into_dto())))
}

/// Delete a tournament with its teams and matches.
///
/// # Access Control
/// - `Admin` - Only admins can delete
///
/// # Returns
/// - `204 No Content` - Tournament deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No tournament with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/tournaments/{id}",
    tag = TOURNAMENT_TAG,
    params(
        ("id" = i32, Path, description = "Tournament ID")
    ),
    responses(
        (status = 204, description = "Tournament deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tournament(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TournamentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
