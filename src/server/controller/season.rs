use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, season::SeasonDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::season::{SaveSeasonParams, Season},
        service::season::SeasonService,
        state::AppState,
    },
};

/// Tag for grouping season endpoints in OpenAPI documentation
pub static SEASON_TAG: &str = "season";

#[utoipa::path(
    get,
    path = "/api/seasons",
    tag = SEASON_TAG,
    responses(
        (status = 200, description = "All seasons", body = Vec<SeasonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_seasons(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let seasons = SeasonService::new(&state.db).get_all().await?;

    let seasons_dto: Vec<_> = seasons.into_iter().map(Season::into_dto).collect();

    Ok((StatusCode::OK, Json(seasons_dto)))
}

#[utoipa::path(
    get,
    path = "/api/seasons/{id}",
    tag = SEASON_TAG,
    params(
        ("id" = i32, Path, description = "Season ID")
    ),
    responses(
        (status = 200, description = "The season", body = SeasonDto),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_season(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let season = SeasonService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(season.into_dto())))
}

/// Create a season.
///
/// # Access Control
/// - `Record` - Admins and recorders
///
/// # Returns
/// - `200 OK` - The created season
/// - `400 Bad Request` - Blank name, or end time before start time
/// - `401 Unauthorized` / `403 Forbidden` - Not logged in or missing role
#[utoipa::path(
    post,
    path = "/api/seasons",
    tag = SEASON_TAG,
    request_body = SeasonDto,
    responses(
        (status = 200, description = "Created season", body = SeasonDto),
        (status = 400, description = "Invalid season data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a recorder or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_season(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SeasonDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Record])
        .await?;

    let params = SaveSeasonParams::from_dto(payload)?;
    let season = SeasonService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(season.into_dto())))
}

/// Overwrite a season.
///
/// # Access Control
/// - `Record` - Admins and recorders
#[utoipa::path(
    put,
    path = "/api/seasons/{id}",
    tag = SEASON_TAG,
    params(
        ("id" = i32, Path, description = "Season ID")
    ),
    request_body = SeasonDto,
    responses(
        (status = 200, description = "Updated season", body = SeasonDto),
        (status = 400, description = "Invalid season data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a recorder or admin", body = ErrorDto),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_season(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SeasonDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Record])
        .await?;

    let params = SaveSeasonParams::from_dto(payload)?;
    let season = SeasonService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(season.into_dto())))
}

/// Delete a season with every team, player, match and event recorded in it.
///
/// # Access Control
/// - `Admin` - Only admins can delete
#[utoipa::path(
    delete,
    path = "/api/seasons/{id}",
    tag = SEASON_TAG,
    params(
        ("id" = i32, Path, description = "Season ID")
    ),
    responses(
        (status = 204, description = "Season deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_season(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    SeasonService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
