use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, event::EventDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::event::{Event, SaveEventParams},
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping match event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

fn into_dtos(events: Vec<Event>) -> Vec<EventDto> {
    events.into_iter().map(Event::into_dto).collect()
}

#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "All events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(events))))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "The event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// List the events of a match in the order they were recorded.
#[utoipa::path(
    get,
    path = "/api/events/match/{match_id}",
    tag = EVENT_TAG,
    params(
        ("match_id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Events of the match", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events_by_match(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).get_by_match(match_id).await?;

    Ok((StatusCode::OK, Json(into_dtos(events))))
}

#[utoipa::path(
    get,
    path = "/api/events/season/{season_id}",
    tag = EVENT_TAG,
    params(
        ("season_id" = i32, Path, description = "Season ID")
    ),
    responses(
        (status = 200, description = "Events of the season", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events_by_season(
    State(state): State<AppState>,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db)
        .get_by_season(season_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(events))))
}

#[utoipa::path(
    get,
    path = "/api/events/player/{player_id}",
    tag = EVENT_TAG,
    params(
        ("player_id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Events of the player", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events_by_player(
    State(state): State<AppState>,
    Path(player_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db)
        .get_by_player(player_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(events))))
}

/// Record an event for a match.
///
/// # Access Control
/// - `Record` - Admins and recorders
///
/// # Returns
/// - `200 OK` - The recorded event
/// - `400 Bad Request` - `matchId` missing or blank `eventType`
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Missing role
/// - `404 Not Found` - Match, team, player or season does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = EventDto,
    responses(
        (status = 200, description = "Recorded event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a recorder or admin", body = ErrorDto),
        (status = 404, description = "Referenced row not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<EventDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Record])
        .await?;

    let params = SaveEventParams::from_dto(payload)?;
    let event = EventService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Overwrite an event. A missing `matchId` keeps the event on its current match.
///
/// # Access Control
/// - `Record` - Admins and recorders
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = EventDto,
    responses(
        (status = 200, description = "Updated event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a recorder or admin", body = ErrorDto),
        (status = 404, description = "Event or referenced row not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<EventDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Record])
        .await?;

    let params = SaveEventParams::from_dto(payload)?;
    let event = EventService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// # Access Control
/// - `Admin` - Only admins can delete
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    EventService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
