use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::health::HealthDto,
    server::{service::health::HealthService, state::AppState},
};

pub static HEALTH_TAG: &str = "health";

/// Report the application version and whether the database answers.
///
/// Always responds `200 OK`; an unreachable database shows up as `db: "down"`.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service health", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let health = HealthService::new(&state.db).check().await;

    (StatusCode::OK, Json(health.into_dto()))
}
