//! HTTP tests driving the full router, session layer included.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{router, startup, state::AppState, util::password::hash_password};


const PASSWORD: &str = "kick-off";

/// Router with state and session layer over the test database.
async fn build_app(db: &DatabaseConnection) -> Router {
    let session = startup::connect_to_session(db).await.unwrap();

    router::router()
        .with_state(AppState::new(db.clone()))
        .layer(session)
}

/// Response parts the tests look at.
struct TestResponse {
    status: StatusCode,
    body: Value,
    cookie: Option<String>,
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut request = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }

    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_string);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        body,
        cookie,
    }
}

/// Creates a user with `PASSWORD` and logs them in, returning the session cookie.
async fn login_as(app: &Router, db: &DatabaseConnection, username: &str, role: UserRole) -> String {
    factory::user::UserFactory::new(db)
        .username(username)
        .password_hash(hash_password(PASSWORD).unwrap())
        .role(role)
        .build()
        .await
        .unwrap();

    let response = send(
        app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "username": username, "password": PASSWORD })),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);

    response.cookie.unwrap()
}
