//! Readiness endpoint

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use database::mongodb::{ConnectionState, check_health};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    mongodb: &'static str,
}

/// Create the readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check against the lazy MongoDB handle.
///
/// Only an already-established connection is pinged; a probe must never be
/// the request that triggers the first connect.
async fn readiness_check(State(state): State<AppState>) -> Response {
    let mongodb = match state.mongo.state() {
        ConnectionState::Connected => match state.mongo.current() {
            Some(client) if check_health(client).await => "connected",
            _ => "unreachable",
        },
        ConnectionState::Connecting => "connecting",
        ConnectionState::Disconnected => "disconnected",
    };

    let (status_code, status) = if mongodb == "connected" {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    (status_code, Json(ReadinessResponse { status, mongodb })).into_response()
}
