//! API routes module
//!
//! These routes are nested under `/api` by `axum_helpers::create_router`.

pub mod contact;
pub mod health;
pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Create all API routes. The readiness router is merged at the top level
/// next to /health, not here.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/projects", projects::router(state))
        .nest("/contact", contact::router())
}
