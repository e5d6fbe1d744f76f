//! Projects API routes
//!
//! Wires the projects domain to HTTP routes.

use axum::Router;
use domain_projects::{MongoProjectRepository, ProjectService, handlers};

use crate::state::AppState;

/// Create the projects router backed by the shared MongoDB handle
pub fn router(state: &AppState) -> Router {
    let repository = MongoProjectRepository::new(state.mongo.clone());
    let service = ProjectService::new(repository);

    handlers::router(service)
}
