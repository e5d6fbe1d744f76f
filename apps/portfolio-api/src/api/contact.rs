//! Contact API routes

use axum::Router;
use domain_contact::handlers;

/// Create the contact router. Stateless, so no app state is wired in.
pub fn router() -> Router {
    handlers::router()
}
