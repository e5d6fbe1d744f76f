//! Shared application state.

use std::sync::Arc;

use database::mongodb::LazyMongo;

/// State cloned into each route group.
///
/// Holds the lazily-connecting MongoDB handle rather than a live client;
/// the connection is established by the first request that needs it.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Process-wide MongoDB handle, shared across all repositories
    pub mongo: Arc<LazyMongo>,
}
