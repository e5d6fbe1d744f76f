//! MongoDB connector and connection-lifecycle utilities.
//!
//! Provides configuration, one-shot connection helpers, the lazily
//! initialized process-wide [`LazyMongo`] handle, and health checks.

mod config;
mod connector;
mod health;
mod lazy;

pub use config::MongoConfig;
pub use connector::{MongoError, connect, connect_from_config};
pub use health::{HealthStatus, check_health, check_health_detailed};
pub use lazy::{ConnectionState, LazyMongo};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
