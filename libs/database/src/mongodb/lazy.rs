//! Process-wide lazily-initialized MongoDB client.

use std::sync::atomic::{AtomicBool, Ordering};

use mongodb::{Client, Database};
use tokio::sync::OnceCell;
use tracing::instrument;

use super::{MongoConfig, MongoError, connect_from_config};

/// Readiness of the shared connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Client established and reusable
    Connected,
    /// A connection attempt is in flight
    Connecting,
    /// No client yet; the next use will attempt to connect
    Disconnected,
}

/// Lazily-initialized shared MongoDB client.
///
/// The first caller of [`client`](Self::client) triggers a single connection
/// attempt; concurrent callers await that same in-flight attempt instead of
/// opening duplicate connections. Once established, the client is reused for
/// the life of the process. A failed attempt leaves the handle disconnected,
/// so a later request triggers a fresh attempt — there is no automatic retry
/// loop.
///
/// # Example
/// ```ignore
/// use database::mongodb::{LazyMongo, MongoConfig};
///
/// let mongo = LazyMongo::new(MongoConfig::with_database(
///     "mongodb://localhost:27017",
///     "portfolio",
/// ));
/// let db = mongo.database().await?;
/// ```
pub struct LazyMongo {
    config: MongoConfig,
    client: OnceCell<Client>,
    connecting: AtomicBool,
}

impl LazyMongo {
    pub fn new(config: MongoConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
            connecting: AtomicBool::new(false),
        }
    }

    /// Current readiness state. Read-only; used by the /ready probe.
    pub fn state(&self) -> ConnectionState {
        if self.client.initialized() {
            ConnectionState::Connected
        } else if self.connecting.load(Ordering::Acquire) {
            ConnectionState::Connecting
        } else {
            ConnectionState::Disconnected
        }
    }

    /// The configuration this handle connects with.
    pub fn config(&self) -> &MongoConfig {
        &self.config
    }

    /// The client if one is already established. Never triggers a connect,
    /// so probes can inspect the connection without opening one.
    pub fn current(&self) -> Option<&Client> {
        self.client.get()
    }

    /// Get the shared client, connecting on first use.
    #[instrument(skip(self))]
    pub async fn client(&self) -> Result<&Client, MongoError> {
        self.client
            .get_or_try_init(|| async {
                self.connecting.store(true, Ordering::Release);
                let result = connect_from_config(&self.config).await;
                self.connecting.store(false, Ordering::Release);
                result
            })
            .await
    }

    /// Get the configured database, connecting on first use.
    pub async fn database(&self) -> Result<Database, MongoError> {
        Ok(self.client().await?.database(&self.config.database))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_disconnected() {
        let mongo = LazyMongo::new(MongoConfig::default());
        assert_eq!(mongo.state(), ConnectionState::Disconnected);
    }

    #[tokio::test]
    async fn failed_attempt_returns_to_disconnected() {
        // Unroutable host with a tiny timeout keeps the test fast.
        let mut config = MongoConfig::with_database("mongodb://127.0.0.1:1", "test");
        config.connect_timeout_secs = 1;
        config.server_selection_timeout_secs = 1;

        let mongo = LazyMongo::new(config);
        let result = mongo.client().await;

        assert!(result.is_err());
        assert_eq!(mongo.state(), ConnectionState::Disconnected);
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn connects_once_and_reuses() {
        let url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let mongo = LazyMongo::new(MongoConfig::with_database(url, "test"));

        mongo.client().await.unwrap();
        assert_eq!(mongo.state(), ConnectionState::Connected);

        // Second call reuses the same client
        mongo.client().await.unwrap();
        assert_eq!(mongo.state(), ConnectionState::Connected);
    }
}
