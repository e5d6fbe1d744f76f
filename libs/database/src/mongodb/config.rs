#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv};

/// MongoDB database configuration.
///
/// Construct manually or load from environment variables (with the
/// `config` feature).
///
/// # Example
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "portfolio");
///
/// // From environment variables (requires `config` feature)
/// let config = MongoConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// MongoDB connection URL (required)
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub url: String,

    /// Database name to use
    pub database: String,

    /// Optional application name for server logs
    pub app_name: Option<String>,

    /// Maximum number of connections in the pool
    pub max_pool_size: u32,

    /// Minimum number of connections in the pool
    pub min_pool_size: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Server selection timeout in seconds
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    /// Create a new MongoConfig with just a URL and default database.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: "default".to_string(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }

    /// Create a MongoConfig with a specific database name.
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            ..Self::new(url)
        }
    }

    /// Set the application name for server logs.
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Get a reference to the MongoDB URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the database name.
    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self::new("mongodb://localhost:27017")
    }
}

/// Load MongoConfig from environment variables.
///
/// Environment variables:
/// - `MONGODB_URL` or `MONGO_URL` (required) - connection string; absence is
///   a fatal configuration error at startup
/// - `MONGODB_DATABASE` or `MONGO_DATABASE` (required) - database name
/// - `MONGODB_APP_NAME` (optional) - application name for server logs
/// - `MONGODB_MAX_POOL_SIZE` (optional, default: 100)
/// - `MONGODB_MIN_POOL_SIZE` (optional, default: 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (optional, default: 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (optional, default: 30)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var("MONGODB_URL")
            .or_else(|_| std::env::var("MONGO_URL"))
            .map_err(|_| ConfigError::MissingEnvVar("MONGODB_URL or MONGO_URL".to_string()))?;

        let database = std::env::var("MONGODB_DATABASE")
            .or_else(|_| std::env::var("MONGO_DATABASE"))
            .map_err(|_| {
                ConfigError::MissingEnvVar("MONGODB_DATABASE or MONGO_DATABASE".to_string())
            })?;

        let app_name = std::env::var("MONGODB_APP_NAME").ok();

        let max_pool_size = parse_env_u32("MONGODB_MAX_POOL_SIZE", 100)?;
        let min_pool_size = parse_env_u32("MONGODB_MIN_POOL_SIZE", 5)?;
        let connect_timeout_secs = parse_env_u64("MONGODB_CONNECT_TIMEOUT_SECS", 10)?;
        let server_selection_timeout_secs =
            parse_env_u64("MONGODB_SERVER_SELECTION_TIMEOUT_SECS", 30)?;

        Ok(Self {
            url,
            database,
            app_name,
            max_pool_size,
            min_pool_size,
            connect_timeout_secs,
            server_selection_timeout_secs,
        })
    }
}

#[cfg(feature = "config")]
fn parse_env_u32(key: &str, default: u32) -> Result<u32, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value.parse().map_err(|e| ConfigError::ParseError {
            key: key.to_string(),
            details: format!("{}", e),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(feature = "config")]
fn parse_env_u64(key: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value.parse().map_err(|e| ConfigError::ParseError {
            key: key.to_string(),
            details: format!("{}", e),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = MongoConfig::new("mongodb://localhost:27017");
        assert_eq!(config.url(), "mongodb://localhost:27017");
        assert_eq!(config.database(), "default");
        assert_eq!(config.max_pool_size, 100);
        assert_eq!(config.min_pool_size, 5);
    }

    #[test]
    fn test_config_with_database() {
        let config = MongoConfig::with_database("mongodb://localhost:27017", "portfolio");
        assert_eq!(config.database(), "portfolio");
    }

    #[cfg(feature = "config")]
    mod from_env {
        use super::*;
        use core_config::FromEnv;

        #[test]
        fn test_from_env_requires_url() {
            temp_env::with_vars(
                [
                    ("MONGODB_URL", None::<&str>),
                    ("MONGO_URL", None::<&str>),
                    ("MONGODB_DATABASE", Some("portfolio")),
                ],
                || {
                    let result = MongoConfig::from_env();
                    assert!(result.is_err());
                    assert!(result.unwrap_err().to_string().contains("MONGODB_URL"));
                },
            );
        }

        #[test]
        fn test_from_env_requires_database() {
            temp_env::with_vars(
                [
                    ("MONGODB_URL", Some("mongodb://localhost:27017")),
                    ("MONGODB_DATABASE", None::<&str>),
                    ("MONGO_DATABASE", None::<&str>),
                ],
                || {
                    let result = MongoConfig::from_env();
                    assert!(result.is_err());
                    assert!(result.unwrap_err().to_string().contains("MONGODB_DATABASE"));
                },
            );
        }

        #[test]
        fn test_from_env_with_fallback_names() {
            temp_env::with_vars(
                [
                    ("MONGODB_URL", None::<&str>),
                    ("MONGO_URL", Some("mongodb://db:27017")),
                    ("MONGODB_DATABASE", None::<&str>),
                    ("MONGO_DATABASE", Some("portfolio")),
                ],
                || {
                    let config = MongoConfig::from_env().unwrap();
                    assert_eq!(config.url(), "mongodb://db:27017");
                    assert_eq!(config.database(), "portfolio");
                },
            );
        }

        #[test]
        fn test_from_env_invalid_pool_size() {
            temp_env::with_vars(
                [
                    ("MONGODB_URL", Some("mongodb://localhost:27017")),
                    ("MONGODB_DATABASE", Some("portfolio")),
                    ("MONGODB_MAX_POOL_SIZE", Some("lots")),
                ],
                || {
                    let result = MongoConfig::from_env();
                    assert!(result.is_err());
                },
            );
        }
    }
}
