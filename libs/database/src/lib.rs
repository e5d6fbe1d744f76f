//! Database connectors for the portfolio workspace.
//!
//! Currently MongoDB only, behind the `mongodb` feature. Configuration
//! loading from environment variables is behind the `config` feature.

#[cfg(feature = "mongodb")]
pub mod mongodb;
