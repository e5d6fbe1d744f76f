//! Projects Domain
//!
//! Portfolio project records backed by MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, pagination, orchestration
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use database::mongodb::{LazyMongo, MongoConfig};
//! use domain_projects::{handlers, MongoProjectRepository, ProjectService};
//!
//! let mongo = Arc::new(LazyMongo::new(MongoConfig::with_database(
//!     "mongodb://localhost:27017",
//!     "portfolio",
//! )));
//! let repository = MongoProjectRepository::new(mongo);
//! let service = ProjectService::new(repository);
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProjectError, ProjectResult};
pub use handlers::ApiDoc;
pub use models::{PageQuery, Project, ProjectInput, ProjectPage};
pub use mongodb::MongoProjectRepository;
pub use repository::ProjectRepository;
pub use service::ProjectService;
