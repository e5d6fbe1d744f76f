//! Contact Domain
//!
//! Stateless contact-form intake: validate the submission, acknowledge it,
//! and leave delivery to the operator's log pipeline. Nothing is persisted.

pub mod handlers;
pub mod models;

pub use handlers::ApiDoc;
pub use models::{ContactMessage, validate_contact};
