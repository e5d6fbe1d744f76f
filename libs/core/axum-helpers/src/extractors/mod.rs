//! Custom extractors for Axum handlers.
//!
//! These standardize how request input is parsed and validated so that
//! every handler produces the same error envelope for bad input.

pub mod uuid_path;
pub mod validated_json;

pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
