pub mod handlers;
pub mod responses;

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Single-message error envelope.
///
/// Every non-field failure is returned in this shape:
///
/// ```json
/// { "ok": false, "error": "Not found" }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub ok: bool,
    /// Human-readable error message
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}

/// Bare acknowledgment envelope for operations with no payload to return
/// (delete, contact submit): `{ "ok": true }`.
#[derive(Serialize, ToSchema)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Field-keyed validation error envelope, one entry per invalid field:
///
/// ```json
/// { "ok": false, "errors": { "email": "Enter a valid email" } }
/// ```
#[derive(Serialize, ToSchema)]
pub struct FieldErrorBody {
    pub ok: bool,
    /// Map of field name to validation message
    pub errors: BTreeMap<String, String>,
}

impl FieldErrorBody {
    pub fn new(errors: BTreeMap<String, String>) -> Self {
        Self { ok: false, errors }
    }
}

/// Application error type that maps onto the response envelope.
///
/// The four spec-level failure categories all land here: field or
/// message-level validation (400), unparseable request bodies (400, distinct
/// message), missing records (404), and store failures (500).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Invalid request body")]
    MalformedBody,

    #[error("Validation failed")]
    FieldValidation(BTreeMap<String, String>),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, Json(ErrorBody::new(msg))).into_response()
            }
            AppError::MalformedBody => {
                tracing::info!("Malformed request body");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorBody::new("Invalid request body")),
                )
                    .into_response()
            }
            AppError::FieldValidation(errors) => {
                tracing::info!("Validation failed: {:?}", errors);
                (StatusCode::BAD_REQUEST, Json(FieldErrorBody::new(errors))).into_response()
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, Json(ErrorBody::new(msg))).into_response()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::new(msg))).into_response()
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!("Service unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, Json(ErrorBody::new(msg))).into_response()
            }
        }
    }
}

/// Flatten `validator` errors into one descriptive message.
///
/// Produces "field: message" pairs joined with "; ", in field order, so a
/// client gets a stable single-string summary in the `error` envelope.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let msg = errs
                .first()
                .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "invalid value".to_string());
            format!("{}: {}", field, msg)
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
