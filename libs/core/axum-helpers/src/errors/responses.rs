//! Reusable OpenAPI response types for consistent API documentation.

use super::{ErrorBody, FieldErrorBody};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "ok": false,
        "error": "server selection timeout"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorBody);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - validation failed",
    content_type = "application/json",
    example = json!({
        "ok": false,
        "error": "title: Title is required"
    })
)]
pub struct BadRequestResponse(pub ErrorBody);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - field validation errors",
    content_type = "application/json",
    example = json!({
        "ok": false,
        "errors": {
            "email": "Enter a valid email"
        }
    })
)]
pub struct FieldValidationResponse(pub FieldErrorBody);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - request body could not be parsed",
    content_type = "application/json",
    example = json!({
        "ok": false,
        "error": "Invalid request body"
    })
)]
pub struct MalformedBodyResponse(pub ErrorBody);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "ok": false,
        "error": "Not found"
    })
)]
pub struct NotFoundResponse(pub ErrorBody);
