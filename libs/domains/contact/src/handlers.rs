use axum::{Json, Router, extract::rejection::JsonRejection, routing::post};
use axum_helpers::{
    Ack, AppError,
    errors::responses::{FieldValidationResponse, MalformedBodyResponse},
};
use utoipa::OpenApi;

use crate::models::{ContactMessage, validate_contact};

/// OpenAPI documentation for the Contact API
#[derive(OpenApi)]
#[openapi(
    paths(submit_contact),
    components(
        schemas(ContactMessage, Ack),
        responses(FieldValidationResponse, MalformedBodyResponse)
    ),
    tags(
        (name = "Contact", description = "Contact-form intake (stateless)")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router {
    Router::new().route("/", post(submit_contact))
}

/// Accept a contact-form submission
#[utoipa::path(
    post,
    path = "",
    tag = "Contact",
    request_body = ContactMessage,
    responses(
        (status = 200, description = "Submission accepted", body = Ack),
        (status = 400, response = FieldValidationResponse)
    )
)]
async fn submit_contact(
    body: Result<Json<ContactMessage>, JsonRejection>,
) -> Result<Json<Ack>, AppError> {
    let Json(contact) = body.map_err(|_| AppError::MalformedBody)?;

    let errors = validate_contact(&contact);
    if !errors.is_empty() {
        return Err(AppError::FieldValidation(errors));
    }

    // Delivery is the log pipeline's job; the API only acknowledges intake.
    tracing::info!(
        contact_name = %contact.name.trim(),
        contact_email = %contact.email.trim(),
        "Contact message received"
    );

    Ok(Json(Ack::ok()))
}
