//! JSON extractor with automatic validation using the validator crate.

use crate::errors::{AppError, validation_message};
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Two failure modes, kept distinct on the wire:
/// - the body cannot be parsed into `T` at all → 400
///   `{ok:false, error:"Invalid request body"}`
/// - `T` parses but fails its `Validate` rules → 400
///   `{ok:false, error:"<field: message; ...>"}`
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateUser {
///     #[validate(length(min = 3, max = 50))]
///     username: String,
/// }
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<CreateUser>) -> String {
///     format!("Creating user: {}", payload.username)
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::MalformedBody.into_response())?;

        data.validate()
            .map_err(|e| AppError::BadRequest(validation_message(&e)).into_response())?;

        Ok(ValidatedJson(data))
    }
}
