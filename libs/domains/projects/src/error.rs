use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Project not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Backend(String),
}

pub type ProjectResult<T> = Result<T, ProjectError>;

/// Convert ProjectError to AppError for the response envelope.
///
/// NotFound deliberately collapses to the bare "Not found" message the API
/// contract promises, without leaking the id back.
impl From<ProjectError> for AppError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::NotFound(_) => AppError::NotFound("Not found".to_string()),
            ProjectError::Validation(msg) => AppError::BadRequest(msg),
            ProjectError::Backend(msg) => AppError::Internal(msg),
        }
    }
}

impl IntoResponse for ProjectError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProjectError {
    fn from(err: mongodb::error::Error) -> Self {
        ProjectError::Backend(err.to_string())
    }
}

impl From<database::mongodb::MongoError> for ProjectError {
    fn from(err: database::mongodb::MongoError) -> Self {
        ProjectError::Backend(err.to_string())
    }
}
