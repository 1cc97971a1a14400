use crate::modules::directory::core::model::ValidationError;
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("forbidden: {0} may not do this")]
    Forbidden(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    TimeEntries(#[from] ApplicationError),

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl DirectoryError {
    /// Status every directory route answers with.
    pub fn status(&self) -> StatusCode {
        match self {
            DirectoryError::Forbidden(_) => StatusCode::FORBIDDEN,
            DirectoryError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
            DirectoryError::TimeEntries(ApplicationError::Domain(_)) => StatusCode::CONFLICT,
            DirectoryError::TimeEntries(_) | DirectoryError::Backend(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
