use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the store and its collaborators. Every variant is
/// recoverable by the caller re-issuing a corrected request.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Transaction with ID {0} not found")]
    NotFound(Uuid),

    #[error("Persistence failure: {0}")]
    Persistence(String),
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Persistence(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Persistence(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
