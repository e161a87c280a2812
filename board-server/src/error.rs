//! Error types for board-server

use thiserror::Error;

use crate::db::repos::StoreError;
use crate::models::ValidationError;

pub type BoardResult<T> = Result<T, BoardError>;

/// Errors surfaced by the board service to the presentation adapters.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("post {id} not found")]
    NotFound { id: i64 },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid post id '{value}': {reason}")]
    InvalidArgument { value: String, reason: &'static str },

    #[error("store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for BoardError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { id } => Self::NotFound { id },
            other => Self::Store(other),
        }
    }
}
