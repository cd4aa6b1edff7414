use thiserror::Error;

use crate::models::upload::MediaKind;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Too many {kind}: {actual} selected, at most {max} allowed")]
    LimitExceeded {
        kind: MediaKind,
        max: usize,
        actual: usize,
    },

    #[error("API error: {0}")]
    Api(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type DeskResult<T> = Result<T, DeskError>;
