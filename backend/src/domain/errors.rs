//! Typed domain errors.
//!
//! Services return these so the REST layer can map each kind onto a
//! status code without string matching. Storage failures pass through
//! the `Storage` variant and surface as internal errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Referenced record does not exist, or exists under a different dog.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A required field was absent on create.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Session status outside the completed/skipped enum.
    #[error("status must be \"completed\" or \"skipped\", got \"{0}\"")]
    InvalidStatus(String),

    /// A score was supplied for a skipped session.
    #[error("score is not allowed on a skipped session")]
    ScoreNotAllowed,

    /// Score outside the 1-10 range.
    #[error("score must be between 1 and 10, got {0}")]
    ScoreOutOfRange(i64),

    /// Malformed or incomplete date range on a session query.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }
}
