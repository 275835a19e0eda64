//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{AiSettingsError, QuestionError, QuestionSetError};

/// Errors emitted by a `QuestionSource`.
///
/// These never reach the game: `QuestionSupplier` turns every one of them into the
/// fallback batch.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SupplyError {
    #[error("question generator is not configured")]
    Disabled,
    #[error("question generator returned an empty response")]
    EmptyResponse,
    #[error("question generator request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("malformed question payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("invalid generated question: {0}")]
    Question(#[from] QuestionError),
    #[error(transparent)]
    QuestionSet(#[from] QuestionSetError),
    #[error(transparent)]
    Settings(#[from] AiSettingsError),
}
