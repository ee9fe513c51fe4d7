//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::QuizError;
use storage::StorageError;

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error("could not load questions: {0}")]
    Load(#[source] StorageError),
    #[error("could not load categories: {0}")]
    Catalog(#[source] StorageError),
}

/// Errors emitted while rendering or saving a report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    #[error("pdf rendering failed: {0}")]
    Pdf(String),
    #[error("could not write report: {0}")]
    Io(#[from] std::io::Error),
}
