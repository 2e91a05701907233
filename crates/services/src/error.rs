//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use trivia_core::model::PoolError;

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("invalid question pool: {0}")]
    InvalidPool(#[from] PoolError),
    #[error("answer index {index} is out of range (0..{len})")]
    OutOfRange { index: usize, len: usize },
    #[error("quiz session already finished")]
    Finished,
}

/// Errors emitted while loading a `QuestionBank`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("failed to read question file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed question file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Pool(#[from] PoolError),
}
