//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::ParamsError;
use storage::StorageError;

/// The requested quiz cannot be served from the question source.
///
/// This is the only failure a player can cause; the controller reports it and
/// sends them back to the landing view without starting a session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigurationError {
    #[error(transparent)]
    Params(#[from] ParamsError),
    #[error("unknown category `{category}`")]
    UnknownCategory { category: String },
    #[error("unknown difficulty `{difficulty}` for category `{category}`")]
    UnknownDifficulty {
        category: String,
        difficulty: String,
    },
    #[error("no questions for `{category}`/`{difficulty}`")]
    EmptyPool {
        category: String,
        difficulty: String,
    },
}

/// Errors emitted by the quiz services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("invalid quiz configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("quiz already completed")]
    Completed,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("results encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl From<ParamsError> for QuizError {
    fn from(err: ParamsError) -> Self {
        Self::Configuration(err.into())
    }
}
