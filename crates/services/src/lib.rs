#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use error::{ConfigurationError, QuizError};
pub use quiz::{
    Destination, QuestionView, QuizController, QuizDisplay, QuizEvent, QuizHandle, QuizPhase,
    QuizProgress, QuizResults, QuizSession,
};
