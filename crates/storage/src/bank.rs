use std::path::Path;

use quiz_core::model::{Question, QuestionBank};

use crate::repository::StorageError;

/// Read-only catalog of questions keyed by category and difficulty.
pub trait QuestionSource: Send + Sync {
    /// The ordered pool for a category/difficulty pair.
    ///
    /// Returns `None` when either key is unknown.
    fn questions(&self, category: &str, difficulty: &str) -> Option<&[Question]>;

    /// True when the category exists, regardless of its difficulties.
    fn has_category(&self, category: &str) -> bool;

    /// Category keys, in a stable order.
    fn categories(&self) -> Vec<String>;

    /// Difficulty keys for a category, empty when it is unknown.
    fn difficulties(&self, category: &str) -> Vec<String>;
}

impl QuestionSource for QuestionBank {
    fn questions(&self, category: &str, difficulty: &str) -> Option<&[Question]> {
        self.pool(category, difficulty)
    }

    fn has_category(&self, category: &str) -> bool {
        QuestionBank::has_category(self, category)
    }

    fn categories(&self) -> Vec<String> {
        QuestionBank::categories(self).map(str::to_owned).collect()
    }

    fn difficulties(&self, category: &str) -> Vec<String> {
        QuestionBank::difficulties(self, category)
            .map(str::to_owned)
            .collect()
    }
}

/// Question bank shipped with the application.
pub const BUNDLED_BANK: &str = include_str!("../assets/questions.json");

/// Parse [`BUNDLED_BANK`].
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the bundled file is invalid.
pub fn bundled_question_bank() -> Result<QuestionBank, StorageError> {
    parse_question_bank(BUNDLED_BANK)
}

/// Parse a JSON question bank.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the JSON is malformed or any
/// question fails validation.
pub fn parse_question_bank(raw: &str) -> Result<QuestionBank, StorageError> {
    serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Read and parse a JSON question bank from disk.
///
/// # Errors
///
/// Returns `StorageError::Io` if the file cannot be read, or
/// `StorageError::Serialization` if its contents are invalid.
pub fn load_question_bank(path: impl AsRef<Path>) -> Result<QuestionBank, StorageError> {
    let raw = std::fs::read_to_string(path)?;
    parse_question_bank(&raw)
}
