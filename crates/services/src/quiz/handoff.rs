//! Results handoff between the quiz and the results view.
//!
//! The key names and encodings below are the contract with whatever reads the
//! results back: integers as decimal text, sequences as JSON.

use std::str::FromStr;

use quiz_core::model::Question;
use storage::{SessionStore, StorageError};

use crate::error::QuizError;

pub const SCORE_KEY: &str = "score";
pub const TOTAL_KEY: &str = "total";
pub const TIME_SPENT_KEY: &str = "timeSpent";
pub const ANSWERS_KEY: &str = "answers";
pub const QUESTIONS_KEY: &str = "questions";
pub const CATEGORY_KEY: &str = "category";
pub const DIFFICULTY_KEY: &str = "difficulty";

/// Final record of a quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResults {
    pub score: usize,
    pub total: usize,
    pub elapsed_seconds: Vec<u32>,
    /// Aligned with `questions`; `None` is "no answer".
    pub answers: Vec<Option<String>>,
    pub questions: Vec<Question>,
    pub category: String,
    pub difficulty: String,
}

impl QuizResults {
    /// Write every handoff key to `store`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Encoding` if a sequence cannot be encoded, or
    /// `QuizError::Storage` if the store rejects a write.
    pub fn persist(&self, store: &dyn SessionStore) -> Result<(), QuizError> {
        let time_spent = serde_json::to_string(&self.elapsed_seconds)?;
        let answers = serde_json::to_string(&self.answers)?;
        let questions = serde_json::to_string(&self.questions)?;

        store.set_item(SCORE_KEY, &self.score.to_string())?;
        store.set_item(TOTAL_KEY, &self.total.to_string())?;
        store.set_item(TIME_SPENT_KEY, &time_spent)?;
        store.set_item(ANSWERS_KEY, &answers)?;
        store.set_item(QUESTIONS_KEY, &questions)?;
        store.set_item(CATEGORY_KEY, &self.category)?;
        store.set_item(DIFFICULTY_KEY, &self.difficulty)?;
        Ok(())
    }

    /// Read a handoff back from `store`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` with `StorageError::NotFound` if a key is
    /// missing, or `StorageError::Serialization` if a value cannot be decoded.
    pub fn load(store: &dyn SessionStore) -> Result<Self, QuizError> {
        Ok(Self {
            score: parse_number(store, SCORE_KEY)?,
            total: parse_number(store, TOTAL_KEY)?,
            elapsed_seconds: parse_json(store, TIME_SPENT_KEY)?,
            answers: parse_json(store, ANSWERS_KEY)?,
            questions: parse_json(store, QUESTIONS_KEY)?,
            category: store.require_item(CATEGORY_KEY)?,
            difficulty: store.require_item(DIFFICULTY_KEY)?,
        })
    }

    /// Total seconds spent across all questions.
    #[must_use]
    pub fn total_seconds(&self) -> u64 {
        self.elapsed_seconds.iter().map(|s| u64::from(*s)).sum()
    }
}

fn parse_number<T: FromStr>(store: &dyn SessionStore, key: &str) -> Result<T, StorageError>
where
    T::Err: std::fmt::Display,
{
    let raw = store.require_item(key)?;
    raw.trim()
        .parse()
        .map_err(|e| StorageError::Serialization(format!("{key}: {e}")))
}

fn parse_json<T: serde::de::DeserializeOwned>(
    store: &dyn SessionStore,
    key: &str,
) -> Result<T, StorageError> {
    let raw = store.require_item(key)?;
    serde_json::from_str(&raw).map_err(|e| StorageError::Serialization(format!("{key}: {e}")))
}
