use std::fmt;

use quiz_core::model::{Question, QuizParams};

use super::handoff::QuizResults;
use super::progress::QuizProgress;
use crate::error::{ConfigurationError, QuizError};

//
// ─── RECORDED ANSWER ───────────────────────────────────────────────────────────
//

/// Outcome of recording one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub index: usize,
    /// `None` is the "no answer" sentinel.
    pub selection: Option<String>,
    pub elapsed_seconds: u32,
    pub is_correct: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// State of one quiz attempt.
///
/// `answers` and `elapsed_seconds` grow in lockstep with `current`, so their
/// lengths always equal the number of questions answered so far.
pub struct QuizSession {
    params: QuizParams,
    questions: Vec<Question>,
    current: usize,
    score: usize,
    answers: Vec<Option<String>>,
    elapsed_seconds: Vec<u32>,
}

impl QuizSession {
    /// Start a session over an already sampled question list.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::EmptyPool` if `questions` is empty.
    pub fn new(params: QuizParams, questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(ConfigurationError::EmptyPool {
                category: params.category().to_owned(),
                difficulty: params.difficulty().to_owned(),
            }
            .into());
        }

        let len = questions.len();
        Ok(Self {
            params,
            questions,
            current: 0,
            score: 0,
            answers: Vec::with_capacity(len),
            elapsed_seconds: Vec::with_capacity(len),
        })
    }

    #[must_use]
    pub fn params(&self) -> &QuizParams {
        &self.params
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn answers(&self) -> &[Option<String>] {
        &self.answers
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> &[u32] {
        &self.elapsed_seconds
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.total_questions(),
            answered: self.current,
            remaining: self.total_questions().saturating_sub(self.current),
            is_complete: self.is_complete(),
        }
    }

    /// Record the answer to the current question and advance.
    ///
    /// `selection` of `None` means the question timed out or nothing was
    /// picked; it never scores.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` if every question is already answered.
    pub fn record_answer(
        &mut self,
        selection: Option<String>,
        elapsed_seconds: u32,
    ) -> Result<AnswerRecord, QuizError> {
        let Some(question) = self.current_question() else {
            return Err(QuizError::Completed);
        };
        let is_correct = question.is_correct(selection.as_deref());

        if is_correct {
            self.score += 1;
        }
        self.answers.push(selection.clone());
        self.elapsed_seconds.push(elapsed_seconds);

        let index = self.current;
        self.current += 1;

        Ok(AnswerRecord {
            index,
            selection,
            elapsed_seconds,
            is_correct,
        })
    }

    /// Hand the session off as results. Consumes it, so no further answers
    /// can be recorded.
    #[must_use]
    pub fn into_results(self) -> QuizResults {
        QuizResults {
            score: self.score,
            total: self.questions.len(),
            elapsed_seconds: self.elapsed_seconds,
            answers: self.answers,
            questions: self.questions,
            category: self.params.category().to_owned(),
            difficulty: self.params.difficulty().to_owned(),
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("params", &self.params)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("answers_len", &self.answers.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
