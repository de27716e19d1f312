use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("question count must be > 0")]
    InvalidQuestionCount,

    #[error("seconds per question must be > 0")]
    InvalidSecondsPerQuestion,

    #[error("timer tick must be longer than zero")]
    InvalidTick,
}

/// Knobs for a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    question_count: usize,
    seconds_per_question: u32,
    tick: Duration,
}

impl Default for QuizSettings {
    /// Ten questions, thirty one-second ticks each.
    fn default() -> Self {
        Self {
            question_count: 10,
            seconds_per_question: 30,
            tick: Duration::from_secs(1),
        }
    }
}

impl QuizSettings {
    /// # Errors
    ///
    /// Returns `SettingsError` if any value is zero.
    pub fn new(
        question_count: usize,
        seconds_per_question: u32,
        tick: Duration,
    ) -> Result<Self, SettingsError> {
        if question_count == 0 {
            return Err(SettingsError::InvalidQuestionCount);
        }
        if seconds_per_question == 0 {
            return Err(SettingsError::InvalidSecondsPerQuestion);
        }
        if tick.is_zero() {
            return Err(SettingsError::InvalidTick);
        }
        Ok(Self {
            question_count,
            seconds_per_question,
            tick,
        })
    }

    /// Maximum number of questions sampled for one session.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.question_count
    }

    /// Countdown length, in ticks.
    #[must_use]
    pub fn seconds_per_question(&self) -> u32 {
        self.seconds_per_question
    }

    /// Wall-clock length of one countdown step.
    #[must_use]
    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Seconds spent on a question given what was left on the countdown,
    /// clamped to `[0, seconds_per_question]`.
    #[must_use]
    pub fn elapsed_from_remaining(&self, remaining: u32) -> u32 {
        self.seconds_per_question
            .saturating_sub(remaining.min(self.seconds_per_question))
    }
}
