use super::progress::QuizProgress;

/// Where the quiz sends the player once it stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Landing,
    Results,
}

/// Everything a surface needs to show one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView<'a> {
    /// 1-based position within the session.
    pub number: usize,
    pub total: usize,
    pub prompt: &'a str,
    pub options: &'a [String],
    pub progress: QuizProgress,
    pub remaining: u32,
}

/// Display surface driven by the quiz controller.
///
/// Implementations only render and report; every state change stays in the
/// controller.
pub trait QuizDisplay {
    /// Show a new question. Any previous selection is discarded.
    fn render_question(&mut self, view: &QuestionView<'_>);

    /// Update the countdown readout.
    fn render_remaining(&mut self, remaining: u32);

    /// The option the player currently has selected, if any.
    fn selection(&self) -> Option<String>;

    /// Tell the player something went wrong.
    fn alert(&mut self, message: &str);

    fn navigate(&mut self, destination: Destination);
}

/// Countdown readout text.
#[must_use]
pub fn format_remaining(remaining: u32) -> String {
    format!("Time: {remaining}s")
}
