use dioxus::prelude::*;
use services::quiz::{Destination, QuestionView, QuizDisplay};

use crate::context::AppContext;

/// What the quiz page shows for the current question.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizScreenVm {
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<String>,
    pub percent: u8,
}

impl QuizScreenVm {
    #[must_use]
    pub fn from_view(view: &QuestionView<'_>) -> Self {
        Self {
            number: view.number,
            total: view.total,
            prompt: view.prompt.to_owned(),
            options: view.options.to_vec(),
            percent: view.progress.percent(),
        }
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.total > 0
    }

    /// 0-based index of the question on screen, `None` before the first one.
    #[must_use]
    pub fn question_index(&self) -> Option<usize> {
        self.number.checked_sub(1)
    }

    #[must_use]
    pub fn heading(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }
}

/// `QuizDisplay` backed by the quiz page's signals.
///
/// The controller runs in a task owned by the page; writes here re-render it.
pub struct SignalDisplay {
    pub screen: Signal<QuizScreenVm>,
    pub remaining: Signal<u32>,
    pub selection: Signal<Option<String>>,
    pub destination: Signal<Option<Destination>>,
    pub ctx: AppContext,
}

impl QuizDisplay for SignalDisplay {
    fn render_question(&mut self, view: &QuestionView<'_>) {
        self.selection.set(None);
        self.screen.set(QuizScreenVm::from_view(view));
    }

    fn render_remaining(&mut self, remaining: u32) {
        self.remaining.set(remaining);
    }

    fn selection(&self) -> Option<String> {
        self.selection.peek().clone()
    }

    fn alert(&mut self, message: &str) {
        self.ctx.set_notice(message);
    }

    fn navigate(&mut self, destination: Destination) {
        self.destination.set(Some(destination));
    }
}

#[cfg(test)]
mod tests {
    use services::quiz::QuizProgress;

    use super::*;

    #[test]
    fn screen_copies_the_question_view() {
        let options = vec!["Paris".to_string(), "Rome".to_string()];
        let view = QuestionView {
            number: 3,
            total: 10,
            prompt: "Capital of France?",
            options: &options,
            progress: QuizProgress {
                total: 10,
                answered: 2,
                remaining: 8,
                is_complete: false,
            },
            remaining: 30,
        };

        let screen = QuizScreenVm::from_view(&view);
        assert!(screen.is_loaded());
        assert_eq!(screen.heading(), "Question 3 of 10");
        assert_eq!(screen.options, options);
        assert_eq!(screen.percent, 20);
        assert_eq!(screen.question_index(), Some(2));
        assert!(!QuizScreenVm::default().is_loaded());
        assert_eq!(QuizScreenVm::default().question_index(), None);
    }
}
