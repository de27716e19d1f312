//! The timed quiz: sampling, session state, countdown and the controller that
//! ties them to a display.

pub mod controller;
pub mod display;
pub mod handoff;
pub mod progress;
pub mod sampler;
pub mod session;
pub mod timer;

pub use controller::{QuizController, QuizEvent, QuizHandle, QuizPhase};
pub use display::{Destination, QuestionView, QuizDisplay, format_remaining};
pub use handoff::QuizResults;
pub use progress::QuizProgress;
pub use sampler::{sample_questions, sample_questions_with};
pub use session::{AnswerRecord, QuizSession};
pub use timer::{QuestionTimer, TimerEvent};
