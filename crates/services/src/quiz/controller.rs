use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use quiz_core::model::{Question, QuizParams, QuizSettings};
use storage::{QuestionSource, SessionStore};

use super::display::{Destination, QuestionView, QuizDisplay};
use super::handoff::QuizResults;
use super::sampler::sample_questions;
use super::session::QuizSession;
use super::timer::{QuestionTimer, TimerEvent};
use crate::error::{ConfigurationError, QuizError};

//
// ─── PHASES & EVENTS ───────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Loading,
    AwaitingAnswer { index: usize },
    Finished,
}

/// Input to the controller: a player submission or a countdown notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    /// Confirm whatever the display has selected for `question`.
    Submit { question: usize },
    Timer(TimerEvent),
}

impl From<TimerEvent> for QuizEvent {
    fn from(event: TimerEvent) -> Self {
        Self::Timer(event)
    }
}

/// Cloneable handle the UI uses to feed submissions into a running quiz.
#[derive(Debug, Clone)]
pub struct QuizHandle {
    events: UnboundedSender<QuizEvent>,
}

impl QuizHandle {
    /// Queue a submission for the question on screen (0-based). Returns
    /// false once the quiz is gone.
    pub fn submit(&self, question: usize) -> bool {
        self.events.send(QuizEvent::Submit { question }).is_ok()
    }
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Drives one quiz attempt from the first question to the results handoff.
///
/// Owns the session, the single countdown and the display. Every transition
/// happens in `handle_event`, one event at a time.
pub struct QuizController<D> {
    settings: QuizSettings,
    session: Option<QuizSession>,
    results: Option<QuizResults>,
    phase: QuizPhase,
    remaining: u32,
    display: D,
    store: Arc<dyn SessionStore>,
    timer: QuestionTimer,
    events_tx: UnboundedSender<QuizEvent>,
    events_rx: UnboundedReceiver<QuizEvent>,
}

impl<D: QuizDisplay> QuizController<D> {
    /// Validate `query` (`cat`/`diff`) and prepare a session.
    ///
    /// # Errors
    ///
    /// See [`QuizController::load`].
    pub fn load_from_query(
        query: &str,
        source: &dyn QuestionSource,
        store: Arc<dyn SessionStore>,
        settings: QuizSettings,
        mut display: D,
    ) -> Result<Self, QuizError> {
        match QuizParams::from_query(query) {
            Ok(params) => Self::load(params, source, store, settings, display),
            Err(err) => Err(reject(&mut display, err.into())),
        }
    }

    /// Validate `params` against `source` and sample the session's questions.
    ///
    /// On failure the player is alerted and sent to the landing view, and no
    /// session is created.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Configuration` when the category or difficulty is
    /// unknown or has no questions.
    pub fn load(
        params: QuizParams,
        source: &dyn QuestionSource,
        store: Arc<dyn SessionStore>,
        settings: QuizSettings,
        mut display: D,
    ) -> Result<Self, QuizError> {
        let questions = match select_questions(&params, source, &settings) {
            Ok(questions) => questions,
            Err(err) => return Err(reject(&mut display, err)),
        };
        let session = QuizSession::new(params, questions)?;
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Ok(Self {
            settings,
            session: Some(session),
            results: None,
            phase: QuizPhase::Loading,
            remaining: settings.seconds_per_question(),
            display,
            store,
            timer: QuestionTimer::new(),
            events_tx,
            events_rx,
        })
    }

    #[must_use]
    pub fn handle(&self) -> QuizHandle {
        QuizHandle {
            events: self.events_tx.clone(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Seconds left on the current question's countdown.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Live session; `None` once it has been handed off.
    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// Handed-off results; `Some` once finished.
    #[must_use]
    pub fn results(&self) -> Option<&QuizResults> {
        self.results.as_ref()
    }

    #[must_use]
    pub fn active_timer_question(&self) -> Option<usize> {
        self.timer.active_question()
    }

    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Show the first question and start its countdown. No-op unless loading.
    pub fn start(&mut self) {
        if self.phase != QuizPhase::Loading {
            return;
        }
        if let Some(session) = &self.session {
            tracing::info!(
                quiz = %session.params(),
                questions = session.total_questions(),
                "quiz started"
            );
        }
        self.show_current();
    }

    /// Apply one event and return the resulting phase.
    ///
    /// Events that arrive outside `AwaitingAnswer`, or submissions and
    /// countdown events for a question that is no longer current, are ignored.
    /// A submission racing a queued expiry therefore records only once.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` if the session refuses another answer.
    pub fn handle_event(&mut self, event: QuizEvent) -> Result<QuizPhase, QuizError> {
        let QuizPhase::AwaitingAnswer { index } = self.phase else {
            return Ok(self.phase);
        };

        match event {
            QuizEvent::Submit { question } if question == index => {
                let selection = self.display.selection();
                self.answer(selection)?;
            }
            QuizEvent::Submit { question } => {
                tracing::debug!(question, current = index, "ignoring stale submission");
            }
            QuizEvent::Timer(TimerEvent::Tick {
                question,
                remaining,
            }) if question == index => {
                self.remaining = remaining;
                self.display.render_remaining(remaining);
            }
            QuizEvent::Timer(TimerEvent::Expired { question }) if question == index => {
                self.remaining = 0;
                self.answer(None)?;
            }
            QuizEvent::Timer(stale) => {
                tracing::trace!(?stale, current = index, "ignoring stale timer event");
            }
        }

        Ok(self.phase)
    }

    /// Wait for the next queued event and apply it.
    ///
    /// # Errors
    ///
    /// See [`QuizController::handle_event`].
    pub async fn process_next(&mut self) -> Result<QuizPhase, QuizError> {
        // `events_tx` lives as long as `self`, so the channel never closes.
        match self.events_rx.recv().await {
            Some(event) => self.handle_event(event),
            None => Ok(self.phase),
        }
    }

    /// Run the quiz to completion and return the handed-off results.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`QuizController::handle_event`].
    pub async fn run(mut self) -> Result<QuizResults, QuizError> {
        self.start();
        loop {
            if let Some(results) = self.results.take() {
                return Ok(results);
            }
            self.process_next().await?;
        }
    }

    fn show_current(&mut self) {
        let Some(session) = &self.session else {
            return;
        };
        let Some(question) = session.current_question() else {
            return;
        };
        let index = session.current_index();
        let seconds = self.settings.seconds_per_question();

        self.remaining = seconds;
        self.display.render_question(&QuestionView {
            number: index + 1,
            total: session.total_questions(),
            prompt: question.prompt(),
            options: question.options(),
            progress: session.progress(),
            remaining: seconds,
        });
        self.display.render_remaining(seconds);
        self.timer
            .start(index, seconds, self.settings.tick(), self.events_tx.clone());
        self.phase = QuizPhase::AwaitingAnswer { index };
    }

    fn answer(&mut self, selection: Option<String>) -> Result<(), QuizError> {
        self.timer.cancel();

        let elapsed = self.settings.elapsed_from_remaining(self.remaining);
        let session = self.session.as_mut().ok_or(QuizError::Completed)?;
        let record = session.record_answer(selection, elapsed)?;
        tracing::debug!(
            index = record.index,
            answered = record.selection.is_some(),
            correct = record.is_correct,
            elapsed = record.elapsed_seconds,
            "answer recorded"
        );

        if session.is_complete() {
            self.finish();
        } else {
            self.show_current();
        }
        Ok(())
    }

    fn finish(&mut self) {
        self.timer.cancel();
        self.phase = QuizPhase::Finished;

        if let Some(session) = self.session.take() {
            let results = session.into_results();
            match results.persist(self.store.as_ref()) {
                Ok(()) => tracing::info!(
                    score = results.score,
                    total = results.total,
                    "quiz finished"
                ),
                Err(err) => tracing::error!(error = %err, "failed to persist quiz results"),
            }
            self.results = Some(results);
        }

        self.display.navigate(Destination::Results);
    }
}

impl<D> fmt::Debug for QuizController<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizController")
            .field("phase", &self.phase)
            .field("remaining", &self.remaining)
            .field("session", &self.session)
            .field("finished", &self.results.is_some())
            .finish_non_exhaustive()
    }
}

fn select_questions(
    params: &QuizParams,
    source: &dyn QuestionSource,
    settings: &QuizSettings,
) -> Result<Vec<Question>, QuizError> {
    let (category, difficulty) = (params.category(), params.difficulty());
    let Some(pool) = source.questions(category, difficulty) else {
        let err = if source.has_category(category) {
            ConfigurationError::UnknownDifficulty {
                category: category.to_owned(),
                difficulty: difficulty.to_owned(),
            }
        } else {
            ConfigurationError::UnknownCategory {
                category: category.to_owned(),
            }
        };
        return Err(err.into());
    };
    if pool.is_empty() {
        return Err(ConfigurationError::EmptyPool {
            category: category.to_owned(),
            difficulty: difficulty.to_owned(),
        }
        .into());
    }
    Ok(sample_questions(pool, settings.question_count()))
}

fn reject<D: QuizDisplay>(display: &mut D, err: QuizError) -> QuizError {
    tracing::warn!(error = %err, "rejecting quiz request");
    display.alert(&err.to_string());
    display.navigate(Destination::Landing);
    err
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
