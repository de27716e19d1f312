use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Countdown notifications, tagged with the question they were started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick { question: usize, remaining: u32 },
    Expired { question: usize },
}

impl TimerEvent {
    #[must_use]
    pub fn question(&self) -> usize {
        match self {
            Self::Tick { question, .. } | Self::Expired { question } => *question,
        }
    }
}

struct ActiveTimer {
    question: usize,
    task: JoinHandle<()>,
}

/// Per-question countdown. At most one countdown runs at a time.
///
/// The countdown is a spawned task that only sends events; whoever owns the
/// receiving end decides what they mean. Cancelling aborts the task, and
/// starting a new countdown cancels the previous one first.
#[derive(Default)]
pub struct QuestionTimer {
    active: Option<ActiveTimer>,
}

impl QuestionTimer {
    #[must_use]
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Start counting down `seconds` steps of `tick` for `question`.
    ///
    /// Sends one `Tick` per step with the seconds left, then exactly one
    /// `Expired`. Must be called from within a tokio runtime.
    pub fn start<E>(
        &mut self,
        question: usize,
        seconds: u32,
        tick: Duration,
        events: UnboundedSender<E>,
    ) where
        E: From<TimerEvent> + Send + 'static,
    {
        self.cancel();

        let task = tokio::spawn(async move {
            let mut remaining = seconds;
            while remaining > 0 {
                tokio::time::sleep(tick).await;
                remaining -= 1;
                if events
                    .send(TimerEvent::Tick { question, remaining }.into())
                    .is_err()
                {
                    return;
                }
            }
            let _ = events.send(TimerEvent::Expired { question }.into());
        });

        tracing::debug!(question, seconds, "question timer started");
        self.active = Some(ActiveTimer { question, task });
    }

    /// Abort the running countdown, if any. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        match self.active.take() {
            Some(active) => {
                active.task.abort();
                tracing::debug!(question = active.question, "question timer cancelled");
                true
            }
            None => false,
        }
    }

    /// Question whose countdown is still running.
    #[must_use]
    pub fn active_question(&self) -> Option<usize> {
        self.active
            .as_ref()
            .filter(|active| !active.task.is_finished())
            .map(|active| active.question)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active_question().is_some()
    }
}

impl Drop for QuestionTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
