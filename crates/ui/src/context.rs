use std::sync::{Arc, Mutex, PoisonError};

use quiz_core::model::QuizSettings;
use storage::{QuestionSource, SessionStore};

pub trait UiApp: Send + Sync {
    fn questions(&self) -> Arc<dyn QuestionSource>;
    fn session_store(&self) -> Arc<dyn SessionStore>;
    fn settings(&self) -> QuizSettings;
}

#[derive(Clone)]
pub struct AppContext {
    questions: Arc<dyn QuestionSource>,
    session_store: Arc<dyn SessionStore>,
    settings: QuizSettings,
    // One-shot message carried from a rejected quiz to the landing view.
    notice: Arc<Mutex<Option<String>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            questions: app.questions(),
            session_store: app.session_store(),
            settings: app.settings(),
            notice: Arc::new(Mutex::new(None)),
        }
    }

    #[must_use]
    pub fn questions(&self) -> Arc<dyn QuestionSource> {
        Arc::clone(&self.questions)
    }

    #[must_use]
    pub fn session_store(&self) -> Arc<dyn SessionStore> {
        Arc::clone(&self.session_store)
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    pub fn set_notice(&self, message: impl Into<String>) {
        *self.notice.lock().unwrap_or_else(PoisonError::into_inner) = Some(message.into());
    }

    /// Take the pending notice, leaving none behind.
    #[must_use]
    pub fn take_notice(&self) -> Option<String> {
        self.notice
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
