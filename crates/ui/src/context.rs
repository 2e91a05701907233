use std::sync::Arc;

use services::{QuestionBank, QuizError, QuizSession, Shuffle};

pub trait UiApp: Send + Sync {
    fn question_bank(&self) -> Arc<QuestionBank>;
    fn shuffle(&self) -> Shuffle;
}

#[derive(Clone)]
pub struct AppContext {
    question_bank: Arc<QuestionBank>,
    shuffle: Shuffle,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            question_bank: app.question_bank(),
            shuffle: app.shuffle(),
        }
    }

    #[must_use]
    pub fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.question_bank)
    }

    #[must_use]
    pub fn shuffle(&self) -> Shuffle {
        self.shuffle
    }

    /// Start a fresh play-through over the configured questions.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidPool` if the bank has no questions.
    pub fn start_session(&self) -> Result<QuizSession, QuizError> {
        QuizSession::start(self.question_bank.pool(), self.shuffle)
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
