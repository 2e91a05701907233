use services::{QuizSession, SubmitOutcome};
use trivia_core::model::{ANSWERS_PER_QUESTION, NavigationEvent};

use crate::context::AppContext;
use crate::views::ViewError;

/// Everything the game screen renders, detached from the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameScreenVm {
    pub title: String,
    pub question: String,
    pub answers: [String; ANSWERS_PER_QUESTION],
    pub selected: Option<usize>,
}

/// Drives one play-through for the game screen.
#[derive(Debug)]
pub struct GameVm {
    session: QuizSession,
    selected: Option<usize>,
}

impl GameVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            selected: None,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Out-of-range choices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < ANSWERS_PER_QUESTION {
            self.selected = Some(index);
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        let progress = self.session.progress();
        format!(
            "Android Trivia (Question {}/{})",
            progress.question_number(),
            progress.target
        )
    }

    #[must_use]
    pub fn screen(&self) -> GameScreenVm {
        GameScreenVm {
            title: self.title(),
            question: self.session.current_question().text().to_owned(),
            answers: self.session.shuffled_answers().clone(),
            selected: self.selected,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Submit the current selection and return the navigation to perform, if any.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the session rejects the answer.
    pub fn submit(&mut self) -> Result<Option<NavigationEvent>, ViewError> {
        let outcome = self
            .session
            .submit_answer(self.selected)
            .map_err(ViewError::from)?;

        if let SubmitOutcome::Advanced { .. } = outcome {
            self.selected = None;
        }
        Ok(self.session.take_navigation())
    }
}

/// # Errors
///
/// Returns `ViewError::EmptyPool` when no questions are configured.
pub fn start_game(ctx: &AppContext) -> Result<GameVm, ViewError> {
    let session = ctx.start_session().map_err(ViewError::from)?;
    Ok(GameVm::new(session))
}
