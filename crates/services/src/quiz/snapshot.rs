use serde::Serialize;
use trivia_core::model::{ANSWERS_PER_QUESTION, QuizPhase};

/// Read-only view of a session, handed to observers after every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSnapshot {
    pub phase: QuizPhase,
    pub question_text: String,
    /// Answers in display order.
    pub answers: [String; ANSWERS_PER_QUESTION],
    pub question_index: usize,
    pub target_count: usize,
}

impl QuizSnapshot {
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress::new(self.question_index, self.target_count, self.phase)
    }
}

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizProgress {
    pub cleared: usize,
    pub target: usize,
    pub remaining: usize,
    pub is_finished: bool,
}

impl QuizProgress {
    pub(crate) fn new(cleared: usize, target: usize, phase: QuizPhase) -> Self {
        Self {
            cleared,
            target,
            remaining: target.saturating_sub(cleared),
            is_finished: phase.is_terminal(),
        }
    }

    /// 1-based number of the question on screen, capped at `target`.
    #[must_use]
    pub fn question_number(&self) -> usize {
        (self.cleared + 1).min(self.target)
    }
}
