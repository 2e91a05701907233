use serde::{Deserialize, Serialize};

/// Where a play-through currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QuizPhase {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl QuizPhase {
    /// `Won` and `Lost` end the session; nothing leaves them.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, QuizPhase::Won | QuizPhase::Lost)
    }
}
