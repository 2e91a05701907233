mod observers;
mod session;
mod shuffle;
mod snapshot;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use observers::ObserverId;
pub use session::{QuizSession, SubmitOutcome};
pub use shuffle::Shuffle;
pub use snapshot::{QuizProgress, QuizSnapshot};
