mod bank;
mod navigation;
mod phase;
mod pool;
mod question;

pub use bank::default_pool;
pub use navigation::{NavigationEvent, NavigationMailbox};
pub use phase::QuizPhase;
pub use pool::{MAX_TARGET_COUNT, PoolError, QuestionPool};
pub use question::{ANSWERS_PER_QUESTION, Question, QuestionError, QuestionRecord};
