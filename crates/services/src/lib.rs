#![forbid(unsafe_code)]

pub mod bank;
pub mod error;
pub mod quiz;

pub use trivia_core::Clock;

pub use bank::QuestionBank;
pub use error::{BankError, QuizError};
pub use quiz::{
    ObserverId, QuizProgress, QuizSession, QuizSnapshot, Shuffle, SubmitOutcome,
};
