use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every question carries exactly this many answer choices.
pub const ANSWERS_PER_QUESTION: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("answer {index} cannot be empty")]
    EmptyAnswer { index: usize },

    #[error("question must have exactly 4 answers, got {len}")]
    AnswerCount { len: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice trivia question.
///
/// `answers[0]` is the correct answer. Display order is decided by the
/// session, never by this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord", into = "QuestionRecord")]
pub struct Question {
    text: String,
    answers: [String; ANSWERS_PER_QUESTION],
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if the text is blank.
    /// Returns `QuestionError::AnswerCount` unless exactly four answers are given.
    /// Returns `QuestionError::EmptyAnswer` if any answer is blank.
    pub fn new<S: Into<String>>(
        text: impl Into<String>,
        answers: impl IntoIterator<Item = S>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }

        let answers: Vec<String> = answers.into_iter().map(Into::into).collect();
        if let Some(index) = answers.iter().position(|a| a.trim().is_empty()) {
            return Err(QuestionError::EmptyAnswer { index });
        }

        let answers: [String; ANSWERS_PER_QUESTION] = answers
            .try_into()
            .map_err(|rest: Vec<String>| QuestionError::AnswerCount { len: rest.len() })?;

        Ok(Self { text, answers })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Answers in source order; the first one is correct.
    #[must_use]
    pub fn answers(&self) -> &[String; ANSWERS_PER_QUESTION] {
        &self.answers
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.answers[0]
    }

    /// Exact string comparison against the correct answer.
    #[must_use]
    pub fn is_correct(&self, candidate: &str) -> bool {
        candidate == self.correct_answer()
    }
}

/// Unvalidated question shape used for serialization and file input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub text: String,
    pub answers: Vec<String>,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Question::new(record.text, record.answers)
    }
}

impl From<Question> for QuestionRecord {
    fn from(question: Question) -> Self {
        Self {
            text: question.text,
            answers: question.answers.into(),
        }
    }
}
