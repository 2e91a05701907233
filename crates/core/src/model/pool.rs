use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::question::{Question, QuestionError, QuestionRecord};

/// Upper bound on how many questions a single play-through asks.
pub const MAX_TARGET_COUNT: usize = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PoolError {
    #[error("question pool is empty")]
    Empty,

    #[error("question {index} is invalid: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Ordered set of candidate questions.
///
/// Order only changes through [`QuestionPool::shuffle`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionPool {
    questions: Vec<Question>,
}

impl QuestionPool {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Validate raw records into a non-empty pool, preserving order.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Empty` when `records` is empty.
    /// Returns `PoolError::InvalidQuestion` for the first record that fails validation.
    pub fn from_records(
        records: impl IntoIterator<Item = QuestionRecord>,
    ) -> Result<Self, PoolError> {
        let questions = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                Question::try_from(record)
                    .map_err(|source| PoolError::InvalidQuestion { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if questions.is_empty() {
            return Err(PoolError::Empty);
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions a session over this pool must clear:
    /// half the pool rounded up, never more than [`MAX_TARGET_COUNT`].
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.questions.len().div_ceil(2).min(MAX_TARGET_COUNT)
    }

    /// Randomly permute the whole pool in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions.as_mut_slice().shuffle(rng);
    }
}
