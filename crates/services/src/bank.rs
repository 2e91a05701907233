use std::fs;
use std::path::Path;

use trivia_core::model::{QuestionPool, QuestionRecord, default_pool};

use crate::error::BankError;

/// Where the question pool for new sessions comes from.
///
/// A question file is a JSON array of `{ "text": ..., "answers": [...] }`
/// objects; the first answer of each entry is the correct one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    pool: QuestionPool,
}

impl QuestionBank {
    /// The built-in Android trivia questions.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            pool: default_pool(),
        }
    }

    /// # Errors
    ///
    /// Returns `BankError::Parse` for malformed JSON and `BankError::Pool` if the
    /// records do not form a valid, non-empty pool.
    pub fn from_json_str(raw: &str) -> Result<Self, BankError> {
        let records: Vec<QuestionRecord> = serde_json::from_str(raw)?;
        let pool = QuestionPool::from_records(records)?;
        Ok(Self { pool })
    }

    /// Read a question file from disk.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Io` if the file cannot be read, otherwise as
    /// [`QuestionBank::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| BankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let bank = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), questions = bank.len(), "loaded question file");
        Ok(bank)
    }

    /// Use the file at `path` when given, the built-in questions otherwise.
    ///
    /// # Errors
    ///
    /// Propagates [`QuestionBank::load`] failures.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, BankError> {
        path.map_or_else(|| Ok(Self::builtin()), Self::load)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// A copy of the pool, ready to hand to a new session.
    #[must_use]
    pub fn pool(&self) -> QuestionPool {
        self.pool.clone()
    }

    #[must_use]
    pub fn into_pool(self) -> QuestionPool {
        self.pool
    }
}

impl From<QuestionPool> for QuestionBank {
    fn from(pool: QuestionPool) -> Self {
        Self { pool }
    }
}
