use thiserror::Error;
use vocab_db::error::DatabaseError;

/// Errors that abort a daily generation run.
///
/// Generative service failures never surface here; they degrade to an empty
/// batch instead.
#[derive(Debug, Error)]
pub enum DailyError {
    #[error("storage error: {0}")]
    Store(#[from] DatabaseError),
}
