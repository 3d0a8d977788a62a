//! Storage errors for the daily sentence store.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A stored value could not be read back (bad date text, negative count).
    #[error("unreadable stored value: {0}")]
    Query(String),

    /// The embedded schema could not be applied.
    #[error("schema setup failed: {0}")]
    Migration(String),

    /// A statement that always yields a row yielded none.
    #[error("statement returned no row")]
    NoResult,

    /// Another row already holds this `content_hash`.
    #[error("Duplicate content hash: {0}")]
    Duplicate(String),

    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
