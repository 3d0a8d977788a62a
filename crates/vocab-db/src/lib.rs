//! # vocab-db
//!
//! libSQL storage for vocab-mate.
//!
//! Holds the generated daily sentences. The `content_hash` column carries a
//! UNIQUE constraint, which is the only guard against two concurrent
//! generation runs inserting the same sentence.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for vocab-mate.
///
/// Wraps a libSQL database and a single connection shared by all repository
/// methods.
pub struct VocabDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl VocabDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let vocab_db = Self { db, conn };
        vocab_db.run_migrations().await?;
        tracing::debug!(path, "opened vocab database");
        Ok(vocab_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
