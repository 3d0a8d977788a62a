//! Schema setup, applied every time the store is opened.

use crate::VocabDb;
use crate::error::DatabaseError;

/// `(name, sql)` in apply order. Every statement is `IF NOT EXISTS`.
const MIGRATIONS: &[(&str, &str)] = &[(
    "001_daily_sentences",
    include_str!("../migrations/001_daily_sentences.sql"),
)];

impl VocabDb {
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        for (name, sql) in MIGRATIONS {
            self.conn
                .execute_batch(sql)
                .await
                .map_err(|e| DatabaseError::Migration(format!("{name}: {e}")))?;
            tracing::trace!(migration = *name, "applied");
        }
        Ok(())
    }
}
