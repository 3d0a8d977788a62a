//! Daily sentence repository: list, existence check, insert, count.

use vocab_core::entities::{DailySentence, NewSentence};

use crate::VocabDb;
use crate::error::DatabaseError;
use crate::helpers::{get_count, is_duplicate_content_hash, parse_date};

const SENTENCE_COLUMNS: &str =
    "id, created_date, source_text, target_text, aux_text, content_hash";

fn row_to_sentence(row: &libsql::Row) -> Result<DailySentence, DatabaseError> {
    Ok(DailySentence {
        id: row.get::<String>(0)?,
        created_date: parse_date(&row.get::<String>(1)?)?,
        source_text: row.get::<String>(2)?,
        target_text: row.get::<String>(3)?,
        aux_text: row.get::<String>(4)?,
        content_hash: row.get::<String>(5)?,
    })
}

impl VocabDb {
    /// All stored target texts, oldest first.
    pub async fn list_target_texts(&self) -> Result<Vec<String>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT target_text FROM daily_sentences ORDER BY created_date, rowid",
                (),
            )
            .await?;
        let mut texts = Vec::new();
        while let Some(row) = rows.next().await? {
            texts.push(row.get::<String>(0)?);
        }
        Ok(texts)
    }

    pub async fn sentence_hash_exists(&self, content_hash: &str) -> Result<bool, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT 1 FROM daily_sentences WHERE content_hash = ?1 LIMIT 1",
                [content_hash],
            )
            .await?;
        Ok(rows.next().await?.is_some())
    }

    /// Insert a sentence. The store assigns `id` and `created_date`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Duplicate` if a row with the same
    /// `content_hash` already exists.
    pub async fn insert_sentence(&self, new: &NewSentence) -> Result<DailySentence, DatabaseError> {
        let sql = format!(
            "INSERT INTO daily_sentences (id, source_text, target_text, aux_text, content_hash)
             VALUES ('dsn-' || lower(hex(randomblob(4))), ?1, ?2, ?3, ?4)
             RETURNING {SENTENCE_COLUMNS}"
        );
        let params = libsql::params![
            new.source_text.as_str(),
            new.target_text.as_str(),
            new.aux_text.as_str(),
            new.content_hash.as_str()
        ];

        let mut rows = match self.conn().query(&sql, params).await {
            Ok(rows) => rows,
            Err(e) if is_duplicate_content_hash(&e) => {
                return Err(DatabaseError::Duplicate(new.content_hash.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        let row = match rows.next().await {
            Ok(Some(row)) => row,
            Ok(None) => return Err(DatabaseError::NoResult),
            Err(e) if is_duplicate_content_hash(&e) => {
                return Err(DatabaseError::Duplicate(new.content_hash.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        row_to_sentence(&row)
    }

    pub async fn get_sentence_by_hash(
        &self,
        content_hash: &str,
    ) -> Result<DailySentence, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SENTENCE_COLUMNS} FROM daily_sentences WHERE content_hash = ?1"),
                [content_hash],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_sentence(&row)
    }

    pub async fn count_sentences(&self) -> Result<u64, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT COUNT(*) FROM daily_sentences", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        get_count(&row, 0)
    }
}
