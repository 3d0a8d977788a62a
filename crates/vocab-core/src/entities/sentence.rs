use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::TrilingualSentence;
use crate::hash::generate_hash_key;

/// A generated practice sentence as persisted in the store.
///
/// `id` and `created_date` are assigned by the store at insert time.
/// `content_hash` is unique across all rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailySentence {
    pub id: String,
    pub created_date: NaiveDate,
    pub source_text: String,
    pub target_text: String,
    pub aux_text: String,
    pub content_hash: String,
}

impl DailySentence {
    /// The response form of this record, without store metadata.
    #[must_use]
    pub fn to_trilingual(&self) -> TrilingualSentence {
        TrilingualSentence {
            source_text: self.source_text.clone(),
            target_text: self.target_text.clone(),
            aux_text: self.aux_text.clone(),
        }
    }
}

impl fmt::Display for DailySentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {} → {}",
            self.source_text, self.target_text, self.aux_text
        )
    }
}

/// Insert payload for a `DailySentence`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSentence {
    pub source_text: String,
    pub target_text: String,
    pub aux_text: String,
    pub content_hash: String,
}

impl NewSentence {
    /// Build an insert payload, deriving the content hash from `target_text`.
    #[must_use]
    pub fn new(
        source_text: impl Into<String>,
        target_text: impl Into<String>,
        aux_text: impl Into<String>,
    ) -> Self {
        let target_text = target_text.into();
        let content_hash = generate_hash_key(&target_text);
        Self {
            source_text: source_text.into(),
            target_text,
            aux_text: aux_text.into(),
            content_hash,
        }
    }
}
