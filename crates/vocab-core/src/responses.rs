//! Response types returned as JSON by the daily sentence trigger.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::TrilingualSentence;

/// Status marker attached to every daily batch response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    NewlyGenerated,
}

impl BatchStatus {
    /// Return the string representation used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewlyGenerated => "newly_generated",
        }
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one daily sentence generation run.
///
/// `sentences` may be empty when the generative service produced nothing
/// usable; `total_sentences_in_db` is read after persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyBatchResponse {
    pub date: NaiveDate,
    pub sentences: Vec<TrilingualSentence>,
    pub status: BatchStatus,
    pub total_sentences_in_db: u64,
}

impl DailyBatchResponse {
    #[must_use]
    pub const fn newly_generated(
        date: NaiveDate,
        sentences: Vec<TrilingualSentence>,
        total_sentences_in_db: u64,
    ) -> Self {
        Self {
            date,
            sentences,
            status: BatchStatus::NewlyGenerated,
            total_sentences_in_db,
        }
    }
}
