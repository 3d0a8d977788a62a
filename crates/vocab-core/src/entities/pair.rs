use serde::{Deserialize, Serialize};

/// A source/target sentence pair returned by the generative text service.
///
/// Accepts the language-named keys the service was historically prompted
/// with (`hindi`, `english`) as aliases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SentencePair {
    #[serde(alias = "source_text", alias = "hindi")]
    pub source_text: String,
    #[serde(alias = "target_text", alias = "english")]
    pub target_text: String,
}

impl SentencePair {
    #[must_use]
    pub fn new(source_text: impl Into<String>, target_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            target_text: target_text.into(),
        }
    }
}

/// A target-language text and its auxiliary-language translation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    #[serde(alias = "target_text", alias = "english")]
    pub target_text: String,
    #[serde(alias = "aux_text", alias = "german")]
    pub aux_text: String,
}

impl Translation {
    #[must_use]
    pub fn new(target_text: impl Into<String>, aux_text: impl Into<String>) -> Self {
        Self {
            target_text: target_text.into(),
            aux_text: aux_text.into(),
        }
    }
}

/// One element of a daily batch response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrilingualSentence {
    pub source_text: String,
    pub target_text: String,
    pub aux_text: String,
}
