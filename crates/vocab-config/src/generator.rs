//! Daily sentence generator settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default number of sentences accepted per run.
const fn default_batch_size() -> usize {
    20
}

fn default_source_language() -> String {
    String::from("Hindi")
}

fn default_target_language() -> String {
    String::from("English")
}

fn default_aux_language() -> String {
    String::from("German")
}

const fn default_pair_temperature() -> f32 {
    0.8
}

const fn default_translation_temperature() -> f32 {
    0.7
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratorConfig {
    /// Maximum number of new sentences accepted per run.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Language of `source_text` (e.g., "Hindi").
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Language of `target_text`, also the dedup language (e.g., "English").
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Language of `aux_text` (e.g., "German").
    #[serde(default = "default_aux_language")]
    pub aux_language: String,

    /// Sampling temperature for pair generation.
    #[serde(default = "default_pair_temperature")]
    pub pair_temperature: f32,

    /// Sampling temperature for translation.
    #[serde(default = "default_translation_temperature")]
    pub translation_temperature: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            source_language: default_source_language(),
            target_language: default_target_language(),
            aux_language: default_aux_language(),
            pair_temperature: default_pair_temperature(),
            translation_temperature: default_translation_temperature(),
        }
    }
}

impl GeneratorConfig {
    /// Reject values the pipeline cannot run with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a zero batch size, a blank
    /// language name, or a temperature outside `0.0..=2.0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "generator.batch_size",
                reason: "must be at least 1".into(),
            });
        }
        for (field, value) in [
            ("generator.source_language", &self.source_language),
            ("generator.target_language", &self.target_language),
            ("generator.aux_language", &self.aux_language),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must not be empty".into(),
                });
            }
        }
        for (field, value) in [
            ("generator.pair_temperature", self.pair_temperature),
            (
                "generator.translation_temperature",
                self.translation_temperature,
            ),
        ] {
            if !(0.0..=2.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("{value} is outside 0.0..=2.0"),
                });
            }
        }
        Ok(())
    }
}
