use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use serde::de::DeserializeOwned;
use vocab_config::GeneratorConfig;
use vocab_core::entities::{SentencePair, Translation};
use vocab_core::generate_hash_key;
use vocab_core::responses::DailyBatchResponse;
use vocab_db::VocabDb;
use vocab_llm::prompts::{pair_prompt, translation_prompt};
use vocab_llm::{CompletionRequest, TextGenerator, extract_records};

use crate::error::DailyError;
use crate::merge::merge_translations;

/// Runs the daily sentence pipeline against one store and one generative
/// service.
///
/// Both collaborators are shared handles built once at startup. Runs are not
/// coordinated with each other; the store's unique `content_hash` is the only
/// guard against concurrent duplicates.
pub struct DailySentenceGenerator {
    db: Arc<VocabDb>,
    generator: Arc<dyn TextGenerator>,
    config: GeneratorConfig,
}

impl DailySentenceGenerator {
    pub fn new(db: Arc<VocabDb>, generator: Arc<dyn TextGenerator>, config: GeneratorConfig) -> Self {
        Self {
            db,
            generator,
            config,
        }
    }

    /// Ask for `count` new source/target pairs avoiding the `exclude` texts.
    ///
    /// Never fails: a service error or an unparseable answer yields an empty
    /// vector.
    pub async fn request_source_pairs(&self, exclude: &[String], count: usize) -> Vec<SentencePair> {
        let prompt = pair_prompt(&self.config, count, exclude);
        self.request_records("pairs", prompt, self.config.pair_temperature)
            .await
    }

    /// Ask for auxiliary-language translations of `texts`.
    ///
    /// Never fails, same as [`Self::request_source_pairs`].
    pub async fn request_translations(&self, texts: &[String]) -> Vec<Translation> {
        let prompt = translation_prompt(&self.config, texts);
        self.request_records("translations", prompt, self.config.translation_temperature)
            .await
    }

    async fn request_records<T: DeserializeOwned>(
        &self,
        stage: &'static str,
        prompt: String,
        temperature: f32,
    ) -> Vec<T> {
        let request = CompletionRequest::new(prompt, temperature);
        let content = match self.generator.complete(&request).await {
            Ok(content) => content,
            Err(error) => {
                tracing::warn!(
                    stage,
                    provider = self.generator.provider_name(),
                    %error,
                    "daily: generative call failed"
                );
                return Vec::new();
            }
        };
        tracing::debug!(stage, %content, "daily: raw response");

        extract_records(&content).unwrap_or_else(|| {
            tracing::warn!(stage, "daily: no JSON array in response");
            Vec::new()
        })
    }

    /// Generate, deduplicate, translate, and persist one batch.
    ///
    /// # Errors
    ///
    /// Returns `DailyError::Store` if any storage operation fails, including
    /// a duplicate `content_hash` inserted by a concurrent run. Records
    /// persisted before the failure stay persisted.
    pub async fn generate_daily_batch(&self) -> Result<DailyBatchResponse, DailyError> {
        let batch_size = self.config.batch_size;
        let known = self.db.list_target_texts().await?;

        let candidates = self.request_source_pairs(&known, batch_size).await;
        let candidate_count = candidates.len();

        let mut seen = HashSet::new();
        let mut accepted = Vec::with_capacity(batch_size.min(candidate_count));
        for pair in candidates {
            if accepted.len() == batch_size {
                break;
            }
            let hash = generate_hash_key(&pair.target_text);
            if seen.contains(&hash) || self.db.sentence_hash_exists(&hash).await? {
                tracing::debug!(target_text = %pair.target_text, "daily: skipping known sentence");
                continue;
            }
            seen.insert(hash);
            accepted.push(pair);
        }

        let translations = if accepted.is_empty() {
            Vec::new()
        } else {
            let texts: Vec<String> = accepted.iter().map(|p| p.target_text.clone()).collect();
            self.request_translations(&texts).await
        };

        let mut sentences = Vec::with_capacity(accepted.len());
        for new in merge_translations(&accepted, translations) {
            let stored = self.db.insert_sentence(&new).await?;
            sentences.push(stored.to_trilingual());
        }

        let total = self.db.count_sentences().await?;
        tracing::info!(
            candidates = candidate_count,
            accepted = sentences.len(),
            total,
            "daily: batch generated"
        );

        Ok(DailyBatchResponse::newly_generated(
            Utc::now().date_naive(),
            sentences,
            total,
        ))
    }
}
