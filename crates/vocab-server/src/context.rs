use std::sync::Arc;

use anyhow::Context;
use vocab_config::VocabConfig;
use vocab_daily::DailySentenceGenerator;
use vocab_db::VocabDb;
use vocab_llm::{OpenAiProvider, TextGenerator};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: VocabConfig,
    pub daily: Arc<DailySentenceGenerator>,
}

impl AppContext {
    /// Open the store and build the OpenAI-backed pipeline.
    pub async fn init(config: VocabConfig) -> anyhow::Result<Self> {
        let openai = OpenAiProvider::from_config(config.require_openai()?)
            .context("failed to build OpenAI client")?;

        let db = VocabDb::open_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;

        tracing::debug!(
            provider = openai.provider_name(),
            model = openai.model(),
            db = %config.database.path,
            "initialized application context"
        );

        let provider: Arc<dyn TextGenerator> = Arc::new(openai);
        let daily = DailySentenceGenerator::new(Arc::new(db), provider, config.generator.clone());
        Ok(Self {
            config,
            daily: Arc::new(daily),
        })
    }
}
