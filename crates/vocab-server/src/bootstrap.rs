use anyhow::Context;
use vocab_config::VocabConfig;

/// Load `.env`, then the layered configuration.
pub fn load_config() -> anyhow::Result<VocabConfig> {
    let config = VocabConfig::load_with_dotenv().context("failed to load vocab-mate configuration")?;

    if config.database.is_in_memory() {
        tracing::warn!("database.path is :memory:; generated sentences are lost on exit");
    }
    if !config.openai.is_configured() {
        tracing::warn!("OPENAI_API_KEY is not set; sentence generation is unavailable");
    }

    Ok(config)
}
