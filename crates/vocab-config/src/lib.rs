//! # vocab-config
//!
//! Layered configuration loading for vocab-mate using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VOCAB_*` prefix, `__` as separator)
//! 2. The bare `OPENAI_API_KEY` variable (mapped to `openai.api_key`)
//! 3. Project-level `./vocab-mate.toml`
//! 4. User-level `~/.config/vocab-mate/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VOCAB_OPENAI__MODEL` -> `openai.model`,
//! `VOCAB_GENERATOR__BATCH_SIZE` -> `generator.batch_size`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use vocab_config::VocabConfig;
//!
//! let config = VocabConfig::load_with_dotenv().expect("config");
//! if config.openai.is_configured() {
//!     println!("model: {}", config.openai.model);
//! }
//! ```

mod database;
mod error;
mod generator;
mod openai;
mod server;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use generator::GeneratorConfig;
pub use openai::OpenAiConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file name, resolved against the working directory.
pub const LOCAL_CONFIG_FILE: &str = "vocab-mate.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VocabConfig {
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl VocabConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.generator.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
            .merge(
                Env::raw()
                    .only(&["OPENAI_API_KEY"])
                    .map(|_| "openai.api_key".into()),
            )
            .merge(Env::prefixed("VOCAB_").split("__"))
    }

    /// Fail fast when the generative service cannot be reached.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingSetting` if no OpenAI API key is set.
    pub fn require_openai(&self) -> Result<&OpenAiConfig, ConfigError> {
        if self.openai.is_configured() {
            Ok(&self.openai)
        } else {
            Err(ConfigError::MissingSetting {
                section: "openai",
                field: "api_key",
                hint: "export OPENAI_API_KEY or set it in vocab-mate.toml",
            })
        }
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vocab-mate").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_loads() {
        let config = VocabConfig::default();
        assert!(!config.openai.is_configured());
        assert_eq!(config.database.path, "vocab_mate.db");
        assert_eq!(config.generator.batch_size, 20);
        assert_eq!(config.server.bind, "127.0.0.1:8000");
    }

    #[test]
    fn require_openai_fails_without_key() {
        let config = VocabConfig::default();
        let err = config.require_openai().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingSetting {
                section: "openai",
                field: "api_key",
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "openai.api_key is not set (export OPENAI_API_KEY or set it in vocab-mate.toml)"
        );
    }

    #[test]
    fn bare_openai_key_is_picked_up() {
        Jail::expect_with(|jail| {
            jail.set_env("OPENAI_API_KEY", "sk-from-env");
            let config: VocabConfig = VocabConfig::figment().extract()?;
            assert_eq!(config.openai.api_key, "sk-from-env");
            Ok(())
        });
    }

    #[test]
    fn prefixed_env_overrides_bare_key() {
        Jail::expect_with(|jail| {
            jail.set_env("OPENAI_API_KEY", "sk-bare");
            jail.set_env("VOCAB_OPENAI__API_KEY", "sk-prefixed");
            let config: VocabConfig = VocabConfig::figment().extract()?;
            assert_eq!(config.openai.api_key, "sk-prefixed");
            Ok(())
        });
    }

    #[test]
    fn nested_env_sections_map() {
        Jail::expect_with(|jail| {
            jail.set_env("VOCAB_GENERATOR__BATCH_SIZE", "5");
            jail.set_env("VOCAB_GENERATOR__AUX_LANGUAGE", "French");
            jail.set_env("VOCAB_DATABASE__PATH", ":memory:");
            let config: VocabConfig = VocabConfig::figment().extract()?;
            assert_eq!(config.generator.batch_size, 5);
            assert_eq!(config.generator.aux_language, "French");
            assert!(config.database.is_in_memory());
            Ok(())
        });
    }

    #[test]
    fn local_toml_is_layered_under_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                LOCAL_CONFIG_FILE,
                r#"
                [openai]
                model = "gpt-4o"

                [server]
                bind = "0.0.0.0:9000"
                "#,
            )?;
            jail.set_env("VOCAB_SERVER__BIND", "127.0.0.1:9100");
            let config: VocabConfig = VocabConfig::figment().extract()?;
            assert_eq!(config.openai.model, "gpt-4o");
            assert_eq!(config.server.bind, "127.0.0.1:9100");
            Ok(())
        });
    }

    #[test]
    fn from_figment_rejects_zero_batch_size() {
        let figment = Figment::from(Serialized::defaults(VocabConfig::default()))
            .merge(Serialized::default("generator.batch_size", 0));
        let err = VocabConfig::from_figment(&figment).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "generator.batch_size",
                ..
            }
        ));
        assert_eq!(err.to_string(), "invalid generator.batch_size: must be at least 1");
    }

    #[test]
    fn malformed_local_file_is_an_extract_error() {
        Jail::expect_with(|jail| {
            jail.create_file(LOCAL_CONFIG_FILE, "[generator]\nbatch_size = \"many\"\n")?;
            let err = VocabConfig::from_figment(&VocabConfig::figment()).unwrap_err();
            assert!(matches!(err, ConfigError::Extract(_)));
            assert!(err.to_string().starts_with("could not read vocab-mate settings"));
            Ok(())
        });
    }
}
