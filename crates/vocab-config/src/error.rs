//! Errors raised while loading or checking vocab-mate settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `VOCAB_*` variable could not be read into the settings.
    #[error("could not read vocab-mate settings: {0}")]
    Extract(#[from] figment::Error),

    /// A setting the requested operation needs is empty.
    #[error("{section}.{field} is not set ({hint})")]
    MissingSetting {
        section: &'static str,
        field: &'static str,
        hint: &'static str,
    },

    /// A setting is present but unusable.
    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
