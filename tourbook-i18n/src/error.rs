//! Error types for i18n operations
//!
//! Field resolution itself never fails; these errors only come from the
//! edges that parse outside input (language codes, record JSON, settings).

use thiserror::Error;

/// Errors that can occur while preparing localized content.
#[derive(Debug, Error)]
pub enum I18nError {
    /// Language code outside the supported set
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Record payload was valid JSON but not an object
    #[error("Invalid record: expected a JSON object, found {0}")]
    InvalidRecord(String),

    /// JSON parse error
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Settings could not be loaded
    #[cfg(feature = "config")]
    #[error("Configuration error: {0}")]
    Config(#[from] tourbook_config::ConfigError),
}
