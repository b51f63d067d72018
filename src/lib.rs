// Tourbook - content localization core for a multilingual tour booking site
//
// Re-exports the resolution crate at the top level and the logging and
// configuration crates as modules.

pub use tourbook_i18n::*;

pub use tourbook_log;

#[cfg(feature = "config")]
pub use tourbook_config;

/// Load localization settings for the site.
///
/// Reads an optional `.env` file, then `TOURBOOK_*` environment variables.
/// Missing settings take their defaults.
#[cfg(feature = "config")]
pub fn load_settings() -> Result<I18nSettings> {
    load_settings_from(None)
}

/// Load localization settings using the given `.env` file.
///
/// Environment variables still override the file.
#[cfg(feature = "config")]
pub fn load_settings_from(dotenv: Option<&str>) -> Result<I18nSettings> {
    let config = tourbook_config::ConfigManager::for_site();
    config.load_dotenv(dotenv)?;
    let settings = I18nSettings::from_config(&config)?;
    tourbook_log::debug!(
        "default language {}, stats {}",
        settings.default_language,
        if settings.collect_stats { "on" } else { "off" }
    );
    Ok(settings)
}

// Prelude for common imports
pub mod prelude {
    pub use tourbook_i18n::prelude::*;
    pub use tourbook_i18n::{ResolutionStats, StatsSnapshot, negotiate_language};

    #[cfg(feature = "config")]
    pub use crate::{load_settings, load_settings_from};
    #[cfg(feature = "config")]
    pub use tourbook_config::ConfigManager;
}
