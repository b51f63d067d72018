//! Localization settings

use crate::{Language, LanguageState, Localizer, ResolutionStats, negotiate_language};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Site-wide localization settings.
///
/// Deserializes from a flat table; missing keys take their defaults and
/// unrelated keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nSettings {
    /// Language shown before the visitor picks one
    pub default_language: Language,
    /// Attach [`ResolutionStats`] to localizers built from these settings
    pub collect_stats: bool,
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            collect_stats: false,
        }
    }
}

impl I18nSettings {
    /// Language state starting at the default language.
    pub fn language_state(&self) -> LanguageState {
        LanguageState::new(self.default_language)
    }

    /// Localizer starting at the default language.
    pub fn localizer(&self) -> Localizer<LanguageState> {
        self.localizer_starting_at(self.default_language)
    }

    /// Localizer starting at the best match for an `Accept-Language` header.
    pub fn localizer_for_request(&self, accept_language: &str) -> Localizer<LanguageState> {
        self.localizer_starting_at(negotiate_language(accept_language, self.default_language))
    }

    fn localizer_starting_at(&self, initial: Language) -> Localizer<LanguageState> {
        let localizer = Localizer::new(LanguageState::new(initial));
        if self.collect_stats {
            localizer.with_stats(Arc::new(ResolutionStats::new()))
        } else {
            localizer
        }
    }
}

#[cfg(feature = "config")]
impl I18nSettings {
    /// Read settings from a configuration table.
    ///
    /// ```
    /// use tourbook_config::ConfigManager;
    /// use tourbook_i18n::{I18nSettings, Language};
    ///
    /// let config = ConfigManager::for_site();
    /// config.load_env_from([("TOURBOOK_DEFAULT_LANGUAGE", "EN")]);
    ///
    /// let settings = I18nSettings::from_config(&config).unwrap();
    /// assert_eq!(settings.default_language, Language::En);
    /// ```
    pub fn from_config(config: &tourbook_config::ConfigManager) -> crate::Result<Self> {
        Ok(config.extract()?)
    }
}
