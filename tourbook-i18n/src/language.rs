//! Supported Languages
//!
//! The site publishes content in exactly four languages. Records store one
//! column per language, suffixed with the language code.

use crate::{I18nError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported content language.
///
/// # Examples
///
/// ```
/// use tourbook_i18n::Language;
///
/// assert_eq!("ru".parse::<Language>().unwrap(), Language::Ru);
/// assert_eq!(Language::parse_tag("en-US"), Some(Language::En));
/// assert_eq!(Language::Tr.code(), "tr");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Azerbaijani
    Az,
    /// English
    En,
    /// Russian
    Ru,
    /// Turkish
    Tr,
}

/// Language used when no active language is available.
pub const DEFAULT_LANGUAGE: Language = Language::Az;

/// Order in which languages are tried when the active one has no value.
///
/// Constant and independent of the active language.
pub const FALLBACK_ORDER: [Language; 4] = [Language::Az, Language::En, Language::Ru, Language::Tr];

impl Language {
    /// Every supported language.
    pub const ALL: [Language; 4] = [Language::Az, Language::En, Language::Ru, Language::Tr];

    /// Two-letter code used as the column suffix.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Az => "az",
            Language::En => "en",
            Language::Ru => "ru",
            Language::Tr => "tr",
        }
    }

    /// Language name written in that language, for language switchers.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Az => "Azərbaycan",
            Language::En => "English",
            Language::Ru => "Русский",
            Language::Tr => "Türkçe",
        }
    }

    /// Look up a language by its exact code, ignoring case and whitespace.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// Look up a language from a BCP 47 style tag (`en-US`, `ru_RU`, `AZ`).
    ///
    /// Only the primary subtag is considered.
    pub fn parse_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?;
        Self::from_code(primary)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        Language::parse_tag(s).ok_or_else(|| I18nError::UnsupportedLanguage(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Language::from_code(&code).ok_or_else(|| {
            serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(&code),
                &"one of \"az\", \"en\", \"ru\", \"tr\"",
            )
        })
    }
}

impl Default for Language {
    fn default() -> Self {
        DEFAULT_LANGUAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn test_from_code_is_case_insensitive() {
        assert_eq!(Language::from_code("EN"), Some(Language::En));
        assert_eq!(Language::from_code(" tr "), Some(Language::Tr));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_parse_tag_uses_primary_subtag() {
        assert_eq!(Language::parse_tag("ru-RU"), Some(Language::Ru));
        assert_eq!(Language::parse_tag("az_Latn_AZ"), Some(Language::Az));
        assert_eq!(Language::parse_tag("fr-FR"), None);
        assert_eq!(Language::parse_tag("-"), None);
    }

    #[test]
    fn test_from_str_rejects_unsupported() {
        assert_eq!("tr".parse::<Language>().unwrap(), Language::Tr);

        let err = "de".parse::<Language>().unwrap_err();
        assert!(matches!(err, I18nError::UnsupportedLanguage(ref code) if code == "de"));
    }

    #[test]
    fn test_fallback_order_is_fixed() {
        assert_eq!(
            FALLBACK_ORDER,
            [Language::Az, Language::En, Language::Ru, Language::Tr]
        );
        assert_eq!(DEFAULT_LANGUAGE, Language::Az);
        assert_eq!(Language::default(), Language::Az);
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_string(&Language::Ru).unwrap(), "\"ru\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
        let lang: Language = serde_json::from_str("\"TR\"").unwrap();
        assert_eq!(lang, Language::Tr);
        assert!(serde_json::from_str::<Language>("\"de\"").is_err());
        assert!(serde_json::from_str::<Language>("\"en-US\"").is_err());
    }
}
