//! Localizer
//!
//! Binds a [`LanguageSource`] and optional [`ResolutionStats`] so components
//! can resolve fields without threading the active language by hand.

use crate::{
    DEFAULT_LANGUAGE, LanguageSource, LanguageState, LocalizedRecord, ResolutionSource,
    ResolutionStats, resolve_list, resolve_scalar,
};
use std::sync::Arc;
use tourbook_log::debug;

const LOG_TARGET: &str = "tourbook::i18n";

/// Resolves localized fields in the source's current language.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use tourbook_i18n::{Language, LanguageState, LocalizedRecord, Localizer, ResolutionStats};
///
/// let stats = Arc::new(ResolutionStats::new());
/// let localizer = Localizer::new(LanguageState::new(Language::En)).with_stats(stats.clone());
///
/// let tour = LocalizedRecord::new()
///     .with("title_en", "Old City Walk")
///     .with("features_az", vec!["Bələdçi"]);
///
/// assert_eq!(localizer.text(&tour, "title"), "Old City Walk");
/// assert_eq!(localizer.list(&tour, "features"), ["Bələdçi"]);
/// assert_eq!(localizer.text_or(&tour, "subtitle", "-"), "-");
///
/// assert_eq!(stats.snapshot().terminal(), 1);
///
/// localizer.source().set(Language::Az);
/// assert_eq!(localizer.text(&tour, "title"), "Old City Walk");
/// ```
#[derive(Debug, Clone)]
pub struct Localizer<S = LanguageState> {
    source: S,
    stats: Option<Arc<ResolutionStats>>,
}

impl<S: LanguageSource> Localizer<S> {
    /// Create a localizer reading the active language from `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            stats: None,
        }
    }

    /// Count every resolution in `stats`.
    pub fn with_stats(mut self, stats: Arc<ResolutionStats>) -> Self {
        self.stats = Some(stats);
        self
    }

    /// The language source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The attached statistics, if any.
    pub fn stats(&self) -> Option<&Arc<ResolutionStats>> {
        self.stats.as_ref()
    }

    /// Active language code, or the default language's code when the source
    /// has none.
    pub fn active_code(&self) -> String {
        self.source
            .current_language()
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.code().to_string())
    }

    /// Resolve a text field, empty when nothing matches.
    pub fn text<'a>(&self, record: impl Into<Option<&'a LocalizedRecord>>, field: &str) -> &'a str {
        self.text_or(record, field, "")
    }

    /// Resolve a text field with a caller default.
    pub fn text_or<'a>(
        &self,
        record: impl Into<Option<&'a LocalizedRecord>>,
        field: &str,
        default: &'a str,
    ) -> &'a str {
        let code = self.active_code();
        let resolved = resolve_scalar(record, field, &code, default);
        observe(self.stats.as_deref(), field, &code, resolved.source);
        resolved.value
    }

    /// Resolve a list field.
    pub fn list<'a>(
        &self,
        record: impl Into<Option<&'a LocalizedRecord>>,
        field: &str,
    ) -> &'a [String] {
        let code = self.active_code();
        let resolved = resolve_list(record, field, &code);
        observe(self.stats.as_deref(), field, &code, resolved.source);
        resolved.value
    }

    /// Bind one record to the current language for repeated reads.
    pub fn view<'a>(&'a self, record: impl Into<Option<&'a LocalizedRecord>>) -> LocalizedView<'a> {
        LocalizedView {
            record: record.into(),
            code: self.active_code(),
            stats: self.stats.as_deref(),
        }
    }
}

/// One record viewed in one language.
///
/// The language is read once when the view is created, so every field of a
/// rendered card agrees even if the language switches mid-render.
#[derive(Debug, Clone)]
pub struct LocalizedView<'a> {
    record: Option<&'a LocalizedRecord>,
    code: String,
    stats: Option<&'a ResolutionStats>,
}

impl<'a> LocalizedView<'a> {
    /// Language code this view resolves in.
    pub fn language_code(&self) -> &str {
        &self.code
    }

    /// The underlying record.
    pub fn record(&self) -> Option<&'a LocalizedRecord> {
        self.record
    }

    /// Resolve a text field, empty when nothing matches.
    pub fn text(&self, field: &str) -> &'a str {
        self.text_or(field, "")
    }

    /// Resolve a text field with a caller default.
    pub fn text_or(&self, field: &str, default: &'a str) -> &'a str {
        let resolved = resolve_scalar(self.record, field, &self.code, default);
        observe(self.stats, field, &self.code, resolved.source);
        resolved.value
    }

    /// Resolve a list field.
    pub fn list(&self, field: &str) -> &'a [String] {
        let resolved = resolve_list(self.record, field, &self.code);
        observe(self.stats, field, &self.code, resolved.source);
        resolved.value
    }
}

fn observe(stats: Option<&ResolutionStats>, field: &str, code: &str, source: ResolutionSource) {
    if let Some(stats) = stats {
        stats.record(source);
    }

    if source.is_terminal() {
        debug!(
            target: LOG_TARGET,
            "field {:?} has no localized value for {:?}; resolved via {:?}",
            field,
            code,
            source
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedLanguage, Language, StatsSnapshot};
    use serde_json::json;

    fn tour() -> LocalizedRecord {
        LocalizedRecord::from_json(json!({
            "title_az": "Qobustan",
            "title_ru": "Гобустан",
            "features_en": ["Guide"],
            "price_note": "per person"
        }))
        .unwrap()
    }

    #[test]
    fn test_unavailable_language_uses_default() {
        let localizer = Localizer::new(FixedLanguage::unavailable());
        assert_eq!(localizer.active_code(), "az");
        assert_eq!(localizer.text(&tour(), "title"), "Qobustan");

        let empty = Localizer::new(FixedLanguage::new(""));
        assert_eq!(empty.active_code(), "az");
    }

    #[test]
    fn test_follows_language_switches() {
        let localizer = Localizer::new(LanguageState::new(Language::Ru));
        let record = tour();
        assert_eq!(localizer.text(&record, "title"), "Гобустан");

        localizer.source().set(Language::En);
        assert_eq!(localizer.text(&record, "title"), "Qobustan");
    }

    #[test]
    fn test_stats_count_each_call() {
        let stats = Arc::new(ResolutionStats::new());
        let localizer = Localizer::new(FixedLanguage::from(Language::Az)).with_stats(stats.clone());
        let record = tour();

        localizer.text(&record, "title");
        localizer.list(&record, "features");
        localizer.text(&record, "price_note");
        localizer.text_or(&record, "subtitle", "-");
        localizer.list(None, "features");

        assert_eq!(
            stats.snapshot(),
            StatsSnapshot {
                active_language: 1,
                fallback_language: 1,
                bare_field: 1,
                default: 2,
            }
        );
    }

    #[test]
    fn test_view_pins_language() {
        let localizer = Localizer::new(LanguageState::new(Language::Ru));
        let record = tour();
        let view = localizer.view(&record);

        localizer.source().set(Language::Az);

        assert_eq!(view.language_code(), "ru");
        assert_eq!(view.text("title"), "Гобустан");
        assert_eq!(view.list("features"), ["Guide"]);
        assert_eq!(view.text_or("subtitle", "N/A"), "N/A");
        assert!(view.record().is_some());
    }

    #[test]
    fn test_view_without_record() {
        let localizer = Localizer::new(FixedLanguage::from(Language::En));
        let view = localizer.view(None);
        assert_eq!(view.text("title"), "");
        assert!(view.list("features").is_empty());
    }
}
