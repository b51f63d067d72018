//! Localized Field Resolution
//!
//! Picks the value to display for a logical field (`title`, `features`) on a
//! record that stores one column per language (`title_az`, `title_en`, ...).
//!
//! Resolution order:
//! 1. `<field>_<active>` for the active language
//! 2. `<field>_<lang>` for each language in [`FALLBACK_ORDER`]
//! 3. the bare `<field>` column
//! 4. the caller default (empty for lists)
//!
//! Resolution is total. Missing records, missing columns, values of the
//! wrong shape and unknown language codes all fall through to the next step.

use crate::{DEFAULT_LANGUAGE, FALLBACK_ORDER, FieldValue, Language, LocalizedRecord};

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionSource {
    /// The active language's column
    ActiveLanguage,
    /// A column found while walking the fallback order
    Fallback(Language),
    /// The unsuffixed column
    BareField,
    /// Nothing matched; the caller default was used
    Default,
}

impl ResolutionSource {
    /// Whether no per-language column supplied the value.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ResolutionSource::BareField | ResolutionSource::Default)
    }
}

/// A resolved value together with its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<T> {
    /// Value to display
    pub value: T,
    /// Column the value was taken from
    pub source: ResolutionSource,
}

impl<T> Resolved<T> {
    fn new(value: T, source: ResolutionSource) -> Self {
        Self { value, source }
    }
}

/// Column name for `field` in the language with code `code`.
///
/// ```
/// assert_eq!(tourbook_i18n::localized_key("title", "ru"), "title_ru");
/// ```
pub fn localized_key(field: &str, code: &str) -> String {
    format!("{}_{}", field, code)
}

/// Active language code, with an empty code meaning "not available".
fn effective_code(active: &str) -> &str {
    if active.is_empty() {
        DEFAULT_LANGUAGE.code()
    } else {
        active
    }
}

/// Walk the active language, then the fallback order, returning the first
/// column accepted by `pick`.
fn find_localized<'a, T: ?Sized>(
    record: &'a LocalizedRecord,
    field: &str,
    active: &str,
    pick: impl Fn(&'a FieldValue) -> Option<&'a T>,
) -> Option<Resolved<&'a T>> {
    let lookup = |code: &str| record.get(&localized_key(field, code)).and_then(&pick);

    if let Some(value) = lookup(effective_code(active)) {
        return Some(Resolved::new(value, ResolutionSource::ActiveLanguage));
    }

    FALLBACK_ORDER.into_iter().find_map(|lang| {
        lookup(lang.code()).map(|value| Resolved::new(value, ResolutionSource::Fallback(lang)))
    })
}

/// Resolve a text field, reporting where the value came from.
///
/// `active` is the active language code; an empty code means the active
/// language is unavailable and [`DEFAULT_LANGUAGE`] is used. Codes outside
/// the supported set are still tried literally before the fallback order.
pub fn resolve_scalar<'a>(
    record: impl Into<Option<&'a LocalizedRecord>>,
    field: &str,
    active: &str,
    default: &'a str,
) -> Resolved<&'a str> {
    let Some(record) = record.into() else {
        return Resolved::new(default, ResolutionSource::Default);
    };

    if let Some(found) = find_localized(record, field, active, FieldValue::non_empty_text) {
        return found;
    }

    match record.text(field) {
        Some(bare) => Resolved::new(bare, ResolutionSource::BareField),
        None => Resolved::new(default, ResolutionSource::Default),
    }
}

/// Resolve a list field, reporting where the value came from.
///
/// Per-language columns only count when they hold a non-empty list. The bare
/// column is returned whenever present: a list as stored (even if empty), a
/// non-empty string as a one-element list.
pub fn resolve_list<'a>(
    record: impl Into<Option<&'a LocalizedRecord>>,
    field: &str,
    active: &str,
) -> Resolved<&'a [String]> {
    let Some(record) = record.into() else {
        return Resolved::new(&[] as &[String], ResolutionSource::Default);
    };

    if let Some(found) = find_localized(record, field, active, FieldValue::non_empty_list) {
        return found;
    }

    match record.get(field) {
        Some(FieldValue::List(items)) => Resolved::new(items.as_slice(), ResolutionSource::BareField),
        Some(FieldValue::Text(text)) if !text.is_empty() => {
            Resolved::new(std::slice::from_ref(text), ResolutionSource::BareField)
        }
        _ => Resolved::new(&[] as &[String], ResolutionSource::Default),
    }
}

/// Resolve a text field for display.
///
/// # Examples
///
/// ```
/// use tourbook_i18n::{LocalizedRecord, resolve_localized_scalar};
///
/// let tour = LocalizedRecord::new()
///     .with("title_ru", "Привет")
///     .with("title", "Untitled");
///
/// assert_eq!(resolve_localized_scalar(&tour, "title", "tr", ""), "Привет");
/// assert_eq!(resolve_localized_scalar(&tour, "summary", "tr", "N/A"), "N/A");
/// assert_eq!(resolve_localized_scalar(None, "title", "en", "N/A"), "N/A");
/// ```
pub fn resolve_localized_scalar<'a>(
    record: impl Into<Option<&'a LocalizedRecord>>,
    field: &str,
    active: &str,
    default: &'a str,
) -> &'a str {
    resolve_scalar(record, field, active, default).value
}

/// Resolve a list field for display.
///
/// # Examples
///
/// ```
/// use tourbook_i18n::{LocalizedRecord, resolve_localized_list};
///
/// let tour = LocalizedRecord::new()
///     .with("features_az", Vec::<String>::new())
///     .with("features_en", vec!["Guide", "Lunch"]);
///
/// assert_eq!(resolve_localized_list(&tour, "features", "az"), ["Guide", "Lunch"]);
/// assert!(resolve_localized_list(&tour, "includes", "az").is_empty());
/// ```
pub fn resolve_localized_list<'a>(
    record: impl Into<Option<&'a LocalizedRecord>>,
    field: &str,
    active: &str,
) -> &'a [String] {
    resolve_list(record, field, active).value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> LocalizedRecord {
        LocalizedRecord::from_json(value).unwrap()
    }

    #[test]
    fn test_active_language_wins() {
        let r = record(json!({"title_az": "Salam", "title_en": "Hello"}));
        let resolved = resolve_scalar(&r, "title", "en", "");
        assert_eq!(resolved.value, "Hello");
        assert_eq!(resolved.source, ResolutionSource::ActiveLanguage);
    }

    #[test]
    fn test_fallback_order_first_hit() {
        let r = record(json!({"title_ru": "Привет", "title_tr": "Merhaba"}));
        let resolved = resolve_scalar(&r, "title", "en", "");
        assert_eq!(resolved.value, "Привет");
        assert_eq!(resolved.source, ResolutionSource::Fallback(Language::Ru));
    }

    #[test]
    fn test_empty_active_code_means_default_language() {
        let r = record(json!({"title_az": "Salam", "title_en": "Hello"}));
        let resolved = resolve_scalar(&r, "title", "", "");
        assert_eq!(resolved.value, "Salam");
        assert_eq!(resolved.source, ResolutionSource::ActiveLanguage);
    }

    #[test]
    fn test_unknown_code_is_tried_literally_then_falls_back() {
        let r = record(json!({"title_de": "Hallo", "title_en": "Hello"}));
        assert_eq!(resolve_localized_scalar(&r, "title", "de", ""), "Hallo");
        assert_eq!(resolve_localized_scalar(&r, "title", "fr", ""), "Hello");
    }

    #[test]
    fn test_wrong_shapes_count_as_absent() {
        let r = record(json!({
            "title_az": ["not", "text"],
            "title_en": 42,
            "title_ru": null,
            "title_tr": "Merhaba"
        }));
        let resolved = resolve_scalar(&r, "title", "az", "");
        assert_eq!(resolved.value, "Merhaba");
        assert_eq!(resolved.source, ResolutionSource::Fallback(Language::Tr));

        let lists = record(json!({"features_az": "Guide", "features_en": {"a": 1}}));
        let resolved = resolve_list(&lists, "features", "az");
        assert!(resolved.value.is_empty());
        assert_eq!(resolved.source, ResolutionSource::Default);
    }

    #[test]
    fn test_bare_field_then_default() {
        let r = record(json!({"title": "Untitled", "title_az": ""}));
        let resolved = resolve_scalar(&r, "title", "ru", "N/A");
        assert_eq!(resolved.value, "Untitled");
        assert_eq!(resolved.source, ResolutionSource::BareField);
        assert!(resolved.source.is_terminal());

        let empty = LocalizedRecord::new().with("title", "");
        let resolved = resolve_scalar(&empty, "title", "ru", "N/A");
        assert_eq!(resolved.value, "N/A");
        assert_eq!(resolved.source, ResolutionSource::Default);
    }

    #[test]
    fn test_missing_record_yields_defaults() {
        assert_eq!(resolve_scalar(None, "title", "az", "N/A").value, "N/A");
        let resolved = resolve_list(None, "features", "az");
        assert!(resolved.value.is_empty());
        assert_eq!(resolved.source, ResolutionSource::Default);
    }

    #[test]
    fn test_list_skips_empty_lists() {
        let r = record(json!({"features_az": [], "features_en": ["Guide", "Lunch"]}));
        let resolved = resolve_list(&r, "features", "az");
        assert_eq!(resolved.value, ["Guide", "Lunch"]);
        assert_eq!(resolved.source, ResolutionSource::Fallback(Language::En));
    }

    #[test]
    fn test_list_bare_field_variants() {
        let r = record(json!({"features": []}));
        let resolved = resolve_list(&r, "features", "en");
        assert!(resolved.value.is_empty());
        assert_eq!(resolved.source, ResolutionSource::BareField);

        let r = record(json!({"features": "Transfer included"}));
        assert_eq!(
            resolve_localized_list(&r, "features", "en"),
            ["Transfer included"]
        );

        let r = record(json!({"features": ""}));
        assert_eq!(
            resolve_list(&r, "features", "en").source,
            ResolutionSource::Default
        );
    }

    #[test]
    fn test_list_returns_stored_slice() {
        let r = record(json!({"features_ru": ["Гид"]}));
        let resolved = resolve_localized_list(&r, "features", "ru");
        let stored = r.list("features_ru").unwrap();
        assert!(std::ptr::eq(resolved, stored));
    }

    #[test]
    fn test_localized_key() {
        assert_eq!(localized_key("features", "az"), "features_az");
    }
}
