//! Accept-Language negotiation
//!
//! Picks a visitor's initial language from the browser's `Accept-Language`
//! header before they touch the language switcher.

use crate::Language;
use std::cmp::Ordering;

/// Parse an `Accept-Language` header into tags ordered by quality.
///
/// Entries with equal quality keep their header order. The `*` wildcard and
/// entries with `q=0` are dropped. Tags are returned as written.
///
/// # Example
///
/// ```
/// use tourbook_i18n::parse_accept_language;
///
/// let tags = parse_accept_language("ru-RU,en;q=0.8,az;q=0.9,*;q=0.1");
/// assert_eq!(tags, ["ru-RU", "az", "en"]);
/// ```
pub fn parse_accept_language(header: &str) -> Vec<String> {
    let mut entries: Vec<(&str, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut split = part.trim().splitn(2, ';');
            let tag = split.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }

            let quality = split
                .next()
                .and_then(|q| q.trim().strip_prefix("q="))
                .and_then(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);

            (quality > 0.0).then_some((tag, quality))
        })
        .collect();

    // Stable sort keeps header order for ties
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    entries.into_iter().map(|(tag, _)| tag.to_string()).collect()
}

/// Choose the best supported language for an `Accept-Language` header.
///
/// Returns the first preferred tag whose primary subtag is supported, or
/// `default` when none is.
///
/// # Example
///
/// ```
/// use tourbook_i18n::{Language, negotiate_language};
///
/// assert_eq!(negotiate_language("de-DE,tr;q=0.7,en;q=0.5", Language::Az), Language::Tr);
/// assert_eq!(negotiate_language("fr,de", Language::Az), Language::Az);
/// ```
pub fn negotiate_language(header: &str, default: Language) -> Language {
    parse_accept_language(header)
        .iter()
        .find_map(|tag| Language::parse_tag(tag))
        .unwrap_or(default)
}
