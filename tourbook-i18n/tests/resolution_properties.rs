//! Behavioural tests for localized field resolution.
//!
//! These pin down the display contract: which column wins, what counts as
//! empty, and that resolution neither fails nor mutates its input.

use serde_json::json;
use std::sync::Arc;
use tourbook_i18n::*;

fn record(value: serde_json::Value) -> LocalizedRecord {
    LocalizedRecord::from_json(value).unwrap()
}

// =============================================================================
// Scalar fields
// =============================================================================

#[test]
fn test_active_language_priority() {
    let r = record(json!({"title_az": "Salam", "title_en": "Hello"}));
    assert_eq!(resolve_localized_scalar(&r, "title", "en", ""), "Hello");
}

#[test]
fn test_active_language_beats_fallback_position() {
    // tr is last in the fallback order but still wins when active
    let r = record(json!({
        "title_az": "Salam",
        "title_en": "Hello",
        "title_ru": "Привет",
        "title_tr": "Merhaba"
    }));
    assert_eq!(resolve_localized_scalar(&r, "title", "tr", ""), "Merhaba");
}

#[test]
fn test_fallback_order_determinism() {
    let r = record(json!({"title_ru": "Привет"}));
    assert_eq!(resolve_localized_scalar(&r, "title", "tr", ""), "Привет");

    let r = record(json!({"title_tr": "Merhaba", "title_en": "Hello"}));
    let resolved = resolve_scalar(&r, "title", "ru", "");
    assert_eq!(resolved.value, "Hello");
    assert_eq!(resolved.source, ResolutionSource::Fallback(Language::En));
}

#[test]
fn test_terminal_bare_field_fallback() {
    let r = record(json!({"title": "Untitled"}));
    for code in ["az", "en", "ru", "tr", "de", ""] {
        assert_eq!(resolve_localized_scalar(&r, "title", code, "N/A"), "Untitled");
    }
}

#[test]
fn test_default_of_last_resort() {
    let r = LocalizedRecord::new();
    assert_eq!(resolve_localized_scalar(&r, "title", "az", "N/A"), "N/A");
    assert_eq!(resolve_localized_scalar(&r, "title", "az", ""), "");
}

#[test]
fn test_empty_string_is_treated_as_absent() {
    let r = record(json!({"title_az": "", "title_en": "Hi"}));
    assert_eq!(resolve_localized_scalar(&r, "title", "az", ""), "Hi");
}

// =============================================================================
// List fields
// =============================================================================

#[test]
fn test_list_emptiness() {
    let r = record(json!({"features_az": [], "features_en": ["Guide", "Lunch"]}));
    assert_eq!(
        resolve_localized_list(&r, "features", "az"),
        ["Guide", "Lunch"]
    );
}

#[test]
fn test_list_active_language_priority() {
    let r = record(json!({"features_az": ["Bələdçi"], "features_ru": ["Гид"]}));
    assert_eq!(resolve_localized_list(&r, "features", "ru"), ["Гид"]);
}

#[test]
fn test_list_terminal_fallbacks() {
    let r = record(json!({"features": ["Transfer"]}));
    assert_eq!(resolve_localized_list(&r, "features", "en"), ["Transfer"]);

    let r = record(json!({"features_en": []}));
    assert!(resolve_localized_list(&r, "features", "en").is_empty());
}

// =============================================================================
// Totality, idempotence, no mutation
// =============================================================================

#[test]
fn test_totality_over_odd_inputs() {
    let odd = record(json!({
        "title_az": 1,
        "title_en": true,
        "title_ru": {"nested": "x"},
        "title_tr": ["a"],
        "title": null,
        "features_az": "text",
        "features_en": [1, 2],
        "features": {"x": 1}
    }));

    for code in ["az", "en", "ru", "tr", "xx", "", "title"] {
        assert_eq!(resolve_localized_scalar(&odd, "title", code, "?"), "?");
        assert!(resolve_localized_list(&odd, "features", code).is_empty());
        assert_eq!(resolve_localized_scalar(&odd, "", code, ""), "");
        assert_eq!(resolve_localized_scalar(None, "title", code, "?"), "?");
        assert!(resolve_localized_list(None, "features", code).is_empty());
    }
}

#[test]
fn test_idempotence_and_no_mutation() {
    let r = record(json!({
        "title_az": "",
        "title_ru": "Гянджа",
        "features_en": ["Guide"],
        "features": []
    }));
    let before = r.clone();

    let first = resolve_scalar(&r, "title", "tr", "");
    let second = resolve_scalar(&r, "title", "tr", "");
    assert_eq!(first, second);

    let first = resolve_list(&r, "features", "az");
    let second = resolve_list(&r, "features", "az");
    assert_eq!(first, second);
    assert!(std::ptr::eq(first.value, second.value));

    assert_eq!(r, before);
}

// =============================================================================
// Concurrent use
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_resolution_is_consistent() {
    let tour = Arc::new(record(json!({
        "title_en": "Gabala",
        "title_ru": "Габала",
        "features_az": ["Bələdçi", "Nahar"]
    })));
    let stats = Arc::new(ResolutionStats::new());
    let localizer = Arc::new(
        Localizer::new(FixedLanguage::from(Language::Tr)).with_stats(Arc::clone(&stats)),
    );

    let handles: Vec<_> = (0..32)
        .map(|_| {
            let tour = Arc::clone(&tour);
            let localizer = Arc::clone(&localizer);
            tokio::spawn(async move {
                let title = localizer.text(&*tour, "title").to_string();
                let features = localizer.list(&*tour, "features").to_vec();
                (title, features)
            })
        })
        .collect();

    for handle in handles {
        let (title, features) = handle.await.unwrap();
        assert_eq!(title, "Gabala");
        assert_eq!(features, ["Bələdçi", "Nahar"]);
    }

    let snapshot = stats.snapshot();
    assert_eq!(snapshot.fallback_language, 64);
    assert_eq!(snapshot.terminal(), 0);
}
