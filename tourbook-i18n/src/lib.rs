//! Localized Content Resolution for Tourbook
//!
//! Content rows (tours, page blocks, footer settings) store one column per
//! language: `title_az`, `title_en`, `title_ru`, `title_tr`. This crate picks
//! the value to show for the visitor's language:
//!
//! - **Field Resolution**: active language first, then the fixed fallback
//!   order `az, en, ru, tr`, then the bare column, then a default
//! - **List Fields**: the same chain, where only non-empty lists count
//! - **Language State**: the switchable current language a UI reads from
//! - **Negotiation**: initial language from an `Accept-Language` header
//! - **Statistics**: counts of how each field was resolved
//!
//! Resolution never fails. Missing data renders as the default instead of
//! an error.
//!
//! # Quick Start
//!
//! ```rust
//! use tourbook_i18n::{resolve_localized_list, resolve_localized_scalar, LocalizedRecord};
//!
//! let tour = LocalizedRecord::from_json_str(r#"{
//!     "title_az": "",
//!     "title_en": "Caspian Coast",
//!     "features_ru": ["Гид", "Обед"]
//! }"#).unwrap();
//!
//! assert_eq!(resolve_localized_scalar(&tour, "title", "az", ""), "Caspian Coast");
//! assert_eq!(resolve_localized_list(&tour, "features", "tr"), ["Гид", "Обед"]);
//! ```
//!
//! # With a Language Switcher
//!
//! ```rust
//! use tourbook_i18n::{I18nSettings, Language, LocalizedRecord};
//!
//! let localizer = I18nSettings::default().localizer_for_request("ru-RU,ru;q=0.9");
//! let tour = LocalizedRecord::new()
//!     .with("title_ru", "Шеки")
//!     .with("title_en", "Sheki");
//!
//! assert_eq!(localizer.text(&tour, "title"), "Шеки");
//!
//! localizer.source().set(Language::En);
//! assert_eq!(localizer.view(&tour).text("title"), "Sheki");
//! ```

mod error;
mod language;
mod localizer;
mod negotiate;
mod record;
mod resolve;
mod settings;
mod state;
mod stats;

pub use error::I18nError;
pub use language::{DEFAULT_LANGUAGE, FALLBACK_ORDER, Language};
pub use localizer::{LocalizedView, Localizer};
pub use negotiate::{negotiate_language, parse_accept_language};
pub use record::{FieldValue, LocalizedRecord};
pub use resolve::{
    ResolutionSource, Resolved, localized_key, resolve_list, resolve_localized_list,
    resolve_localized_scalar, resolve_scalar,
};
pub use settings::I18nSettings;
pub use state::{FixedLanguage, LanguageSource, LanguageState};
pub use stats::{ResolutionStats, StatsSnapshot};

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        FieldValue, I18nError, I18nSettings, Language, LanguageSource, LanguageState,
        LocalizedRecord, LocalizedView, Localizer, Result, resolve_localized_list,
        resolve_localized_scalar,
    };
}
