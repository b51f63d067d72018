//! Active language state
//!
//! Resolution takes the active language as an explicit argument. This module
//! holds the piece of UI state that supplies it.

use crate::{DEFAULT_LANGUAGE, Language};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tourbook_log::debug;

/// Supplies the caller's current display language.
pub trait LanguageSource: Send + Sync {
    /// Current language code, or `None` when no language is known.
    ///
    /// Codes outside the supported set are allowed; resolution falls
    /// through to the fallback order for them.
    fn current_language(&self) -> Option<String>;
}

impl<T: LanguageSource + ?Sized> LanguageSource for Arc<T> {
    fn current_language(&self) -> Option<String> {
        (**self).current_language()
    }
}

impl<T: LanguageSource + ?Sized> LanguageSource for &T {
    fn current_language(&self) -> Option<String> {
        (**self).current_language()
    }
}

/// A source pinned to one raw code.
///
/// Useful for server-side rendering of a single request and for tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedLanguage(Option<String>);

impl FixedLanguage {
    /// Pin to `code`.
    pub fn new(code: impl Into<String>) -> Self {
        Self(Some(code.into()))
    }

    /// A source that never knows the language.
    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl From<Language> for FixedLanguage {
    fn from(lang: Language) -> Self {
        Self::new(lang.code())
    }
}

impl LanguageSource for FixedLanguage {
    fn current_language(&self) -> Option<String> {
        self.0.clone()
    }
}

type ChangeCallback = Box<dyn Fn(Language) + Send + Sync>;

/// Shared, switchable language state.
///
/// The language switcher writes it; every render reads it.
///
/// # Examples
///
/// ```
/// use tourbook_i18n::{Language, LanguageState};
///
/// let state = LanguageState::default();
/// assert_eq!(state.current(), Language::Az);
///
/// assert!(state.set_code("ru-RU"));
/// assert_eq!(state.current(), Language::Ru);
///
/// // Unknown codes leave the state untouched.
/// assert!(!state.set_code("de"));
/// assert_eq!(state.current(), Language::Ru);
/// ```
pub struct LanguageState {
    current: RwLock<Language>,
    on_change: RwLock<Option<ChangeCallback>>,
}

impl LanguageState {
    /// Create state starting at `initial`.
    pub fn new(initial: Language) -> Self {
        Self {
            current: RwLock::new(initial),
            on_change: RwLock::new(None),
        }
    }

    /// Current language.
    pub fn current(&self) -> Language {
        *self.current.read()
    }

    /// Switch language. Returns `true` if the language changed.
    ///
    /// The change callback runs only when the language actually changes.
    pub fn set(&self, lang: Language) -> bool {
        {
            let mut current = self.current.write();
            if *current == lang {
                return false;
            }
            debug!("LanguageState::set: {} -> {}", *current, lang);
            *current = lang;
        }

        if let Some(callback) = self.on_change.read().as_ref() {
            callback(lang);
        }
        true
    }

    /// Switch language from a raw code or tag.
    ///
    /// Unsupported codes are ignored and return `false`.
    pub fn set_code(&self, code: &str) -> bool {
        match Language::parse_tag(code) {
            Some(lang) => self.set(lang),
            None => {
                debug!("LanguageState::set_code: ignoring unsupported code {:?}", code);
                false
            }
        }
    }

    /// Register the callback fired after each language change, replacing
    /// any previous one.
    ///
    /// A UI typically passes its "re-render" trigger here. The callback must
    /// not call `on_change` itself; doing so blocks.
    pub fn on_change(&self, callback: impl Fn(Language) + Send + Sync + 'static) {
        *self.on_change.write() = Some(Box::new(callback));
    }
}

impl Default for LanguageState {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl fmt::Debug for LanguageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageState")
            .field("current", &self.current())
            .finish_non_exhaustive()
    }
}

impl LanguageSource for LanguageState {
    fn current_language(&self) -> Option<String> {
        Some(self.current().code().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_set_reports_change() {
        let state = LanguageState::new(Language::En);
        assert!(!state.set(Language::En));
        assert!(state.set(Language::Tr));
        assert_eq!(state.current(), Language::Tr);
        assert_eq!(state.current_language().as_deref(), Some("tr"));
    }

    #[test]
    fn test_callback_fires_only_on_change() {
        let state = LanguageState::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        state.on_change(move |lang| {
            assert_eq!(lang, Language::En);
            seen.fetch_add(1, Ordering::SeqCst);
        });

        state.set(Language::Az);
        state.set(Language::En);
        state.set_code("EN");
        state.set_code("xx");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_callback_may_read_state() {
        let state = Arc::new(LanguageState::default());
        let observed = Arc::new(RwLock::new(None));

        let reader = Arc::clone(&state);
        let sink = Arc::clone(&observed);
        state.on_change(move |_| {
            *sink.write() = Some(reader.current());
        });

        state.set(Language::Ru);
        assert_eq!(*observed.read(), Some(Language::Ru));
    }

    #[test]
    fn test_fixed_language() {
        assert_eq!(FixedLanguage::new("de").current_language().as_deref(), Some("de"));
        assert_eq!(FixedLanguage::from(Language::Ru).current_language().as_deref(), Some("ru"));
        assert_eq!(FixedLanguage::unavailable().current_language(), None);
    }

    #[test]
    fn test_shared_sources() {
        let state = Arc::new(LanguageState::new(Language::Tr));
        let shared: Arc<dyn LanguageSource> = state.clone();
        assert_eq!(shared.current_language().as_deref(), Some("tr"));
        assert_eq!((&*state).current_language().as_deref(), Some("tr"));
    }
}
