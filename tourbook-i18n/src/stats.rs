//! Resolution statistics
//!
//! Counts how often each resolution step supplied the displayed value, so
//! incomplete translations can be monitored without affecting rendering.

use crate::ResolutionSource;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters, one per [`ResolutionSource`] kind.
#[derive(Debug, Default)]
pub struct ResolutionStats {
    active_language: AtomicU64,
    fallback_language: AtomicU64,
    bare_field: AtomicU64,
    default: AtomicU64,
}

impl ResolutionStats {
    /// Create zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one resolution.
    pub fn record(&self, source: ResolutionSource) {
        let counter = match source {
            ResolutionSource::ActiveLanguage => &self.active_language,
            ResolutionSource::Fallback(_) => &self.fallback_language,
            ResolutionSource::BareField => &self.bare_field,
            ResolutionSource::Default => &self.default,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Current counter values.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            active_language: self.active_language.load(Ordering::Relaxed),
            fallback_language: self.fallback_language.load(Ordering::Relaxed),
            bare_field: self.bare_field.load(Ordering::Relaxed),
            default: self.default.load(Ordering::Relaxed),
        }
    }

    /// Zero all counters.
    pub fn reset(&self) {
        for counter in [
            &self.active_language,
            &self.fallback_language,
            &self.bare_field,
            &self.default,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

/// Point-in-time copy of [`ResolutionStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub active_language: u64,
    pub fallback_language: u64,
    pub bare_field: u64,
    pub default: u64,
}

impl StatsSnapshot {
    /// Total resolutions counted.
    pub fn total(&self) -> u64 {
        self.active_language + self.fallback_language + self.bare_field + self.default
    }

    /// Resolutions that no per-language column could serve.
    pub fn terminal(&self) -> u64 {
        self.bare_field + self.default
    }
}
