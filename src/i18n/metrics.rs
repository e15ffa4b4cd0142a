//! Locale resolution metrics.
//!
//! Counts how often raw locale tokens resolve and how often the resolver had
//! to fall back to the default locale.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Resolution counters, shared by every clone of a resolver.
#[derive(Debug, Default)]
pub struct ResolutionMetrics {
    /// Number of tokens resolved (exact matches and fallbacks)
    resolutions: AtomicUsize,

    /// Number of tokens that were not in the supported set
    fallbacks: AtomicUsize,
}

impl ResolutionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a token that matched a supported locale.
    pub fn record_match(&self) {
        self.resolutions.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a token that resolved to the default locale.
    pub fn record_fallback(&self) {
        self.resolutions.fetch_add(1, Ordering::Relaxed);
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current resolution count.
    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::Relaxed)
    }

    /// Get the current fallback count.
    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let resolutions = self.resolutions();
        let fallbacks = self.fallbacks();
        let fallback_rate = if resolutions > 0 {
            (fallbacks as f64 / resolutions as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            resolutions,
            fallbacks,
            fallback_rate,
        }
    }
}

/// Metrics report containing current resolution statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of tokens resolved
    pub resolutions: usize,

    /// Number of fallbacks to the default locale
    pub fallbacks: usize,

    /// Fallback rate as a percentage (0-100)
    pub fallback_rate: f64,
}
