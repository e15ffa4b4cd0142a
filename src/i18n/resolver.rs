//! Locale resolver: maps any raw token to a supported locale.

use crate::i18n::{Locale, LocaleRegistry, MetricsReport, ResolutionMetrics};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Outcome of resolving a raw locale token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub locale: Locale,

    /// `true` when the token was not a supported code and the default was used
    pub was_fallback: bool,
}

/// Resolves raw locale tokens against an injected registry.
///
/// Membership is exact string equality: no case folding, no prefix matching
/// (`"en-US"` does not resolve to `"en"`). Any token that is not a member,
/// including a missing one, resolves to the default locale. Resolution never
/// fails.
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    registry: Arc<LocaleRegistry>,
    metrics: Arc<ResolutionMetrics>,
}

impl LocaleResolver {
    pub fn new(registry: Arc<LocaleRegistry>) -> Self {
        Self {
            registry,
            metrics: Arc::new(ResolutionMetrics::new()),
        }
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// Resolve a token to a supported locale.
    ///
    /// # Arguments
    /// * `token` - The raw token, or `None` when the request carried no locale
    ///
    /// # Returns
    /// The matching locale unchanged, or the default locale.
    pub fn resolve(&self, token: Option<&str>) -> Locale {
        self.resolve_tagged(token).locale
    }

    /// Resolve a token and report whether the fallback was taken.
    pub fn resolve_tagged(&self, token: Option<&str>) -> Resolution {
        if let Some(locale) = token.and_then(|code| self.registry.get(code)) {
            self.metrics.record_match();
            return Resolution {
                locale: locale.clone(),
                was_fallback: false,
            };
        }

        let default = self.registry.default_locale();
        debug!(requested = ?token, default = %default, "Unsupported locale, using default");
        self.metrics.record_fallback();

        Resolution {
            locale: default.clone(),
            was_fallback: true,
        }
    }

    /// Snapshot of resolution counters for this resolver and its clones.
    pub fn metrics(&self) -> MetricsReport {
        self.metrics.report()
    }
}
