//! Locale registry: Single source of truth for the locales the site renders.
//!
//! The registry is built once from configuration at startup and is immutable
//! thereafter. It is shared through `Arc` rather than a process-wide static so
//! that tests can build as many independent registries as they need.

use crate::error::LocaleError;
use crate::i18n::{Locale, LocaleTagValidator};
use tracing::warn;

/// The closed set of supported locales plus the designated default.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<Locale>,
    default_index: usize,
}

impl LocaleRegistry {
    /// Build a registry from configured locale codes.
    ///
    /// # Arguments
    /// * `codes` - Supported locale codes, in display order
    /// * `default` - The fallback locale; must be one of `codes`
    ///
    /// # Returns
    /// * `Ok(LocaleRegistry)` when the set is non-empty, every code is a
    ///   well-formed tag, no code repeats, and `default` is a member
    /// * `Err(LocaleError)` describing the first violation otherwise
    pub fn new<S: AsRef<str>>(codes: &[S], default: &str) -> Result<Self, LocaleError> {
        if codes.is_empty() {
            return Err(LocaleError::EmptyLocaleSet);
        }

        let report = LocaleTagValidator::validate(codes);
        if let Some(err) = report.first_error() {
            return Err(err.clone());
        }
        for code in &report.case_collisions {
            warn!(code = %code, "Locale differs from another configured locale only by case");
        }

        let locales: Vec<Locale> = codes
            .iter()
            .map(|code| Locale::new(code.as_ref()))
            .collect();

        let default_index = locales
            .iter()
            .position(|locale| locale.code() == default)
            .ok_or_else(|| LocaleError::DefaultNotSupported(default.to_string()))?;

        Ok(Self {
            locales,
            default_index,
        })
    }

    /// Get a supported locale by its exact code.
    ///
    /// Matching is case-sensitive; `"EN"` does not find `"en"`.
    pub fn get(&self, code: &str) -> Option<&Locale> {
        self.locales.iter().find(|locale| locale.code() == code)
    }

    /// Check if a code is a member of the supported set.
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// The locale used whenever a requested locale cannot be validated.
    pub fn default_locale(&self) -> &Locale {
        &self.locales[self.default_index]
    }

    /// All supported locales in configured order.
    pub fn list(&self) -> &[Locale] {
        &self.locales
    }
}
