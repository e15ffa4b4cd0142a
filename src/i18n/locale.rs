//! Locale type: a code that is known to be in the supported set.
//!
//! A `Locale` can only be obtained from a `LocaleRegistry` (directly or via the
//! resolver), so every value that reaches rendering or URL construction is a
//! member of the configured set.

use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// A validated, supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    /// Locale code exactly as configured (e.g., "en", "pt-BR")
    code: Arc<str>,
}

impl Locale {
    /// Only the registry mints locales.
    pub(crate) fn new(code: &str) -> Self {
        Self {
            code: Arc::from(code),
        }
    }

    /// Get the locale code.
    ///
    /// # Returns
    /// The code as configured, with its original case (e.g., "en", "pt-BR").
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code)
    }
}
