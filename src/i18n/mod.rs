//! Internationalization (i18n) module for locale resolution.
//!
//! Every page on the site lives under a locale segment. This module owns the
//! set of locales the site is willing to render and turns whatever token a
//! request carries into one of them.
//!
//! # Architecture
//!
//! - `registry`: The configured locale set and its default, validated at startup
//! - `locale`: Type-safe `Locale` that can only hold supported codes
//! - `resolver`: Raw token to `Locale`, with silent fallback to the default
//! - `validator`: Locale tag checks applied to configuration
//! - `metrics`: Resolution and fallback counters
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use mlm_site_locale::i18n::{LocaleRegistry, LocaleResolver};
//!
//! let registry = LocaleRegistry::new(&["en", "fr", "de"], "en").unwrap();
//! let resolver = LocaleResolver::new(Arc::new(registry));
//!
//! assert_eq!(resolver.resolve(Some("fr")).code(), "fr");
//! assert_eq!(resolver.resolve(Some("xx")).code(), "en");
//! ```

mod locale;
mod metrics;
mod registry;
mod resolver;
mod validator;

pub use locale::Locale;
pub use metrics::{MetricsReport, ResolutionMetrics};
pub use registry::LocaleRegistry;
pub use resolver::{LocaleResolver, Resolution};
pub use validator::{LocaleTagValidator, ValidationReport};
