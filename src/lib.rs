//! Locale resolution and localized path building for the marketing site.
//!
//! Every page is served under `/{locale}/...`. The `i18n` module turns the raw
//! locale segment of a request into a supported locale (falling back to the
//! default), `routing` builds locale-prefixed links and canonical URLs, and
//! `server` exposes both to the rendering layer over HTTP.

pub mod config;
pub mod error;
pub mod i18n;
pub mod routing;
pub mod server;
