use crate::i18n::LocaleRegistry;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Locales
    pub supported_locales: Vec<String>,
    pub default_locale: String,

    // Site
    pub site_url: String,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Locales - comma-separated, e.g. "en,fr,de"
            supported_locales: std::env::var("SUPPORTED_LOCALES")
                .map(|v| parse_locale_list(&v))
                .unwrap_or_else(|_| vec!["en".to_string()]),
            default_locale: std::env::var("DEFAULT_LOCALE")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|_| "en".to_string()),

            // Site origin used for canonical URLs
            site_url: std::env::var("SITE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),

            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }

    /// Build the validated locale registry for this configuration.
    ///
    /// Fails when the locale list is empty or malformed, or when the default
    /// locale is not one of the supported locales.
    pub fn locale_registry(&self) -> Result<LocaleRegistry> {
        LocaleRegistry::new(&self.supported_locales, &self.default_locale)
            .context("Invalid SUPPORTED_LOCALES / DEFAULT_LOCALE configuration")
    }
}

fn parse_locale_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
