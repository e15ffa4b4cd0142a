//! Localize binary - resolves a locale token and path from the command line
//!
//! Usage:
//!   cargo run --bin localize -- fr /contact    # /fr/contact
//!   cargo run --bin localize -- xx /pricing    # falls back to DEFAULT_LOCALE
//!   cargo run --bin localize -- de            # path defaults to /
//!
//! Reads SUPPORTED_LOCALES, DEFAULT_LOCALE and SITE_URL like the server.

use anyhow::{bail, Result};
use mlm_site_locale::{
    config,
    i18n::{LocaleResolver, Resolution},
    routing::{LocalizedPath, LogicalPath},
};
use std::sync::Arc;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("localize=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = config::Config::from_env()?;
    let resolver = LocaleResolver::new(Arc::new(config.locale_registry()?));

    let (resolution, localized) = localize(&resolver, &args)?;
    if resolution.was_fallback {
        info!(
            "Locale '{}' is not supported, using '{}'",
            args[0], resolution.locale
        );
    }

    println!("locale:    {}", resolution.locale);
    println!("path:      {}", localized);
    println!("canonical: {}", localized.canonical_url(&config.site_url));

    Ok(())
}

/// Resolve `<locale> [path]` arguments into a locale and a localized path.
fn localize(resolver: &LocaleResolver, args: &[String]) -> Result<(Resolution, LocalizedPath)> {
    let (token, path) = match args {
        [token] => (token.as_str(), "/"),
        [token, path] => (token.as_str(), path.as_str()),
        _ => bail!("Usage: localize <locale> [path]"),
    };

    let logical = LogicalPath::new(path)?;
    let resolution = resolver.resolve_tagged(Some(token));
    let localized = LocalizedPath::build(&logical, &resolution.locale);

    Ok((resolution, localized))
}
