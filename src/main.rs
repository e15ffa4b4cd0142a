use anyhow::Result;
use mlm_site_locale::{config, i18n::LocaleResolver, server};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mlm_site_locale=info".parse()?),
        )
        .init();

    info!("Starting localized site router");

    // Load configuration from environment
    let config = config::Config::from_env()?;
    let registry = config.locale_registry()?;

    info!(
        "Serving {} locales (default: {}) for {}",
        registry.list().len(),
        registry.default_locale(),
        config.site_url
    );

    let resolver = LocaleResolver::new(Arc::new(registry));
    let state = server::AppState::new(resolver, &config.site_url);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    server::serve(listener, state, shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
