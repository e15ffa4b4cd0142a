//! HTTP routing layer.
//!
//! Takes the first path segment of each page request as the raw locale token,
//! resolves it, and answers with the route context a renderer needs: the
//! locale to render, the logical path, and the canonical URL. Unsupported
//! locales render the default locale instead of a 404.

use crate::error::LocaleError;
use crate::i18n::{Locale, LocaleResolver, MetricsReport};
use crate::routing::{split_request_path, LocalizedPath, LogicalPath};
use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared, read-only state for all handlers.
#[derive(Clone)]
pub struct AppState {
    resolver: LocaleResolver,
    site_url: Arc<str>,
}

impl AppState {
    pub fn new(resolver: LocaleResolver, site_url: &str) -> Self {
        Self {
            resolver,
            site_url: Arc::from(site_url),
        }
    }

    /// Resolve a token and localize a logical path in one step.
    pub fn route_context(&self, token: Option<&str>, logical: LogicalPath) -> RouteContext {
        let resolution = self.resolver.resolve_tagged(token);
        let localized = LocalizedPath::build(&logical, &resolution.locale);

        RouteContext {
            requested: token.map(str::to_string),
            canonical_url: localized.canonical_url(&self.site_url),
            localized_path: localized.to_string(),
            locale: resolution.locale,
            was_fallback: resolution.was_fallback,
            logical_path: logical,
        }
    }
}

/// Everything a page renderer needs to know about the request's locale.
#[derive(Debug, Clone, Serialize)]
pub struct RouteContext {
    /// Raw token from the request, if any
    pub requested: Option<String>,
    pub locale: Locale,
    pub was_fallback: bool,
    pub logical_path: LogicalPath,
    pub localized_path: String,
    pub canonical_url: String,
}

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    locale: Option<String>,
    path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LocalesResponse {
    default: Locale,
    supported: Vec<Locale>,
}

type ApiError = (StatusCode, String);

fn bad_request(err: LocaleError) -> ApiError {
    warn!("Rejected request: {}", err);
    (StatusCode::BAD_REQUEST, err.to_string())
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api/locales", get(locales))
        .route("/api/resolve", get(resolve))
        .fallback(page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the router on `listener` until `shutdown` completes.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn page(State(state): State<AppState>, uri: Uri) -> Result<Json<RouteContext>, ApiError> {
    let (token, logical) = split_request_path(uri.path()).map_err(bad_request)?;
    Ok(Json(state.route_context(token, logical)))
}

pub async fn resolve(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<RouteContext>, ApiError> {
    let logical = match query.path {
        Some(path) => LogicalPath::new(path).map_err(bad_request)?,
        None => LogicalPath::root(),
    };
    Ok(Json(state.route_context(query.locale.as_deref(), logical)))
}

pub async fn locales(State(state): State<AppState>) -> Json<LocalesResponse> {
    let registry = state.resolver.registry();
    Json(LocalesResponse {
        default: registry.default_locale().clone(),
        supported: registry.list().to_vec(),
    })
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsReport> {
    Json(state.resolver.metrics())
}
