//! Integration tests for locale resolution and localized routing
//!
//! These tests exercise the public API the way the site's rendering layer
//! uses it: resolve the request's locale, build links, and serve route
//! context over HTTP.

use proptest::prelude::*;
use std::sync::Arc;
use reqwest::StatusCode;
use serde_json::Value;
use tokio::net::TcpListener;

use mlm_site_locale::{
    i18n::{LocaleRegistry, LocaleResolver},
    routing::{split_request_path, strip_locale_prefix, LocalizedPath, LogicalPath},
    server::{self, AppState},
};

// ==================== Test Helpers ====================

const SUPPORTED: [&str; 3] = ["en", "fr", "de"];

/// Resolver over {en, fr, de} with `en` as the default
fn create_resolver() -> LocaleResolver {
    let registry = LocaleRegistry::new(&SUPPORTED, "en").expect("valid registry");
    LocaleResolver::new(Arc::new(registry))
}

/// GET `path` from the test server
async fn http_get(addr: std::net::SocketAddr, path: &str) -> reqwest::Response {
    reqwest::get(format!("http://{}{}", addr, path))
        .await
        .expect("request")
}

async fn spawn_server() -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let state = AppState::new(create_resolver(), "https://example.com");

    tokio::spawn(async move {
        server::serve(listener, state, std::future::pending())
            .await
            .expect("server");
    });

    addr
}

// ==================== Example Scenarios ====================

#[test]
fn test_resolve_supported_locale() {
    assert_eq!(create_resolver().resolve(Some("fr")).code(), "fr");
}

#[test]
fn test_resolve_unknown_locale() {
    assert_eq!(create_resolver().resolve(Some("xx")).code(), "en");
}

#[test]
fn test_resolve_empty_locale() {
    assert_eq!(create_resolver().resolve(Some("")).code(), "en");
}

#[test]
fn test_build_and_strip_contact() {
    let resolver = create_resolver();
    let fr = resolver.resolve(Some("fr"));
    let path = LocalizedPath::build(&LogicalPath::new("/contact").unwrap(), &fr);

    assert_eq!(path.as_str(), "/fr/contact");
    assert_eq!(strip_locale_prefix(path.as_str(), &fr), Some("/contact"));
}

#[test]
fn test_build_root() {
    let de = create_resolver().resolve(Some("de"));
    let path = LocalizedPath::build(&LogicalPath::root(), &de);
    assert_eq!(path.as_str(), "/de/");
}

#[test]
fn test_request_to_canonical_url() {
    let resolver = create_resolver();
    let (token, logical) = split_request_path("/xx/payment-gateway/nigeria").unwrap();
    let locale = resolver.resolve(token);
    let path = LocalizedPath::build(&logical, &locale);

    assert_eq!(
        path.canonical_url("https://example.com/"),
        "https://example.com/en/payment-gateway/nigeria"
    );
}

#[test]
fn test_default_is_supported() {
    let resolver = create_resolver();
    let default = resolver.registry().default_locale();
    assert!(resolver.registry().contains(default.code()));
}

// ==================== Properties ====================

fn logical_path() -> impl Strategy<Value = String> {
    "/([a-z0-9-]{1,12}/?){0,4}"
}

proptest! {
    #[test]
    fn supported_tokens_resolve_to_themselves(code in prop::sample::select(SUPPORTED.to_vec())) {
        let resolution = create_resolver().resolve_tagged(Some(code));
        prop_assert_eq!(resolution.locale.code(), code);
        prop_assert!(!resolution.was_fallback);
    }

    #[test]
    fn unsupported_tokens_resolve_to_default(token in "\\PC*") {
        prop_assume!(!SUPPORTED.contains(&token.as_str()));
        let resolution = create_resolver().resolve_tagged(Some(token.as_str()));
        prop_assert_eq!(resolution.locale.code(), "en");
        prop_assert!(resolution.was_fallback);
    }

    #[test]
    fn case_variants_resolve_to_default(code in prop::sample::select(SUPPORTED.to_vec())) {
        let upper = code.to_uppercase();
        let locale = create_resolver().resolve(Some(upper.as_str()));
        prop_assert_eq!(locale.code(), "en");
    }

    #[test]
    fn built_paths_round_trip(
        raw in logical_path(),
        code in prop::sample::select(SUPPORTED.to_vec()),
    ) {
        let locale = create_resolver().resolve(Some(code));
        let logical = LogicalPath::new(raw.clone()).unwrap();
        let path = LocalizedPath::build(&logical, &locale);

        prop_assert_eq!(path.strip_locale(), logical);
        prop_assert_eq!(strip_locale_prefix(path.as_str(), &locale), Some(raw.as_str()));
    }

    #[test]
    fn built_paths_have_no_double_slash(
        raw in logical_path(),
        code in prop::sample::select(SUPPORTED.to_vec()),
    ) {
        let locale = create_resolver().resolve(Some(code));
        let path = LocalizedPath::build(&LogicalPath::new(raw).unwrap(), &locale);
        prop_assert!(!path.as_str().contains("//"));
    }

    #[test]
    fn resolution_and_building_are_deterministic(token in "\\PC*", raw in logical_path()) {
        let resolver = create_resolver();
        let first = resolver.resolve_tagged(Some(token.as_str()));
        let second = resolver.resolve_tagged(Some(token.as_str()));
        prop_assert_eq!(&first, &second);

        let logical = LogicalPath::new(raw).unwrap();
        prop_assert_eq!(
            LocalizedPath::build(&logical, &first.locale),
            LocalizedPath::build(&logical, &second.locale)
        );
    }

    #[test]
    fn split_then_build_restores_supported_requests(
        raw in logical_path(),
        code in prop::sample::select(SUPPORTED.to_vec()),
    ) {
        let request = format!("/{}{}", code, raw);
        let (token, logical) = split_request_path(&request).unwrap();
        let locale = create_resolver().resolve(token);

        prop_assert_eq!(token, Some(code));
        let built = LocalizedPath::build(&logical, &locale);
        prop_assert_eq!(built.as_str(), request.as_str());
    }
}

// ==================== HTTP Tests ====================

#[tokio::test]
async fn test_server_serves_route_context() {
    let addr = spawn_server().await;
    let response = http_get(addr, "/fr/contact").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["requested"], "fr");
    assert_eq!(body["locale"], "fr");
    assert_eq!(body["was_fallback"], false);
    assert_eq!(body["logical_path"], "/contact");
    assert_eq!(body["canonical_url"], "https://example.com/fr/contact");
}

#[tokio::test]
async fn test_server_unsupported_locale_is_not_404() {
    let addr = spawn_server().await;
    let response = http_get(addr, "/xx/pricing").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["requested"], "xx");
    assert_eq!(body["locale"], "en");
    assert_eq!(body["was_fallback"], true);
    assert_eq!(body["localized_path"], "/en/pricing");
}

#[tokio::test]
async fn test_server_resolve_api() {
    let addr = spawn_server().await;
    let response = http_get(addr, "/api/resolve?locale=de&path=/payment-gateway/kenya").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["localized_path"], "/de/payment-gateway/kenya");
}

#[tokio::test]
async fn test_server_resolve_rejects_relative_path() {
    let addr = spawn_server().await;
    let response = http_get(addr, "/api/resolve?locale=fr&path=contact").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.text().await.expect("text body");
    assert!(body.contains("must start with `/`"));
}

#[tokio::test]
async fn test_server_locales() {
    let addr = spawn_server().await;
    let body: Value = http_get(addr, "/api/locales")
        .await
        .json()
        .await
        .expect("json body");

    assert_eq!(body["default"], "en");
    assert_eq!(body["supported"], serde_json::json!(["en", "fr", "de"]));
}

#[tokio::test]
async fn test_server_health() {
    let addr = spawn_server().await;
    let response = http_get(addr, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.expect("text body"), "OK");
}
