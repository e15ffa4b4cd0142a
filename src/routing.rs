//! Locale-prefixed site paths.
//!
//! A `LogicalPath` is a site path without a locale (`/contact`). A
//! `LocalizedPath` is the same path under a locale segment (`/fr/contact`),
//! used for link targets and canonical URLs. The root path keeps its slash,
//! so `/` under `de` becomes `/de/` and stripping `/de` gives back `/`.

use crate::error::LocaleError;
use crate::i18n::Locale;
use serde::Serialize;
use std::fmt;

/// A site-relative path with no locale prefix. Always starts with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LogicalPath(String);

impl LogicalPath {
    /// Validate a logical path.
    ///
    /// # Returns
    /// * `Ok(LogicalPath)` if `path` starts with `/`
    /// * `Err(LocaleError::InvalidPath)` otherwise (a caller bug, not bad input)
    pub fn new(path: impl Into<String>) -> Result<Self, LocaleError> {
        let path = path.into();
        if !path.starts_with('/') {
            return Err(LocaleError::InvalidPath(path));
        }
        Ok(Self(path))
    }

    /// The site root, `/`.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A logical path under a supported locale segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalizedPath {
    locale: Locale,
    path: String,
}

impl LocalizedPath {
    /// Prefix `logical` with the locale segment.
    ///
    /// The locale is trusted to be supported already; it is not re-checked.
    /// Supported codes never contain `/`, so the only slash added is the
    /// leading separator.
    pub fn build(logical: &LogicalPath, locale: &Locale) -> Self {
        let mut path = String::with_capacity(1 + locale.code().len() + logical.as_str().len());
        path.push('/');
        path.push_str(locale.code());
        path.push_str(logical.as_str());

        Self {
            locale: locale.clone(),
            path,
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Remove the locale segment, recovering the logical path exactly.
    pub fn strip_locale(&self) -> LogicalPath {
        // "/" + code is always the prefix of a built path
        LogicalPath(self.path[1 + self.locale.code().len()..].to_string())
    }

    /// Absolute URL on the given site origin.
    pub fn canonical_url(&self, site_url: &str) -> String {
        canonical_url(site_url, self)
    }
}

impl fmt::Display for LocalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Strip a `/{locale}` prefix from an arbitrary path string.
///
/// Only strips at a segment boundary: `/en/about` gives `/about`, while
/// `/english` and `/en` give `None`.
pub fn strip_locale_prefix<'a>(path: &'a str, locale: &Locale) -> Option<&'a str> {
    let rest = path.strip_prefix('/')?.strip_prefix(locale.code())?;
    rest.starts_with('/').then_some(rest)
}

/// Split an incoming request path into its raw locale token and the rest.
///
/// The first segment is always taken as the token, whether or not it names a
/// supported locale; resolution decides what to do with it.
///
/// # Examples
///
/// ```rust
/// use mlm_site_locale::routing::split_request_path;
///
/// let (token, rest) = split_request_path("/fr/contact").unwrap();
/// assert_eq!(token, Some("fr"));
/// assert_eq!(rest.as_str(), "/contact");
///
/// let (token, rest) = split_request_path("/").unwrap();
/// assert_eq!(token, None);
/// assert_eq!(rest.as_str(), "/");
/// ```
pub fn split_request_path(path: &str) -> Result<(Option<&str>, LogicalPath), LocaleError> {
    if path.is_empty() || path == "/" {
        return Ok((None, LogicalPath::root()));
    }

    let rest = path
        .strip_prefix('/')
        .ok_or_else(|| LocaleError::InvalidPath(path.to_string()))?;

    match rest.find('/') {
        Some(idx) => Ok((Some(&rest[..idx]), LogicalPath(rest[idx..].to_string()))),
        None => Ok((Some(rest), LogicalPath::root())),
    }
}

/// Join a site origin and a localized path.
///
/// A trailing `/` on `site_url` is dropped so the result has a single
/// separator.
pub fn canonical_url(site_url: &str, path: &LocalizedPath) -> String {
    format!("{}{}", site_url.trim_end_matches('/'), path.as_str())
}
