use thiserror::Error;

/// Errors raised while configuring locales or building localized paths.
///
/// Resolving a raw locale token never produces one of these: unknown tokens
/// fall back to the default locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("no supported locales configured")]
    EmptyLocaleSet,
    #[error("invalid locale code `{0}`")]
    InvalidLocaleCode(String),
    #[error("locale `{0}` is configured more than once")]
    DuplicateLocale(String),
    #[error("default locale `{0}` is not in the supported locale set")]
    DefaultNotSupported(String),
    #[error("path `{0}` must start with `/`")]
    InvalidPath(String),
}
