//! Locale tag validation module.
//!
//! Checks the configured locale codes before the registry is built, so that
//! every code is usable verbatim as a single URL path segment.

use crate::error::LocaleError;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Outcome of checking a configured locale list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// Codes the registry must reject, in configured order
    pub errors: Vec<LocaleError>,

    /// Accepted codes that differ from an earlier code only by case
    pub case_collisions: Vec<String>,
}

impl ValidationReport {
    /// The first rejected code, which is what the registry reports.
    pub fn first_error(&self) -> Option<&LocaleError> {
        self.errors.first()
    }

    /// No rejected codes and no case collisions.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.case_collisions.is_empty()
    }
}

/// Validator for configured locale codes.
pub struct LocaleTagValidator;

// Language subtag followed by optional region/script/variant subtags
static TAG_REGEX: OnceLock<Regex> = OnceLock::new();

impl LocaleTagValidator {
    /// Check whether a single code is a well-formed locale tag.
    ///
    /// Well-formed tags never contain `/`, whitespace, or an empty segment,
    /// so prefixing a path with one cannot introduce a double slash.
    pub fn is_well_formed(code: &str) -> bool {
        let regex = TAG_REGEX.get_or_init(|| {
            Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").expect("locale tag regex is valid")
        });
        regex.is_match(code)
    }

    /// Validate a full list of configured locale codes.
    ///
    /// Malformed and repeated codes are errors. Codes that only differ by
    /// case are accepted, since resolution is case-sensitive, but recorded
    /// in `case_collisions`.
    pub fn validate<S: AsRef<str>>(codes: &[S]) -> ValidationReport {
        let mut report = ValidationReport::default();
        let mut seen = HashSet::new();
        let mut seen_folded = HashSet::new();

        for code in codes.iter().map(|code| code.as_ref()) {
            if !Self::is_well_formed(code) {
                report
                    .errors
                    .push(LocaleError::InvalidLocaleCode(code.to_string()));
                continue;
            }

            if !seen.insert(code) {
                report
                    .errors
                    .push(LocaleError::DuplicateLocale(code.to_string()));
                continue;
            }

            if !seen_folded.insert(code.to_ascii_lowercase()) {
                report.case_collisions.push(code.to_string());
            }
        }

        report
    }
}
