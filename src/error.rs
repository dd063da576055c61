//! Error types for locale lookup and format-code resolution.

use thiserror::Error;

/// Errors that can occur when resolving a date format code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unrecognized date format code '{code}'")]
    UnknownDateStyle { code: String },
}

/// Errors that can occur when looking up a locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("no built-in locale matches tag '{tag}'")]
    UnknownTag { tag: String },
}
