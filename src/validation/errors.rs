//! Validator configuration errors
//!
//! Per-parameter problems found while checking a request are not errors in
//! this sense: they are collected as [`ValidationError`](super::ValidationError)
//! records. The only failure is registering a name pattern that does not
//! compile.

use thiserror::Error;

/// Result type for validator configuration
pub type ValidationResult<T> = Result<T, PatternCompileError>;

/// A name pattern failed to compile as a regular expression
#[derive(Debug, Clone, Error)]
#[error("invalid pattern for {name}: {source}")]
pub struct PatternCompileError {
    /// Key the pattern was being registered under
    pub name: String,
    /// Underlying regex compiler error
    #[source]
    pub source: regex::Error,
}

impl PatternCompileError {
    pub fn new(name: impl Into<String>, source: regex::Error) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }
}
