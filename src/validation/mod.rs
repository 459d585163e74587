//! Query validation for incoming HTTP requests
//!
//! A [`QueryValidator`] checks the observed query parameters of a request
//! against a [`RuleSet`] declared by the route owner.
//!
//! # Checks, per observed parameter
//!
//! 1. Parameter name matches the `default` name pattern
//! 2. Parameter is declared in the rule set
//! 3. Value is accepted by the type validator registered for its tag
//!
//! The first failing check produces one [`ValidationError`] and the
//! remaining checks for that parameter are skipped. Validation itself never
//! fails; it returns zero or more error records.
//!
//! # Permissive defaults
//!
//! - A type tag with no registered validator accepts any value
//! - With no `default` name pattern registered, any name is accepted

mod checkers;
mod errors;
mod types;
mod validator;

pub use checkers::{is_boolean, is_date, is_number};
pub use errors::{PatternCompileError, ValidationResult};
pub use types::{ObservedParams, RuleSet, ValidationError};
pub use validator::{QueryValidator, TypeValidator, DEFAULT_NAME_PATTERN, DEFAULT_PATTERN_KEY};
