//! Query validator
//!
//! Holds two lookup tables, name patterns and type validators, and checks
//! observed query parameters against a route's [`RuleSet`].
//!
//! Tables are changed through `&mut self` only. Configure the validator
//! once at startup, then share it behind an `Arc`; shared use is read-only.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use regex::Regex;

use super::checkers::{is_boolean, is_date, is_number};
use super::errors::{PatternCompileError, ValidationResult};
use super::types::{ObservedParams, RuleSet, ValidationError};

/// Key of the name pattern consulted during validation
pub const DEFAULT_PATTERN_KEY: &str = "default";

/// ASCII letter, then letters, digits or underscores
pub const DEFAULT_NAME_PATTERN: &str = r"^[a-zA-Z][a-zA-Z0-9_]*$";

/// Predicate deciding whether a raw value conforms to a type tag
pub type TypeValidator = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Validates query parameters against declared rules.
#[derive(Clone)]
pub struct QueryValidator {
    param_patterns: HashMap<String, Regex>,
    type_validators: HashMap<String, TypeValidator>,
}

impl QueryValidator {
    /// Creates a validator with the `default` name pattern and the
    /// `number`, `boolean` and `date` type validators.
    pub fn new() -> Self {
        let mut validator = Self::empty();

        // The default pattern is a constant known to compile.
        if let Ok(regex) = Regex::new(DEFAULT_NAME_PATTERN) {
            validator
                .param_patterns
                .insert(DEFAULT_PATTERN_KEY.to_string(), regex);
        }

        validator.add_type_validator("number", is_number);
        validator.add_type_validator("boolean", is_boolean);
        validator.add_type_validator("date", is_date);

        validator
    }

    /// Creates a validator with no patterns and no type validators.
    /// Everything declared is accepted until tables are populated.
    pub fn empty() -> Self {
        Self {
            param_patterns: HashMap::new(),
            type_validators: HashMap::new(),
        }
    }

    /// Compiles `pattern` and stores it under `name`.
    ///
    /// # Errors
    ///
    /// Returns `PatternCompileError` if `pattern` is not a valid regular
    /// expression. The pattern table is left unchanged.
    pub fn add_param_pattern(&mut self, name: &str, pattern: &str) -> ValidationResult<()> {
        let regex = Regex::new(pattern).map_err(|e| PatternCompileError::new(name, e))?;
        self.param_patterns.insert(name.to_string(), regex);
        Ok(())
    }

    /// Removes the pattern stored under `name`, returning whether one existed.
    pub fn remove_param_pattern(&mut self, name: &str) -> bool {
        self.param_patterns.remove(name).is_some()
    }

    /// Stores `validator` under `name`, replacing any existing entry.
    pub fn add_type_validator<F>(&mut self, name: &str, validator: F)
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.type_validators
            .insert(name.to_string(), Arc::new(validator));
    }

    pub fn has_param_pattern(&self, name: &str) -> bool {
        self.param_patterns.contains_key(name)
    }

    /// Source text of the pattern stored under `name`
    pub fn param_pattern(&self, name: &str) -> Option<&str> {
        self.param_patterns.get(name).map(Regex::as_str)
    }

    pub fn has_type_validator(&self, name: &str) -> bool {
        self.type_validators.contains_key(name)
    }

    /// Registered type tags, sorted
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.type_validators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Checks every observed parameter against `rules`.
    ///
    /// Errors are returned in the order the parameters were observed. An
    /// empty result means the request is valid. Declared parameters missing
    /// from the request are not reported.
    pub fn validate_query(&self, observed: &ObservedParams, rules: &RuleSet) -> Vec<ValidationError> {
        self.validate_pairs(observed.iter(), rules)
    }

    /// Same as [`validate_query`](Self::validate_query) over raw pairs.
    pub fn validate_pairs<'a, I>(&self, pairs: I, rules: &RuleSet) -> Vec<ValidationError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut errors = Vec::new();

        for (param, value) in pairs {
            if !self.validate_param_name(param) {
                errors.push(ValidationError::invalid_name(param, value));
                continue;
            }

            let Some(expected_type) = rules.expected_type(param) else {
                errors.push(ValidationError::unexpected(param, value));
                continue;
            };

            if !self.validate_param_value(value, expected_type) {
                errors.push(ValidationError::invalid_value(param, value, expected_type));
            }
        }

        errors
    }

    fn validate_param_name(&self, param: &str) -> bool {
        match self.param_patterns.get(DEFAULT_PATTERN_KEY) {
            Some(pattern) => pattern.is_match(param),
            None => true,
        }
    }

    fn validate_param_value(&self, value: &str, expected_type: &str) -> bool {
        match self.type_validators.get(expected_type) {
            Some(validator) => validator(value),
            None => true,
        }
    }
}

impl Default for QueryValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for QueryValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut patterns: Vec<_> = self.param_patterns.keys().collect();
        patterns.sort_unstable();
        f.debug_struct("QueryValidator")
            .field("param_patterns", &patterns)
            .field("type_validators", &self.type_names())
            .finish()
    }
}
