//! Validation inputs and outputs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One failed check on one query parameter.
///
/// Serialized as `{"parameter": ..., "value": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub parameter: String,
    pub value: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(
        parameter: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            parameter: parameter.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    pub fn invalid_name(parameter: &str, value: &str) -> Self {
        Self::new(parameter, value, "invalid parameter name format")
    }

    pub fn unexpected(parameter: &str, value: &str) -> Self {
        Self::new(parameter, value, "unexpected parameter")
    }

    pub fn invalid_value(parameter: &str, value: &str, type_tag: &str) -> Self {
        Self::new(parameter, value, format!("invalid value for type {}", type_tag))
    }
}

/// Expected parameters of a route: name -> type tag.
///
/// Tags are free-form; a tag with no registered type validator
/// (e.g. `string`) accepts any value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: HashMap<String, String>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name` with the expected `type_tag`, replacing any earlier declaration
    pub fn param(mut self, name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        self.insert(name, type_tag);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, type_tag: impl Into<String>) {
        self.rules.insert(name.into(), type_tag.into());
    }

    /// Expected type tag for `name`, if declared
    pub fn expected_type(&self, name: &str) -> Option<&str> {
        self.rules.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut rules = RuleSet::new();
        for (name, type_tag) in iter {
            rules.insert(name, type_tag);
        }
        rules
    }
}

/// Query parameters as observed on a request, in query-string order.
///
/// Each name carries a single value. A repeated name keeps the position of
/// its first occurrence and the value of its last one.
#[derive(Debug, Clone, Default)]
pub struct ObservedParams {
    pairs: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl ObservedParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.positions.get(&name) {
            Some(&index) => self.pairs[index].1 = value,
            None => {
                self.positions.insert(name.clone(), self.pairs.len());
                self.pairs.push((name, value));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.positions
            .get(name)
            .map(|&index| self.pairs[index].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

// The position index is derived from `pairs`.
impl PartialEq for ObservedParams {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl Eq for ObservedParams {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ObservedParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = ObservedParams::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}
