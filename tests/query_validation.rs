//! Query Validation Tests
//!
//! Behavior of the public validator API:
//! - Name format check runs first and short-circuits
//! - Undeclared parameters are unexpected
//! - Values are checked by the validator registered for their type tag
//! - Unknown tags and a missing default pattern are permissive

use std::sync::Arc;
use std::thread;

use query_guard::validation::{
    is_boolean, is_date, is_number, ObservedParams, QueryValidator, RuleSet, ValidationError,
    DEFAULT_NAME_PATTERN, DEFAULT_PATTERN_KEY,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn users_rules() -> RuleSet {
    RuleSet::new().param("age", "number").param("status", "string")
}

fn observed(pairs: &[(&str, &str)]) -> ObservedParams {
    pairs.iter().copied().collect()
}

// =============================================================================
// Name Format Tests
// =============================================================================

#[test]
fn test_valid_names_pass_format_check() {
    let validator = QueryValidator::new();
    let names = ["a", "age", "Status", "x1", "snake_case_name", "A_1_b"];
    let rules: RuleSet = names.iter().map(|n| (*n, "string")).collect();

    for name in names {
        let errors = validator.validate_query(&observed(&[(name, "v")]), &rules);
        assert!(errors.is_empty(), "{name} should pass");
    }
}

#[test]
fn test_invalid_names_fail_format_check() {
    let validator = QueryValidator::new();
    for name in ["1abc", "", "a-b", "_x", "a.b", "naïve"] {
        let errors = validator.validate_query(&observed(&[(name, "v")]), &users_rules());
        assert_eq!(errors, vec![ValidationError::invalid_name(name, "v")]);
    }
}

#[test]
fn test_bad_name_not_also_reported_as_unexpected() {
    let validator = QueryValidator::new();
    let errors = validator.validate_query(&observed(&[("1bad", "x")]), &users_rules());

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "invalid parameter name format");
}

// =============================================================================
// Type Validator Tests
// =============================================================================

#[test]
fn test_number_examples() {
    assert!(is_number("42"));
    assert!(is_number("-3.5"));
    assert!(!is_number("abc"));
    assert!(!is_number("3."));
}

#[test]
fn test_boolean_examples() {
    assert!(is_boolean("TRUE"));
    assert!(is_boolean("0"));
    assert!(!is_boolean("yes"));
}

#[test]
fn test_date_examples() {
    assert!(is_date("2024-13-99"));
    assert!(!is_date("2024-1-1"));
}

#[test]
fn test_each_builtin_through_validator() {
    let validator = QueryValidator::new();
    let rules = RuleSet::new()
        .param("n", "number")
        .param("b", "boolean")
        .param("d", "date");

    let ok = validator.validate_query(
        &observed(&[("n", "-10"), ("b", "False"), ("d", "1999-12-31")]),
        &rules,
    );
    assert!(ok.is_empty());

    let bad = validator.validate_query(&observed(&[("n", "1e3"), ("b", "yes"), ("d", "today")]), &rules);
    let messages: Vec<_> = bad.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "invalid value for type number",
            "invalid value for type boolean",
            "invalid value for type date"
        ]
    );
}

// =============================================================================
// Request-Level Tests
// =============================================================================

#[test]
fn test_valid_request() {
    let validator = QueryValidator::new();
    let errors = validator.validate_query(&observed(&[("age", "30"), ("status", "active")]), &users_rules());
    assert!(errors.is_empty());
}

#[test]
fn test_invalid_age() {
    let validator = QueryValidator::new();
    let errors = validator.validate_query(&observed(&[("age", "abc")]), &users_rules());
    assert_eq!(
        errors,
        vec![ValidationError::new("age", "abc", "invalid value for type number")]
    );
}

#[test]
fn test_unknown_parameter() {
    let validator = QueryValidator::new();
    let errors = validator.validate_query(&observed(&[("unknown", "x")]), &users_rules());
    assert_eq!(errors, vec![ValidationError::new("unknown", "x", "unexpected parameter")]);
}

#[test]
fn test_all_errors_collected() {
    let validator = QueryValidator::new();
    let errors = validator.validate_query(
        &observed(&[("age", "old"), ("-", "1"), ("page", "2"), ("status", "ok")]),
        &users_rules(),
    );

    assert_eq!(
        errors,
        vec![
            ValidationError::invalid_value("age", "old", "number"),
            ValidationError::invalid_name("-", "1"),
            ValidationError::unexpected("page", "2"),
        ]
    );
}

#[test]
fn test_validation_is_deterministic() {
    let validator = QueryValidator::new();
    let params = observed(&[("age", "x"), ("zzz", "1"), ("9a", "2")]);
    let first = validator.validate_query(&params, &users_rules());

    for _ in 0..100 {
        assert_eq!(validator.validate_query(&params, &users_rules()), first);
    }
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_invalid_pattern_leaves_tables_unchanged() {
    let mut validator = QueryValidator::new();
    validator.add_param_pattern("kept", r"^k$").unwrap();

    let err = validator.add_param_pattern("foo", "(").unwrap_err();
    assert_eq!(err.name, "foo");
    assert!(err.to_string().starts_with("invalid pattern for foo:"));

    assert!(!validator.has_param_pattern("foo"));
    assert_eq!(validator.param_pattern("kept"), Some(r"^k$"));
    assert_eq!(
        validator.param_pattern(DEFAULT_PATTERN_KEY),
        Some(DEFAULT_NAME_PATTERN)
    );
}

#[test]
fn test_invalid_default_override_keeps_old_default() {
    let mut validator = QueryValidator::new();
    assert!(validator.add_param_pattern(DEFAULT_PATTERN_KEY, "[").is_err());

    let errors = validator.validate_query(&observed(&[("1bad", "x")]), &users_rules());
    assert_eq!(errors, vec![ValidationError::invalid_name("1bad", "x")]);
}

#[test]
fn test_shared_validator_across_threads() {
    let mut validator = QueryValidator::new();
    validator.add_type_validator("even", |v| v.parse::<u64>().map(|n| n % 2 == 0).unwrap_or(false));
    let validator = Arc::new(validator);
    let rules = Arc::new(RuleSet::new().param("n", "even"));

    let handles: Vec<_> = (0..8u64)
        .map(|i| {
            let validator = Arc::clone(&validator);
            let rules = Arc::clone(&rules);
            thread::spawn(move || {
                let value = i.to_string();
                let errors = validator.validate_query(&observed(&[("n", value.as_str())]), &rules);
                (i, errors.len())
            })
        })
        .collect();

    for handle in handles {
        let (i, count) = handle.join().unwrap();
        assert_eq!(count, (i % 2) as usize);
    }
}
