//! Built-in type validators
//!
//! - `number`: optionally signed integer or decimal
//! - `boolean`: `true`/`false`/`1`/`0`, case-insensitive
//! - `date`: `YYYY-MM-DD` digit layout, no calendar check

use std::sync::OnceLock;

use regex::Regex;

static NUMBER_RE: OnceLock<Regex> = OnceLock::new();
static DATE_RE: OnceLock<Regex> = OnceLock::new();

fn number_re() -> &'static Regex {
    NUMBER_RE.get_or_init(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("number pattern is valid"))
}

fn date_re() -> &'static Regex {
    DATE_RE.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"))
}

/// Accepts `42`, `-3.5`; rejects `3.`, `.5`, `+1`, `abc`
pub fn is_number(value: &str) -> bool {
    number_re().is_match(value)
}

/// Accepts `true`, `false`, `1`, `0` in any letter case
pub fn is_boolean(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "false" | "1" | "0"
    )
}

/// Digit layout only: `2024-13-99` is accepted
pub fn is_date(value: &str) -> bool {
    date_re().is_match(value)
}
