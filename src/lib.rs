//! query-guard - query-string validation for HTTP routes
//!
//! The [`validation`] module holds the reusable core: a [`QueryValidator`]
//! checks a request's query parameters against a route's [`RuleSet`] and
//! returns every [`ValidationError`] it finds. [`http_server`] wires it into
//! an axum router; [`cli`] starts the server or checks a query offline.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod validation;

pub use validation::{
    ObservedParams, PatternCompileError, QueryValidator, RuleSet, ValidationError,
};
