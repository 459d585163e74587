//! CLI command implementations

use std::path::Path;

use crate::http_server::{ErrorsResponse, HttpServer, HttpServerConfig};
use crate::observability;
use crate::validation::{ObservedParams, QueryValidator, RuleSet, ValidationError};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Check { rules, query } => check(&rules, &query),
    }
}

/// Resolve the server configuration: file (or defaults), then port override
pub fn load_config(config_path: Option<&Path>, port: Option<u16>) -> CliResult<HttpServerConfig> {
    let mut config = match config_path {
        Some(path) => HttpServerConfig::load(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(port) = port {
        config.port = port;
        config.validate()?;
    }

    Ok(config)
}

/// Start the HTTP server and serve until it fails
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let config = load_config(config_path, port)?;

    observability::init_logging(&config.log_filter);
    tracing::info!(
        config = ?config_path,
        addr = %config.socket_addr(),
        "configuration loaded"
    );

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Validate `query` against `rules` and print `{"errors": [...]}`.
///
/// Fails with `ValidationFailed` when any error is reported.
pub fn check(rules: &[String], query: &str) -> CliResult<()> {
    let errors = check_query(rules, query)?;
    let count = errors.len();

    write_json(&ErrorsResponse { errors })?;

    if count > 0 {
        return Err(CliError::ValidationFailed(count));
    }

    Ok(())
}

/// Validation errors for `query` with the built-in validator
pub fn check_query(rules: &[String], query: &str) -> CliResult<Vec<ValidationError>> {
    let rules = parse_rules(rules)?;
    let observed = parse_query(query)?;

    Ok(QueryValidator::new().validate_query(&observed, &rules))
}

/// Parse `name=type` declarations
fn parse_rules(rules: &[String]) -> CliResult<RuleSet> {
    rules
        .iter()
        .map(|rule| match rule.split_once('=') {
            Some((name, type_tag)) if !name.is_empty() && !type_tag.is_empty() => {
                Ok((name.to_string(), type_tag.to_string()))
            }
            _ => Err(CliError::invalid_argument(format!(
                "Invalid rule '{}': expected NAME=TYPE",
                rule
            ))),
        })
        .collect()
}

/// Decode a raw query string into ordered pairs.
///
/// Decoded as `application/x-www-form-urlencoded`, the same way the HTTP
/// route reads its query, so characters that are not legal in a URI
/// (spaces, quotes) are taken literally.
fn parse_query(query: &str) -> CliResult<ObservedParams> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query.trim_start_matches('?'))
        .map_err(|e| CliError::invalid_argument(format!("Invalid query string: {}", e)))?;

    Ok(pairs.into_iter().collect())
}
