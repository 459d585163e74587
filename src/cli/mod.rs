//! CLI module for query-guard
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server
//! - check: Validate a query string from the command line

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, check_query, load_config, run, run_command, serve};
pub use errors::{CliError, CliResult};
pub use io::{write_json, write_json_to};
