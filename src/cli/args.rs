//! CLI argument definitions using clap
//!
//! Commands:
//! - query-guard serve [--config <path>] [--port <port>]
//! - query-guard check [--rule <name=type>]... <query>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// query-guard - query-string validation for HTTP routes
#[derive(Parser, Debug)]
#[command(name = "query-guard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to bind, overriding the configuration file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate a raw query string and print the errors as JSON
    Check {
        /// Declared parameter as name=type (repeatable)
        #[arg(long = "rule", value_name = "NAME=TYPE")]
        rules: Vec<String>,

        /// Query string to validate, e.g. "age=30&status=active"
        query: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["query-guard", "serve", "--port", "8080"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert!(config.is_none());
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from([
            "query-guard",
            "check",
            "--rule",
            "age=number",
            "--rule",
            "status=string",
            "age=30",
        ])
        .unwrap();
        match cli.command {
            Command::Check { rules, query } => {
                assert_eq!(rules, vec!["age=number", "status=string"]);
                assert_eq!(query, "age=30");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_check_requires_query() {
        assert!(Cli::try_parse_from(["query-guard", "check"]).is_err());
    }
}
