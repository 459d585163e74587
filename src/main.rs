//! query-guard CLI entry point
//!
//! Dispatches to the CLI module, prints errors to stderr and exits with a
//! non-zero code on failure.

use query_guard::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}: {}", e.code(), e);
        std::process::exit(1);
    }
}
