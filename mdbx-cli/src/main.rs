//! # mdbx-status
//!
//! Command-line lookup for libmdbx status codes.
//!
//! Usage:
//!   mdbx-status lookup <CODE|NAME>
//!   mdbx-status list [--category <c>] [--json]
//!   mdbx-status format <MESSAGE> [CODE]
//!
//! Examples:
//!   mdbx-status lookup -30778
//!   mdbx-status lookup TXN_FULL
//!   mdbx-status list --category concurrency
//!   mdbx-status format "put failed" -30799

use clap::{Parser, Subcommand};
use mdbx_error::{Category, EngineError, StatusEntry, StatusRegistry};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mdbx-status")]
#[command(author, version, about = "Inspect libmdbx status codes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a numeric code or canonical name
    Lookup {
        /// Status code (decimal, may be negative) or canonical name
        #[arg(allow_negative_numbers = true)]
        status: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List registered status codes
    List {
        /// Only show one category
        #[arg(short, long)]
        category: Option<Category>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the formatted error message for a message and code
    Format {
        message: String,

        #[arg(allow_negative_numbers = true)]
        code: Option<i32>,
    },
}

#[derive(Debug, Error, PartialEq)]
enum ParseCodeError {
    #[error("unknown status '{0}'")]
    UnknownName(String),

    #[error("status code {0} is not registered")]
    Unregistered(i32),
}

/// Resolve user input as either a decimal code or a canonical name
fn resolve(registry: &StatusRegistry, input: &str) -> Result<StatusEntry, ParseCodeError> {
    let input = input.trim();
    match input.parse::<i32>() {
        Ok(code) => registry.lookup(code).ok_or(ParseCodeError::Unregistered(code)),
        Err(_) => registry
            .by_name(&input.to_ascii_uppercase())
            .ok_or_else(|| ParseCodeError::UnknownName(input.to_string())),
    }
}

fn describe(entry: &StatusEntry) -> String {
    format!(
        "{} ({})\n  category: {}\n  reason:   {}\n  guidance: {}",
        entry.name(),
        entry.code(),
        entry.category(),
        entry,
        entry.category().guidance()
    )
}

fn list(registry: &StatusRegistry, category: Option<Category>, json: bool) -> anyhow::Result<()> {
    let entries: Vec<&StatusEntry> = registry
        .entries()
        .filter(|e| category.map_or(true, |c| e.category() == c))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Status registry v{} ({} entries):", registry.version(), entries.len());
    for entry in entries {
        println!(
            "  {:>7}  {:<18} {:<18} {}",
            entry.code(),
            entry.name(),
            entry.category(),
            entry
        );
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let registry = StatusRegistry::global();

    match cli.command {
        Commands::Lookup { status, json } => match resolve(registry, &status) {
            Ok(entry) if json => println!("{}", serde_json::to_string_pretty(&entry)?),
            Ok(entry) => println!("{}", describe(&entry)),
            Err(e) => {
                tracing::debug!(input = %status, "lookup failed");
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::List { category, json } => list(registry, category, json)?,
        Commands::Format { message, code } => {
            let err = match code {
                Some(code) => EngineError::with_code(message, code),
                None => EngineError::new(message),
            };
            println!("{}", err.error_message());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdbx_error::abi;

    #[test]
    fn test_resolve_code() {
        let entry = resolve(StatusRegistry::global(), "-30778").unwrap();
        assert_eq!(entry.name(), "BUSY");
    }

    #[test]
    fn test_resolve_name_case_insensitive() {
        let entry = resolve(StatusRegistry::global(), " txn_full ").unwrap();
        assert_eq!(entry.code(), abi::TXN_FULL);
    }

    #[test]
    fn test_resolve_errors() {
        let registry = StatusRegistry::global();
        assert_eq!(resolve(registry, "99999"), Err(ParseCodeError::Unregistered(99999)));
        assert_eq!(
            resolve(registry, "NOPE"),
            Err(ParseCodeError::UnknownName("NOPE".to_string()))
        );
    }

    #[test]
    fn test_describe() {
        let entry = resolve(StatusRegistry::global(), "BUSY").unwrap();
        let text = describe(&entry);
        assert!(text.starts_with("BUSY (-30778)"));
        assert!(text.contains("Another write transaction is running"));
        assert!(text.contains("concurrency"));
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();

        let cli = Cli::try_parse_from(["mdbx-status", "format", "put failed", "-30799"]).unwrap();
        assert!(matches!(cli.command, Commands::Format { code: Some(-30799), .. }));

        let cli = Cli::try_parse_from(["mdbx-status", "list", "--category", "misuse"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::List { category: Some(Category::Misuse), json: false }
        ));
    }
}
