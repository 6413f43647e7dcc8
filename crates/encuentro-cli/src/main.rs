//! # encuentro CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use encuentro_cli::quote::{run_quote, QuoteArgs};
use encuentro_cli::report::{run_report, ReportArgs};
use encuentro_cli::review::{run_review, ReviewArgs};

/// Encuentro — event-registration pricing and reconciliation toolkit.
///
/// Prices registrants under the active event's configuration, reports
/// recruitment and revenue progress, and reviews registrations in bulk.
#[derive(Parser, Debug)]
#[command(name = "encuentro", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price a jurisdiction/role/lodging combination.
    Quote(QuoteArgs),

    /// Financial and demographic report for the active event.
    Report(ReportArgs),

    /// Approve or reject registrations.
    Review(ReviewArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Quote(args) => run_quote(&args),
        Commands::Report(args) => run_report(&args),
        Commands::Review(args) => run_review(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
