//! # Quote Subcommand
//!
//! Computes the price a registrant would owe under the active event's
//! pricing configuration. The same computation stamps the frozen agreed
//! price at registration time, so operators use this to sanity-check a
//! configuration before opening registration.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use uuid::Uuid;

use encuentro_core::{JurisdictionId, RoleId};
use encuentro_pricing::PriceCalculator;

use crate::dataset::Dataset;

/// Arguments for the `encuentro quote` subcommand.
#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Path to the dataset file.
    #[arg(long)]
    pub dataset: PathBuf,

    /// Jurisdiction identifier (UUID).
    #[arg(long)]
    pub jurisdiction: Uuid,

    /// Role identifier (UUID).
    #[arg(long)]
    pub role: Uuid,

    /// Whether lodging is requested.
    #[arg(long)]
    pub lodging: bool,
}

/// Execute the quote subcommand.
pub fn run_quote(args: &QuoteArgs) -> Result<u8> {
    let dataset = Dataset::load(&args.dataset)?;

    let ctx = match dataset.directory.active_context() {
        Ok(ctx) => ctx,
        Err(e) => {
            println!("No active context: {e}");
            return Ok(1);
        }
    };

    let calculator = PriceCalculator::from_context(&ctx);
    let breakdown = calculator.quote(
        JurisdictionId::from_uuid(args.jurisdiction),
        RoleId::from_uuid(args.role),
        args.lodging,
    );

    println!(
        "Quote for event \"{}\" ({} mode):",
        ctx.event.name,
        ctx.config.mode
    );
    println!("  Base:     {}", breakdown.base);
    println!("  Discount: {}", breakdown.discount);
    println!("  Lodging:  {}", breakdown.lodging);
    println!("  Total:    {}", breakdown.total);
    println!("{}", serde_json::to_string_pretty(&breakdown)?);

    Ok(0)
}
