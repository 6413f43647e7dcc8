//! # Review Subcommand
//!
//! Applies approval or rejection to a set of registrations through the
//! store seam. Records are updated independently — a failing record is
//! reported and its siblings commit — so the dataset is written back even
//! on partial success, and the exit code signals whether anything failed.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use uuid::Uuid;

use encuentro_approval::{apply_bulk, ApprovalAction, InMemoryStore, RegistrationStore};
use encuentro_core::{Money, RegistrationId};

use crate::dataset::Dataset;

/// Arguments for the `encuentro review` subcommand.
#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// Path to the dataset file.
    #[arg(long, global = true, default_value = "dataset.json")]
    pub dataset: PathBuf,

    #[command(subcommand)]
    pub command: ReviewCommand,
}

/// Review subcommands.
#[derive(Subcommand, Debug)]
pub enum ReviewCommand {
    /// Approve registrations, collecting each one's agreed price.
    Approve {
        /// Registration identifiers (UUIDs).
        ids: Vec<Uuid>,
        /// Paid amount to record instead of the agreed price
        /// (decimal, e.g. "80000.00").
        #[arg(long)]
        amount: Option<String>,
    },

    /// Reject registrations, zeroing their paid amounts.
    Reject {
        /// Registration identifiers (UUIDs).
        ids: Vec<Uuid>,
        /// Reason to record on each rejection.
        #[arg(long)]
        reason: Option<String>,
    },
}

/// Execute the review subcommand.
pub fn run_review(args: &ReviewArgs) -> Result<u8> {
    let mut dataset = Dataset::load(&args.dataset)?;

    let (ids, action) = match &args.command {
        ReviewCommand::Approve { ids, amount } => {
            let amount = match amount {
                Some(s) => Some(Money::parse(s)?),
                None => None,
            };
            (ids, ApprovalAction::Approve { amount })
        }
        ReviewCommand::Reject { ids, reason } => (
            ids,
            ApprovalAction::Reject {
                reason: reason.clone(),
            },
        ),
    };
    let ids: Vec<RegistrationId> = ids.iter().map(|u| RegistrationId::from_uuid(*u)).collect();

    let mut store = InMemoryStore::from_registrations(dataset.registrations.clone());
    let report = apply_bulk(&mut store, &ids, &action);

    // Partial success still commits: write back whatever transitioned.
    dataset.registrations = store.all();
    dataset.save(&args.dataset)?;

    for transition in &report.applied {
        println!(
            "OK: {} {} → {} (paid {})",
            transition.registration_id,
            transition.from,
            transition.to,
            transition.amount_paid
        );
        if transition.override_applied {
            println!("    note: re-approval of a rejected registration (admin override)");
        }
    }
    for failure in &report.failed {
        println!("FAILED: {}: {}", failure.id, failure.error);
    }
    println!(
        "Applied {} transition(s), {} failure(s)",
        report.applied.len(),
        report.failed.len()
    );

    Ok(if report.is_complete() { 0 } else { 1 })
}
