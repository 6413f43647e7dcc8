//! # Bulk Transitions
//!
//! Applies one review action to a set of registrations. Each record is
//! fetched, transitioned, and written back independently — there is no
//! surrounding transaction, so a bulk operation can partially succeed,
//! leaving some records transitioned and others not. Failures are
//! collected per record and never abort siblings. Cancellation mid-bulk is
//! not supported; the caller waits for every record to finish or fail.

use serde::{Deserialize, Serialize};

use encuentro_core::{EncuentroError, RegistrationId};

use crate::machine::{apply, ApprovalAction, Transition};
use crate::store::RegistrationStore;

/// A per-record failure inside a bulk operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkFailure {
    /// The registration whose update failed.
    pub id: RegistrationId,
    /// Human-readable failure description.
    pub error: String,
}

/// The outcome of a bulk operation: applied transitions and per-record
/// failures, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkReport {
    /// Transitions that committed.
    pub applied: Vec<Transition>,
    /// Records that failed, with the reason.
    pub failed: Vec<BulkFailure>,
}

impl BulkReport {
    /// Whether every record transitioned.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Apply `action` to each of `ids` independently.
///
/// A record that cannot be fetched, transitioned, or written back is
/// reported in [`BulkReport::failed`] and its siblings proceed unaffected.
pub fn apply_bulk<S: RegistrationStore>(
    store: &mut S,
    ids: &[RegistrationId],
    action: &ApprovalAction,
) -> BulkReport {
    let mut report = BulkReport::default();

    for &id in ids {
        match transition_one(store, id, action) {
            Ok(transition) => report.applied.push(transition),
            Err(error) => {
                tracing::warn!(
                    registration_id = %id,
                    error = %error,
                    "bulk transition failed for record — continuing with siblings"
                );
                report.failed.push(BulkFailure {
                    id,
                    error: error.to_string(),
                });
            }
        }
    }

    tracing::debug!(
        applied = report.applied.len(),
        failed = report.failed.len(),
        "bulk transition finished"
    );

    report
}

fn transition_one<S: RegistrationStore>(
    store: &mut S,
    id: RegistrationId,
    action: &ApprovalAction,
) -> Result<Transition, EncuentroError> {
    let mut registration = store.get(id)?;
    let transition = apply(&mut registration, action)?;
    store.update(&registration)?;
    Ok(transition)
}
