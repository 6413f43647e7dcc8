//! # Approval State Machine
//!
//! Governs the legal transitions of a registration's review state and the
//! side effect on its paid amount:
//!
//! ```text
//! PENDING ─approve()──▶ APPROVED ─approve()─┐   (idempotent re-approval)
//!    │                     │  ▲─────────────┘
//!    │                  reject()
//!    │                     │
//!    └──────reject()───────▶ REJECTED ─approve()──▶ APPROVED
//!                                         (logged admin override)
//! ```
//!
//! Approval sets the paid amount to the agreed price (or a caller-supplied
//! override amount); rejection zeroes it. Re-approving a rejected
//! registration is deliberately permitted as an admin override path — it
//! succeeds through the ordinary operation but is logged and flagged on
//! the returned [`Transition`] so callers can journal it.
//!
//! No payment-provider validation happens here; that integration is an
//! external collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use encuentro_core::{
    Money, Registration, RegistrationId, RegistrationState, TransitionError,
};

/// The review action an administrator applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalAction {
    /// Approve, collecting the agreed price unless an override amount is
    /// supplied.
    Approve {
        /// Paid amount to record instead of the agreed price.
        amount: Option<Money>,
    },
    /// Reject, zeroing the paid amount.
    Reject {
        /// Administrator-supplied reason.
        reason: Option<String>,
    },
}

/// A record of one applied transition, suitable for audit logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The registration that transitioned.
    pub registration_id: RegistrationId,
    /// State before the transition.
    pub from: RegistrationState,
    /// State after the transition.
    pub to: RegistrationState,
    /// Paid amount after the transition.
    pub amount_paid: Money,
    /// Whether this was the rejected→approved admin override.
    pub override_applied: bool,
    /// When the transition was applied.
    pub timestamp: DateTime<Utc>,
}

/// Approve a registration.
///
/// Permitted from every state: pending→approved is the ordinary path,
/// approved→approved recomputes the paid amount idempotently, and
/// rejected→approved is the logged admin override. The paid amount becomes
/// the agreed price unless `amount` overrides it; any rejection reason is
/// cleared.
pub fn approve(
    registration: &mut Registration,
    amount: Option<Money>,
) -> Result<Transition, TransitionError> {
    let from = registration.state;
    let override_applied = from == RegistrationState::Rejected;
    if override_applied {
        tracing::warn!(
            registration_id = %registration.id,
            "re-approving a rejected registration (admin override)"
        );
    }

    let paid = amount.unwrap_or_else(|| registration.agreed_price());
    let now = Utc::now();

    registration.state = RegistrationState::Approved;
    registration.amount_paid = paid;
    registration.rejection_reason = None;
    registration.updated_at = now;

    Ok(Transition {
        registration_id: registration.id,
        from,
        to: RegistrationState::Approved,
        amount_paid: paid,
        override_applied,
        timestamp: now,
    })
}

/// Reject a registration, zeroing its paid amount.
///
/// Permitted from pending and approved. A registration that is already
/// rejected has nothing to reject.
///
/// # Errors
///
/// Returns [`TransitionError::InvalidTransition`] for rejected→rejected.
pub fn reject(
    registration: &mut Registration,
    reason: Option<String>,
) -> Result<Transition, TransitionError> {
    let from = registration.state;
    if from == RegistrationState::Rejected {
        return Err(TransitionError::InvalidTransition {
            id: registration.id,
            from: from.as_str().to_string(),
            to: RegistrationState::Rejected.as_str().to_string(),
        });
    }

    let now = Utc::now();
    registration.state = RegistrationState::Rejected;
    registration.amount_paid = Money::ZERO;
    registration.rejection_reason = reason;
    registration.updated_at = now;

    Ok(Transition {
        registration_id: registration.id,
        from,
        to: RegistrationState::Rejected,
        amount_paid: Money::ZERO,
        override_applied: false,
        timestamp: now,
    })
}

/// Apply an [`ApprovalAction`] to a registration.
pub fn apply(
    registration: &mut Registration,
    action: &ApprovalAction,
) -> Result<Transition, TransitionError> {
    match action {
        ApprovalAction::Approve { amount } => approve(registration, *amount),
        ApprovalAction::Reject { reason } => reject(registration, reason.clone()),
    }
}
