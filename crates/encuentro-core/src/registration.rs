//! # Registration
//!
//! A participant's registration for an event. The agreed price is computed
//! once at submission time and frozen — it is the contractual amount owed
//! regardless of later configuration changes, so the field is private and
//! only readable after construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::{EventId, JurisdictionId, RegistrationId, RoleId};
use crate::money::Money;

/// The review state of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationState {
    /// Awaiting administrator review. Initial state.
    Pending,
    /// Accepted; the agreed price has been collected.
    Approved,
    /// Declined; nothing is owed. Re-approval remains possible as an
    /// explicit admin override.
    Rejected,
}

impl RegistrationState {
    /// The canonical string name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// All states, in partition order.
    pub fn all() -> &'static [RegistrationState] {
        &[Self::Pending, Self::Approved, Self::Rejected]
    }
}

impl std::fmt::Display for RegistrationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Personal identity fields of a registrant.
///
/// Groups the constructor inputs so registration creation stays explicit
/// without an excessive argument count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrantDetails {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// National identity document number.
    pub document: String,
    /// Contact email.
    pub email: String,
}

/// A participant's registration for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Unique registration identifier.
    pub id: RegistrationId,
    /// The event registered for.
    pub event_id: EventId,
    /// The registrant's jurisdiction.
    pub jurisdiction_id: JurisdictionId,
    /// The registrant's role.
    pub role_id: RoleId,
    /// Personal identity fields.
    pub details: RegistrantDetails,
    /// Whether lodging was requested at registration time.
    pub lodging_requested: bool,
    /// Price computed and frozen at submission time.
    agreed_price: Money,
    /// Realized payment: zero unless approved.
    pub amount_paid: Money,
    /// Current review state.
    pub state: RegistrationState,
    /// Reason supplied at rejection time, if any.
    pub rejection_reason: Option<String>,
    /// When the registration was submitted.
    pub created_at: DateTime<Utc>,
    /// When the registration was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Registration {
    /// Create a new pending registration with the price stamped at
    /// submission time.
    pub fn new(
        event_id: EventId,
        jurisdiction_id: JurisdictionId,
        role_id: RoleId,
        details: RegistrantDetails,
        lodging_requested: bool,
        agreed_price: Money,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: RegistrationId::new(),
            event_id,
            jurisdiction_id,
            role_id,
            details,
            lodging_requested,
            agreed_price,
            amount_paid: Money::ZERO,
            state: RegistrationState::Pending,
            rejection_reason: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The price agreed at submission time. Immutable for the lifetime of
    /// the registration.
    pub fn agreed_price(&self) -> Money {
        self.agreed_price
    }

    /// Builder: override the creation timestamp (dataset imports and
    /// time-bucketed report tests).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = created_at;
        self
    }
}
