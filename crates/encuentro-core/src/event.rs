//! # Event
//!
//! The top-level administrative unit. Exactly one event is active at a time
//! across the whole system; that invariant is held by the
//! [`EventDirectory`](crate::directory::EventDirectory) as a single-slot
//! reference rather than a per-record flag.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::EventId;
use crate::money::Money;

/// An event open for registration and reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier.
    pub id: EventId,
    /// Display name.
    pub name: String,
    /// Fundraising goal the dashboards measure progress against.
    pub fundraising_goal: Money,
    /// First day of the event.
    pub start_date: NaiveDate,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Create a new event.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] if the name is empty or
    /// whitespace-only.
    pub fn new(
        name: impl Into<String>,
        fundraising_goal: Money,
        start_date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName { entity: "event" });
        }
        Ok(Self {
            id: EventId::new(),
            name,
            fundraising_goal,
            start_date,
            created_at: Utc::now(),
        })
    }
}
