//! # Jurisdiction
//!
//! An administrative registration group within an event (a diocese in the
//! original deployment). Carries its own base price and lodging fee, which
//! the price calculator consults when the event's pricing or lodging mode
//! is per-jurisdiction.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::{EventId, JurisdictionId};
use crate::money::Money;

/// A registration jurisdiction within an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jurisdiction {
    /// Unique jurisdiction identifier.
    pub id: JurisdictionId,
    /// The event this jurisdiction belongs to.
    pub event_id: EventId,
    /// Display name, unique within the event.
    pub name: String,
    /// Base price (consulted when the event prices per jurisdiction).
    pub base_price: Money,
    /// Lodging fee (consulted when lodging is charged per jurisdiction).
    pub lodging_fee: Money,
    /// Contact email of the jurisdiction's coordinator, if known.
    pub contact_email: Option<String>,
}

impl Jurisdiction {
    /// Create a new jurisdiction.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] if the name is empty or
    /// whitespace-only.
    pub fn new(
        event_id: EventId,
        name: impl Into<String>,
        base_price: Money,
        lodging_fee: Money,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName {
                entity: "jurisdiction",
            });
        }
        Ok(Self {
            id: JurisdictionId::new(),
            event_id,
            name,
            base_price,
            lodging_fee,
            contact_email: None,
        })
    }

    /// Builder: set the coordinator contact email.
    pub fn with_contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = Some(email.into());
        self
    }
}
