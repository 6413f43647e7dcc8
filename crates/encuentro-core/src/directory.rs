//! # Event Directory
//!
//! An in-memory projection of the administrative tables: events, their
//! pricing configuration, jurisdictions, and roles. The directory owns the
//! invariants the flat tables only enforced by convention:
//!
//! - **Single active event.** Held as a dedicated single-slot reference;
//!   activating one event atomically replaces any previously active one.
//! - **At most one pricing configuration per event.** Stored as an
//!   `Option` per entry; setting a new configuration replaces the old one.
//! - **Name/slug uniqueness within an event**, checked at insert time.
//! - **Referential removal.** A jurisdiction or role cannot be removed
//!   while any registration in the caller-supplied set references it.
//!   Removing an event cascades to its dependent definitions.
//!
//! The directory is demand-pull: it never performs I/O and carries no
//! timers. Callers load it from fetched records and query it per request.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::error::{ContextError, DirectoryError};
use crate::event::Event;
use crate::identity::{EventId, JurisdictionId, RoleId};
use crate::jurisdiction::Jurisdiction;
use crate::registration::Registration;
use crate::role::RoleDefinition;

/// Everything the pricing and reporting paths need about the active event.
///
/// Obtained from [`EventDirectory::active_context`]; borrowing keeps the
/// snapshot consistent for the duration of one computation.
#[derive(Debug)]
pub struct ActiveContext<'a> {
    /// The active event.
    pub event: &'a Event,
    /// Its pricing configuration.
    pub config: &'a PricingConfig,
    /// Its jurisdictions, keyed by id.
    pub jurisdictions: &'a BTreeMap<JurisdictionId, Jurisdiction>,
    /// Its roles, keyed by id.
    pub roles: &'a BTreeMap<RoleId, RoleDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EventEntry {
    event: Event,
    pricing: Option<PricingConfig>,
    jurisdictions: BTreeMap<JurisdictionId, Jurisdiction>,
    roles: BTreeMap<RoleId, RoleDefinition>,
}

/// The administrative directory of events and their definitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventDirectory {
    events: BTreeMap<EventId, EventEntry>,
    active: Option<EventId>,
}

impl EventDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events in the directory.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the directory holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over all events in id order.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.values().map(|e| &e.event)
    }

    /// Insert a new event.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::DuplicateEvent`] if an event with the same
    /// id already exists.
    pub fn insert_event(&mut self, event: Event) -> Result<(), DirectoryError> {
        if self.events.contains_key(&event.id) {
            return Err(DirectoryError::DuplicateEvent(event.id));
        }
        self.events.insert(
            event.id,
            EventEntry {
                event,
                pricing: None,
                jurisdictions: BTreeMap::new(),
                roles: BTreeMap::new(),
            },
        );
        Ok(())
    }

    /// Activate an event. Any previously active event is deactivated by
    /// the same slot assignment.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::UnknownEvent`] if the event is not
    /// present.
    pub fn activate(&mut self, id: EventId) -> Result<(), DirectoryError> {
        if !self.events.contains_key(&id) {
            return Err(DirectoryError::UnknownEvent(id));
        }
        self.active = Some(id);
        Ok(())
    }

    /// Deactivate whatever event is active. Idempotent.
    pub fn deactivate(&mut self) {
        self.active = None;
    }

    /// The currently active event, if any.
    pub fn active_event(&self) -> Option<&Event> {
        self.active
            .and_then(|id| self.events.get(&id))
            .map(|e| &e.event)
    }

    /// Whether the given event is the active one.
    pub fn is_active(&self, id: EventId) -> bool {
        self.active == Some(id)
    }

    /// Remove an event, cascading to its pricing configuration,
    /// jurisdictions, and roles. Clears the active slot if this event held
    /// it. Registrations live outside the directory; purging them is the
    /// caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::UnknownEvent`] if the event is not
    /// present.
    pub fn remove_event(&mut self, id: EventId) -> Result<Event, DirectoryError> {
        let entry = self
            .events
            .remove(&id)
            .ok_or(DirectoryError::UnknownEvent(id))?;
        if self.active == Some(id) {
            self.active = None;
        }
        Ok(entry.event)
    }

    /// Set (or replace) the event's pricing configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::UnknownEvent`] if the event is not
    /// present.
    pub fn set_pricing_config(
        &mut self,
        event: EventId,
        config: PricingConfig,
    ) -> Result<(), DirectoryError> {
        let entry = self
            .events
            .get_mut(&event)
            .ok_or(DirectoryError::UnknownEvent(event))?;
        entry.pricing = Some(config);
        Ok(())
    }

    /// The event's pricing configuration, if one has been set.
    pub fn pricing_config(&self, event: EventId) -> Option<&PricingConfig> {
        self.events.get(&event).and_then(|e| e.pricing.as_ref())
    }

    /// Insert a jurisdiction into its event.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::UnknownEvent`] if the jurisdiction's event
    /// is not present, or [`DirectoryError::DuplicateJurisdictionName`] if
    /// another jurisdiction in the event carries the same name.
    pub fn insert_jurisdiction(&mut self, jurisdiction: Jurisdiction) -> Result<(), DirectoryError> {
        let entry = self
            .events
            .get_mut(&jurisdiction.event_id)
            .ok_or(DirectoryError::UnknownEvent(jurisdiction.event_id))?;
        if entry
            .jurisdictions
            .values()
            .any(|j| j.name == jurisdiction.name)
        {
            return Err(DirectoryError::DuplicateJurisdictionName {
                name: jurisdiction.name,
            });
        }
        entry.jurisdictions.insert(jurisdiction.id, jurisdiction);
        Ok(())
    }

    /// Insert a role into its event.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::UnknownEvent`] if the role's event is not
    /// present, or [`DirectoryError::DuplicateRoleSlug`] if another role in
    /// the event carries the same slug.
    pub fn insert_role(&mut self, role: RoleDefinition) -> Result<(), DirectoryError> {
        let entry = self
            .events
            .get_mut(&role.event_id)
            .ok_or(DirectoryError::UnknownEvent(role.event_id))?;
        if entry.roles.values().any(|r| r.slug == role.slug) {
            return Err(DirectoryError::DuplicateRoleSlug {
                slug: role.slug.as_str().to_string(),
            });
        }
        entry.roles.insert(role.id, role);
        Ok(())
    }

    /// Look up a jurisdiction within an event.
    pub fn jurisdiction(&self, event: EventId, id: JurisdictionId) -> Option<&Jurisdiction> {
        self.events.get(&event).and_then(|e| e.jurisdictions.get(&id))
    }

    /// Look up a role within an event.
    pub fn role(&self, event: EventId, id: RoleId) -> Option<&RoleDefinition> {
        self.events.get(&event).and_then(|e| e.roles.get(&id))
    }

    /// Iterate over an event's jurisdictions (empty for unknown events).
    pub fn jurisdictions(&self, event: EventId) -> impl Iterator<Item = &Jurisdiction> {
        self.events
            .get(&event)
            .into_iter()
            .flat_map(|e| e.jurisdictions.values())
    }

    /// Iterate over an event's roles (empty for unknown events).
    pub fn roles(&self, event: EventId) -> impl Iterator<Item = &RoleDefinition> {
        self.events
            .get(&event)
            .into_iter()
            .flat_map(|e| e.roles.values())
    }

    /// Remove a jurisdiction, refusing while any registration in the
    /// supplied set references it.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::JurisdictionInUse`] if referenced,
    /// [`DirectoryError::UnknownEvent`] / [`DirectoryError::UnknownJurisdiction`]
    /// if the event or jurisdiction is not present.
    pub fn remove_jurisdiction(
        &mut self,
        event: EventId,
        id: JurisdictionId,
        registrations: &[Registration],
    ) -> Result<Jurisdiction, DirectoryError> {
        let entry = self
            .events
            .get_mut(&event)
            .ok_or(DirectoryError::UnknownEvent(event))?;
        if !entry.jurisdictions.contains_key(&id) {
            return Err(DirectoryError::UnknownJurisdiction(id));
        }
        let count = registrations
            .iter()
            .filter(|r| r.event_id == event && r.jurisdiction_id == id)
            .count();
        if count > 0 {
            return Err(DirectoryError::JurisdictionInUse { id, count });
        }
        entry
            .jurisdictions
            .remove(&id)
            .ok_or(DirectoryError::UnknownJurisdiction(id))
    }

    /// Remove a role, refusing while any registration in the supplied set
    /// references it.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::RoleInUse`] if referenced,
    /// [`DirectoryError::UnknownEvent`] / [`DirectoryError::UnknownRole`]
    /// if the event or role is not present.
    pub fn remove_role(
        &mut self,
        event: EventId,
        id: RoleId,
        registrations: &[Registration],
    ) -> Result<RoleDefinition, DirectoryError> {
        let entry = self
            .events
            .get_mut(&event)
            .ok_or(DirectoryError::UnknownEvent(event))?;
        if !entry.roles.contains_key(&id) {
            return Err(DirectoryError::UnknownRole(id));
        }
        let count = registrations
            .iter()
            .filter(|r| r.event_id == event && r.role_id == id)
            .count();
        if count > 0 {
            return Err(DirectoryError::RoleInUse { id, count });
        }
        entry.roles.remove(&id).ok_or(DirectoryError::UnknownRole(id))
    }

    /// The active event together with its pricing configuration and
    /// definition sets.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::NoActiveEvent`] when no event is activated,
    /// or [`ContextError::MissingPricingConfig`] when the active event has
    /// no pricing configuration. Callers surface either as a "no active
    /// context" state; price computation is undefined without a context.
    pub fn active_context(&self) -> Result<ActiveContext<'_>, ContextError> {
        let id = self.active.ok_or(ContextError::NoActiveEvent)?;
        let entry = self.events.get(&id).ok_or(ContextError::NoActiveEvent)?;
        let config = entry
            .pricing
            .as_ref()
            .ok_or(ContextError::MissingPricingConfig(id))?;
        Ok(ActiveContext {
            event: &entry.event,
            config,
            jurisdictions: &entry.jurisdictions,
            roles: &entry.roles,
        })
    }
}
