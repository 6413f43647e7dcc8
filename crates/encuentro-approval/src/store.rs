//! # Registration Store
//!
//! The seam between the state machine and the external data store. The
//! kernel only ever writes a registration's review state, paid amount,
//! rejection reason, and update timestamp; everything else is read-only
//! from its perspective.
//!
//! There is no optimistic-concurrency token: two writers updating the same
//! record both succeed and the later write wins.

use std::collections::BTreeMap;

use encuentro_core::{Registration, RegistrationId, StoreError};

/// Abstract access to persisted registrations.
///
/// Implementations surface failures per call; the bulk layer collects them
/// per record without aborting siblings.
pub trait RegistrationStore {
    /// Fetch one registration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id is unknown.
    fn get(&self, id: RegistrationId) -> Result<Registration, StoreError>;

    /// Write back an updated registration (last write wins).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id is unknown, or
    /// [`StoreError::WriteFailed`] if the backend rejects the write.
    fn update(&mut self, registration: &Registration) -> Result<(), StoreError>;

    /// All registrations, in id order.
    fn all(&self) -> Vec<Registration>;
}

/// A `BTreeMap`-backed store for tests, the CLI dataset, and any caller
/// that fetches the full set up front.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: BTreeMap<RegistrationId, Registration>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from fetched records.
    pub fn from_registrations(registrations: impl IntoIterator<Item = Registration>) -> Self {
        Self {
            records: registrations.into_iter().map(|r| (r.id, r)).collect(),
        }
    }

    /// Insert a registration, replacing any record with the same id.
    pub fn insert(&mut self, registration: Registration) {
        self.records.insert(registration.id, registration);
    }

    /// Number of stored registrations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RegistrationStore for InMemoryStore {
    fn get(&self, id: RegistrationId) -> Result<Registration, StoreError> {
        self.records.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn update(&mut self, registration: &Registration) -> Result<(), StoreError> {
        match self.records.get_mut(&registration.id) {
            Some(slot) => {
                *slot = registration.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(registration.id)),
        }
    }

    fn all(&self) -> Vec<Registration> {
        self.records.values().cloned().collect()
    }
}
