//! # Error Hierarchy
//!
//! Structured error types for the whole workspace, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! The split mirrors the error-handling contract of the kernel: pure
//! computation (pricing, aggregation, goal progress) never raises for
//! malformed-but-well-typed input — it degrades to zero/neutral values —
//! while construction-time validation, state transitions, store writes,
//! and missing-context lookups surface typed errors the caller decides on.

use thiserror::Error;

/// Top-level error type for the Encuentro workspace.
#[derive(Error, Debug)]
pub enum EncuentroError {
    /// Domain value validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Administrative directory operation failure.
    #[error("directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// No active event, or the active event is missing configuration.
    #[error("context error: {0}")]
    Context(#[from] ContextError),

    /// Registration state transition violation.
    #[error("transition error: {0}")]
    Transition(#[from] TransitionError),

    /// Registration store read/write failure.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for domain value construction.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A decimal amount string could not be parsed into cents.
    #[error("invalid amount: \"{0}\" (expected a decimal number)")]
    InvalidAmount(String),

    /// A role slug is empty or contains whitespace.
    #[error("invalid role slug: \"{0}\" (expected non-empty, no whitespace)")]
    InvalidRoleSlug(String),

    /// A required name field is empty.
    #[error("{entity} name must be non-empty")]
    EmptyName {
        /// Which entity was being constructed.
        entity: &'static str,
    },
}

/// Errors from [`EventDirectory`](crate::directory::EventDirectory) operations.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The referenced event is not present in the directory.
    #[error("unknown event: {0}")]
    UnknownEvent(crate::identity::EventId),

    /// An event with this identifier already exists.
    #[error("event already exists: {0}")]
    DuplicateEvent(crate::identity::EventId),

    /// A jurisdiction with this name already exists within the event.
    #[error("duplicate jurisdiction name within event: \"{name}\"")]
    DuplicateJurisdictionName {
        /// The conflicting name.
        name: String,
    },

    /// A role with this slug already exists within the event.
    #[error("duplicate role slug within event: \"{slug}\"")]
    DuplicateRoleSlug {
        /// The conflicting slug.
        slug: String,
    },

    /// The referenced jurisdiction is not present in the event.
    #[error("unknown jurisdiction: {0}")]
    UnknownJurisdiction(crate::identity::JurisdictionId),

    /// The referenced role is not present in the event.
    #[error("unknown role: {0}")]
    UnknownRole(crate::identity::RoleId),

    /// The jurisdiction is still referenced by registrations.
    #[error("jurisdiction {id} is referenced by {count} registration(s) and cannot be removed")]
    JurisdictionInUse {
        /// The jurisdiction that was to be removed.
        id: crate::identity::JurisdictionId,
        /// How many registrations reference it.
        count: usize,
    },

    /// The role is still referenced by registrations.
    #[error("role {id} is referenced by {count} registration(s) and cannot be removed")]
    RoleInUse {
        /// The role that was to be removed.
        id: crate::identity::RoleId,
        /// How many registrations reference it.
        count: usize,
    },
}

/// Missing-context errors.
///
/// Callers surface these as a "no active context" state. Price computation
/// against a missing context is undefined; it is never reported as a zero
/// price.
#[derive(Error, Debug)]
pub enum ContextError {
    /// No event is currently activated.
    #[error("no active event")]
    NoActiveEvent,

    /// The active event has no pricing configuration.
    #[error("event {0} has no pricing configuration")]
    MissingPricingConfig(crate::identity::EventId),
}

/// Errors during registration state transitions.
#[derive(Error, Debug)]
pub enum TransitionError {
    /// The attempted transition is not valid from the current state.
    #[error("invalid transition for registration {id}: {from} → {to}")]
    InvalidTransition {
        /// The registration whose transition was rejected.
        id: crate::identity::RegistrationId,
        /// The current state name.
        from: String,
        /// The attempted target state name.
        to: String,
    },
}

/// Errors from the registration store.
///
/// In bulk operations these are collected per record; a failing record
/// never aborts its siblings.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The registration does not exist in the store.
    #[error("registration not found: {0}")]
    NotFound(crate::identity::RegistrationId),

    /// A write to the backing store failed.
    #[error("write failed for registration {id}: {reason}")]
    WriteFailed {
        /// The registration whose update failed.
        id: crate::identity::RegistrationId,
        /// Backend-supplied failure description.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{EventId, JurisdictionId, RegistrationId};

    #[test]
    fn validation_error_display() {
        let err = ValidationError::InvalidAmount("abc".to_string());
        assert!(format!("{err}").contains("abc"));

        let err = ValidationError::EmptyName { entity: "event" };
        assert!(format!("{err}").contains("event name"));
    }

    #[test]
    fn directory_error_display() {
        let id = JurisdictionId::new();
        let err = DirectoryError::JurisdictionInUse { id, count: 3 };
        let msg = format!("{err}");
        assert!(msg.contains(&id.to_string()));
        assert!(msg.contains('3'));
    }

    #[test]
    fn context_error_display() {
        assert!(format!("{}", ContextError::NoActiveEvent).contains("no active event"));
        let id = EventId::new();
        let msg = format!("{}", ContextError::MissingPricingConfig(id));
        assert!(msg.contains(&id.to_string()));
    }

    #[test]
    fn transition_error_display() {
        let err = TransitionError::InvalidTransition {
            id: RegistrationId::new(),
            from: "rejected".to_string(),
            to: "rejected".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("rejected → rejected"));
    }

    #[test]
    fn top_level_error_wraps_subordinates() {
        let err = EncuentroError::from(ContextError::NoActiveEvent);
        assert!(format!("{err}").contains("context error"));

        let err = EncuentroError::from(StoreError::NotFound(RegistrationId::new()));
        assert!(format!("{err}").contains("store error"));
    }
}
