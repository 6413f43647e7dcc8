//! # Definition Resolution
//!
//! Maps jurisdiction and role identifiers to their definitions for one
//! pricing pass. A lookup miss is an explicit [`Resolution::Unresolved`]
//! value rather than a bare `None`: the original system matched
//! definitions by denormalized name strings and silently priced unmatched
//! registrations from a zero base, indistinguishable from a legitimate
//! free tier. The miss still degrades to zero downstream — that behavior
//! is contractual — but it is logged and observable here.

use std::collections::BTreeMap;

use encuentro_core::directory::ActiveContext;
use encuentro_core::{Jurisdiction, JurisdictionId, RoleDefinition, RoleId};

/// Outcome of resolving a definition reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a, T> {
    /// The reference resolved to a definition.
    Resolved(&'a T),
    /// No definition carries the requested identifier.
    Unresolved,
}

impl<'a, T> Resolution<'a, T> {
    /// The resolved definition, if any.
    pub fn resolved(&self) -> Option<&'a T> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Unresolved => None,
        }
    }

    /// Whether the reference failed to resolve.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved)
    }
}

/// An id-keyed index over one event's jurisdiction and role definitions.
#[derive(Debug, Clone)]
pub struct DefinitionIndex<'a> {
    jurisdictions: BTreeMap<JurisdictionId, &'a Jurisdiction>,
    roles: BTreeMap<RoleId, &'a RoleDefinition>,
}

impl<'a> DefinitionIndex<'a> {
    /// Build an index from definition iterators.
    pub fn new(
        jurisdictions: impl IntoIterator<Item = &'a Jurisdiction>,
        roles: impl IntoIterator<Item = &'a RoleDefinition>,
    ) -> Self {
        Self {
            jurisdictions: jurisdictions.into_iter().map(|j| (j.id, j)).collect(),
            roles: roles.into_iter().map(|r| (r.id, r)).collect(),
        }
    }

    /// Build an index over the active event's definitions.
    pub fn from_context(ctx: &ActiveContext<'a>) -> Self {
        Self {
            jurisdictions: ctx.jurisdictions.iter().map(|(id, j)| (*id, j)).collect(),
            roles: ctx.roles.iter().map(|(id, r)| (*id, r)).collect(),
        }
    }

    /// Number of indexed jurisdictions.
    pub fn jurisdiction_count(&self) -> usize {
        self.jurisdictions.len()
    }

    /// Number of indexed roles.
    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    /// Resolve a jurisdiction reference. A miss is logged and returned as
    /// [`Resolution::Unresolved`]; the caller degrades to a zero base.
    pub fn resolve_jurisdiction(&self, id: JurisdictionId) -> Resolution<'a, Jurisdiction> {
        match self.jurisdictions.get(&id) {
            Some(j) => Resolution::Resolved(j),
            None => {
                tracing::warn!(
                    jurisdiction_id = %id,
                    "unresolved jurisdiction reference — pricing will fall back to a zero base"
                );
                Resolution::Unresolved
            }
        }
    }

    /// Resolve a role reference. A miss is logged and returned as
    /// [`Resolution::Unresolved`]; the caller degrades to a zero discount.
    pub fn resolve_role(&self, id: RoleId) -> Resolution<'a, RoleDefinition> {
        match self.roles.get(&id) {
            Some(r) => Resolution::Resolved(r),
            None => {
                tracing::warn!(
                    role_id = %id,
                    "unresolved role reference — pricing will fall back to a zero discount"
                );
                Resolution::Unresolved
            }
        }
    }
}
