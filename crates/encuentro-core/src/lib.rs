#![deny(missing_docs)]

//! # encuentro-core — Foundational Types for Encuentro
//!
//! This crate defines the foundational types that every other crate in the
//! workspace depends on. It has no internal crate dependencies — only
//! `serde`, `serde_json`, `thiserror`, `chrono`, and `uuid` from the
//! external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** Every identifier is a
//!    distinct type. You cannot pass a [`JurisdictionId`] where a
//!    [`RoleId`] is expected, and [`Money`] never mixes with bare integers.
//!
//! 2. **No floats for money.** Amounts are integer cents, rates are basis
//!    points; ratios (approval rate, goal percentage) are derived `f64`
//!    values computed from integer inputs at the reporting edge.
//!
//! 3. **Tagged unions over flag-plus-fields records.** A role's discount
//!    policy is `None | Percentage | Fixed` — the inactive stored value of
//!    the legacy flat record is dropped at the ingestion boundary.
//!
//! 4. **Invariants live in one place.** The single-active-event slot,
//!    per-event pricing configuration, name/slug uniqueness, and
//!    referential removal rules are all enforced by [`EventDirectory`].
//!
//! 5. **[`EncuentroError`] hierarchy.** Structured errors with
//!    `thiserror` — no `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod config;
pub mod directory;
pub mod error;
pub mod event;
pub mod identity;
pub mod jurisdiction;
pub mod money;
pub mod registration;
pub mod role;

// Re-export primary types at crate root for ergonomic imports.
pub use config::{LodgingMode, PricingConfig, PricingMode};
pub use directory::{ActiveContext, EventDirectory};
pub use error::{
    ContextError, DirectoryError, EncuentroError, StoreError, TransitionError, ValidationError,
};
pub use event::Event;
pub use identity::{EventId, JurisdictionId, RegistrationId, RoleId, RoleSlug};
pub use jurisdiction::Jurisdiction;
pub use money::{Money, Percentage};
pub use registration::{RegistrantDetails, Registration, RegistrationState};
pub use role::{DiscountMethod, DiscountPolicy, RoleDefinition};
