//! # encuentro-approval — Registration Review
//!
//! The only part of the kernel that touches shared persisted state.
//! Administrators approve or reject registrations, individually or in
//! bulk; approval realizes the frozen agreed price as the paid amount and
//! rejection zeroes it. After mutations, callers re-fetch and re-aggregate
//! — there is no incremental statistics update.
//!
//! - **Machine** ([`machine`]): the legal transitions, their paid-amount
//!   side effects, and the logged rejected→approved admin override.
//! - **Store** ([`store`]): the [`RegistrationStore`] seam to the external
//!   data store, plus an in-memory implementation.
//! - **Bulk** ([`bulk`]): per-record independent application with partial
//!   success and no rollback.

pub mod bulk;
pub mod machine;
pub mod store;

// Re-export primary types.
pub use bulk::{apply_bulk, BulkFailure, BulkReport};
pub use machine::{apply, approve, reject, ApprovalAction, Transition};
pub use store::{InMemoryStore, RegistrationStore};
