//! # encuentro-cli — CLI Tool for Encuentro
//!
//! Provides the `encuentro` command-line interface: the demand-pull
//! invocation path over a local JSON dataset file holding the same records
//! the dashboards fetch from the data store.
//!
//! ## Subcommands
//!
//! - `encuentro quote` — Price a jurisdiction/role/lodging combination
//!   under the active event's configuration.
//! - `encuentro report` — Rollups, goal progress, daily series, and weekly
//!   growth for the active event.
//! - `encuentro review` — Approve or reject registrations in bulk, with
//!   per-record outcomes and partial-success semantics.
//!
//! All semantics live in the library crates; this crate is argument
//! parsing, dataset I/O, and presentation.

pub mod dataset;
pub mod quote;
pub mod report;
pub mod review;
