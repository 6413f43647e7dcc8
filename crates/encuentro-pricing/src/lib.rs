//! # encuentro-pricing — Price Computation
//!
//! Computes the amount owed by a single registrant. The same engine serves
//! registration creation (the result is stamped as the frozen agreed
//! price) and projection reporting, which is what previously lived
//! duplicated across the dashboard views.
//!
//! - **Resolver** ([`resolver`]): id-keyed index over one event's
//!   jurisdiction and role definitions, with lookup misses surfaced as an
//!   explicit [`Resolution::Unresolved`] and logged.
//! - **Calculator** ([`calculator`]): the base/discount/lodging breakdown
//!   with the single non-negative clamp applied after lodging.
//!
//! Everything here is pure and synchronous: no I/O, no clocks, no internal
//! state between calls.

pub mod calculator;
pub mod resolver;

// Re-export primary types.
pub use calculator::{compute_price, PriceBreakdown, PriceCalculator};
pub use resolver::{DefinitionIndex, Resolution};
