//! # encuentro-stats — Registration Reporting
//!
//! Turns a fetched set of registrations into the statistics every
//! dashboard view consumes. Before this crate the same rollups lived
//! duplicated, with minor variations, across more than ten views; they are
//! specified once here and recomputed from the full dataset on demand.
//!
//! - **Rollups** ([`aggregate`]): state/jurisdiction/role partitions,
//!   collected and pending-projected totals, approval rate.
//! - **Timeline** ([`timeline`]): dense daily submission series over a
//!   lookback window, week-over-week growth.
//! - **Goal** ([`goal`]): fundraising-goal completion, capped at 100%,
//!   with the best-case "potential" companion metric.
//!
//! All computation is pure and synchronous over already-fetched data;
//! callers own any polling loop.

pub mod aggregate;
pub mod goal;
pub mod timeline;

// Re-export primary types.
pub use aggregate::{aggregate, GroupStats, RegistrationStats, StatePartition, StatsFilter};
pub use goal::{progress, GoalProgress};
pub use timeline::{daily_series, weekly_growth, DailyBucket, LookbackWindow};
