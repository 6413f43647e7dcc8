//! # Fundraising Goal Progress
//!
//! Derives goal-completion metrics from aggregator output. Realized
//! progress is capped at 100% — collected funds beyond the goal never
//! report above it — and the parallel "potential" metric shows the
//! best-case trajectory if every pending registration were approved,
//! displayed capped the same way.

use serde::{Deserialize, Serialize};

use encuentro_core::Money;

/// Goal completion as a percentage, capped at 100.
///
/// A non-positive goal makes the ratio undefined; the computation degrades
/// to the neutral 0.0 rather than reporting completion against no goal.
pub fn progress(collected: Money, goal: Money) -> f64 {
    if goal.cents() <= 0 {
        return 0.0;
    }
    (collected.cents() as f64 / goal.cents() as f64 * 100.0).min(100.0)
}

/// Goal-completion metrics for the dashboard tiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// The fundraising goal.
    pub goal: Money,
    /// Realized funds (sum of paid amounts over approved registrations).
    pub collected: Money,
    /// Best-case funds: collected plus the pending projection.
    pub potential: Money,
    /// Realized completion percentage, capped at 100.
    pub percent: f64,
    /// Best-case completion percentage, displayed capped at 100.
    pub potential_percent: f64,
    /// How much is still missing: `max(0, goal − collected)`.
    pub shortfall: Money,
}

impl GoalProgress {
    /// Derive the metrics from aggregator totals.
    pub fn measure(collected: Money, pending_projected: Money, goal: Money) -> Self {
        let potential = collected.saturating_add(pending_projected);
        Self {
            goal,
            collected,
            potential,
            percent: progress(collected, goal),
            potential_percent: progress(potential, goal),
            shortfall: goal.saturating_sub(collected).clamped_non_negative(),
        }
    }
}
