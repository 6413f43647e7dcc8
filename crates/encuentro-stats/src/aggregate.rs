//! # Registration Rollups
//!
//! Aggregates a fetched set of registrations into the statistics every
//! dashboard view consumes: per-state, per-jurisdiction, and per-role
//! partitions, plus the global financial totals. Aggregation is always
//! recomputed from the full dataset after mutations — there is no
//! incremental update path.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use encuentro_core::{JurisdictionId, Money, Registration, RegistrationState, RoleId};

/// Counts and sums for one partition of the registration set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStats {
    /// Number of registrations in the partition.
    pub count: usize,
    /// Sum of agreed prices (projected funds).
    pub projected: Money,
    /// Sum of paid amounts (realized funds; non-zero only for approved
    /// registrations by invariant).
    pub realized: Money,
}

impl GroupStats {
    fn absorb(&mut self, registration: &Registration) {
        self.count += 1;
        self.projected = self.projected.saturating_add(registration.agreed_price());
        self.realized = self.realized.saturating_add(registration.amount_paid);
    }
}

/// The fixed three-way state partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatePartition {
    /// Registrations awaiting review.
    pub pending: GroupStats,
    /// Approved registrations.
    pub approved: GroupStats,
    /// Rejected registrations.
    pub rejected: GroupStats,
}

impl StatePartition {
    /// The partition for a given state.
    pub fn for_state(&self, state: RegistrationState) -> &GroupStats {
        match state {
            RegistrationState::Pending => &self.pending,
            RegistrationState::Approved => &self.approved,
            RegistrationState::Rejected => &self.rejected,
        }
    }

    fn for_state_mut(&mut self, state: RegistrationState) -> &mut GroupStats {
        match state {
            RegistrationState::Pending => &mut self.pending,
            RegistrationState::Approved => &mut self.approved,
            RegistrationState::Rejected => &mut self.rejected,
        }
    }
}

/// Optional narrowing applied before aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsFilter {
    /// Keep only registrations from this jurisdiction.
    pub jurisdiction: Option<JurisdictionId>,
    /// Keep only registrations in this role.
    pub role: Option<RoleId>,
    /// Keep only registrations in this state.
    pub state: Option<RegistrationState>,
}

impl StatsFilter {
    /// A filter that keeps everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Whether a registration passes the filter.
    pub fn matches(&self, registration: &Registration) -> bool {
        self.jurisdiction
            .map_or(true, |id| registration.jurisdiction_id == id)
            && self.role.map_or(true, |id| registration.role_id == id)
            && self.state.map_or(true, |s| registration.state == s)
    }
}

/// The aggregated statistics consumed by the dashboard views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationStats {
    /// Total registrations after filtering.
    pub total_count: usize,
    /// Per-state partition.
    pub by_state: StatePartition,
    /// Per-jurisdiction partition, in id order.
    pub by_jurisdiction: BTreeMap<JurisdictionId, GroupStats>,
    /// Per-role partition, in id order.
    pub by_role: BTreeMap<RoleId, GroupStats>,
    /// Realized funds: sum of paid amounts over approved registrations.
    pub collected: Money,
    /// Projected funds still pending review: sum of agreed prices over
    /// pending registrations.
    pub pending_projected: Money,
    /// Approved share of the total, in `[0, 1]`. Zero for an empty set,
    /// never NaN.
    pub approval_rate: f64,
}

/// Aggregate a registration set into [`RegistrationStats`].
///
/// Pure and total: malformed-but-well-typed input degrades to zero-valued
/// partitions rather than raising.
pub fn aggregate(registrations: &[Registration], filter: &StatsFilter) -> RegistrationStats {
    let mut stats = RegistrationStats::default();

    for registration in registrations.iter().filter(|r| filter.matches(r)) {
        stats.total_count += 1;
        stats.by_state.for_state_mut(registration.state).absorb(registration);
        stats
            .by_jurisdiction
            .entry(registration.jurisdiction_id)
            .or_default()
            .absorb(registration);
        stats
            .by_role
            .entry(registration.role_id)
            .or_default()
            .absorb(registration);

        match registration.state {
            RegistrationState::Approved => {
                stats.collected = stats.collected.saturating_add(registration.amount_paid);
            }
            RegistrationState::Pending => {
                stats.pending_projected = stats
                    .pending_projected
                    .saturating_add(registration.agreed_price());
            }
            RegistrationState::Rejected => {}
        }
    }

    stats.approval_rate = if stats.total_count == 0 {
        0.0
    } else {
        stats.by_state.approved.count as f64 / stats.total_count as f64
    };

    tracing::debug!(
        total = stats.total_count,
        approved = stats.by_state.approved.count,
        collected = %stats.collected,
        "aggregated registration statistics"
    );

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use encuentro_core::{EventId, RegistrantDetails};

    fn registration(
        jurisdiction_id: JurisdictionId,
        role_id: RoleId,
        state: RegistrationState,
        agreed: i64,
    ) -> Registration {
        let mut reg = Registration::new(
            EventId::new(),
            jurisdiction_id,
            role_id,
            RegistrantDetails {
                first_name: "Ana".to_string(),
                last_name: "Ruiz".to_string(),
                document: "1032456789".to_string(),
                email: "ana@example.org".to_string(),
            },
            false,
            Money::from_major(agreed),
        );
        reg.state = state;
        if state == RegistrationState::Approved {
            reg.amount_paid = reg.agreed_price();
        }
        reg
    }

    #[test]
    fn empty_input_yields_neutral_stats() {
        let stats = aggregate(&[], &StatsFilter::all());
        assert_eq!(stats.total_count, 0);
        assert_eq!(stats.collected, Money::ZERO);
        assert_eq!(stats.pending_projected, Money::ZERO);
        assert_eq!(stats.approval_rate, 0.0);
        assert!(stats.by_jurisdiction.is_empty());
    }

    #[test]
    fn partitions_by_state_with_totals() {
        let j = JurisdictionId::new();
        let r = RoleId::new();
        let regs = vec![
            registration(j, r, RegistrationState::Pending, 100_000),
            registration(j, r, RegistrationState::Pending, 80_000),
            registration(j, r, RegistrationState::Approved, 120_000),
            registration(j, r, RegistrationState::Rejected, 90_000),
        ];

        let stats = aggregate(&regs, &StatsFilter::all());
        assert_eq!(stats.total_count, 4);
        assert_eq!(stats.by_state.pending.count, 2);
        assert_eq!(stats.by_state.approved.count, 1);
        assert_eq!(stats.by_state.rejected.count, 1);
        assert_eq!(stats.collected, Money::from_major(120_000));
        assert_eq!(stats.pending_projected, Money::from_major(180_000));
        assert_eq!(stats.approval_rate, 0.25);
    }

    #[test]
    fn partition_counts_sum_to_total() {
        let regs: Vec<_> = (0..30)
            .map(|i| {
                let state = match i % 3 {
                    0 => RegistrationState::Pending,
                    1 => RegistrationState::Approved,
                    _ => RegistrationState::Rejected,
                };
                registration(JurisdictionId::new(), RoleId::new(), state, 50_000)
            })
            .collect();

        let stats = aggregate(&regs, &StatsFilter::all());
        let state_sum = stats.by_state.pending.count
            + stats.by_state.approved.count
            + stats.by_state.rejected.count;
        assert_eq!(state_sum, stats.total_count);

        let jurisdiction_sum: usize = stats.by_jurisdiction.values().map(|g| g.count).sum();
        assert_eq!(jurisdiction_sum, stats.total_count);

        let role_sum: usize = stats.by_role.values().map(|g| g.count).sum();
        assert_eq!(role_sum, stats.total_count);
    }

    #[test]
    fn rejected_registrations_contribute_nothing_financially() {
        let regs = vec![registration(
            JurisdictionId::new(),
            RoleId::new(),
            RegistrationState::Rejected,
            100_000,
        )];
        let stats = aggregate(&regs, &StatsFilter::all());
        assert_eq!(stats.collected, Money::ZERO);
        assert_eq!(stats.pending_projected, Money::ZERO);
        // The rejected partition still records the projected value.
        assert_eq!(stats.by_state.rejected.projected, Money::from_major(100_000));
        assert_eq!(stats.by_state.rejected.realized, Money::ZERO);
    }

    #[test]
    fn filter_narrows_by_jurisdiction_and_state() {
        let j1 = JurisdictionId::new();
        let j2 = JurisdictionId::new();
        let r = RoleId::new();
        let regs = vec![
            registration(j1, r, RegistrationState::Approved, 100_000),
            registration(j2, r, RegistrationState::Approved, 100_000),
            registration(j1, r, RegistrationState::Pending, 100_000),
        ];

        let filter = StatsFilter {
            jurisdiction: Some(j1),
            ..StatsFilter::all()
        };
        let stats = aggregate(&regs, &filter);
        assert_eq!(stats.total_count, 2);

        let filter = StatsFilter {
            jurisdiction: Some(j1),
            state: Some(RegistrationState::Approved),
            ..StatsFilter::all()
        };
        let stats = aggregate(&regs, &filter);
        assert_eq!(stats.total_count, 1);
        assert_eq!(stats.approval_rate, 1.0);
    }

    #[test]
    fn approval_rate_stays_in_unit_interval() {
        for approved in 0..=10usize {
            let regs: Vec<_> = (0..10)
                .map(|i| {
                    let state = if i < approved {
                        RegistrationState::Approved
                    } else {
                        RegistrationState::Pending
                    };
                    registration(JurisdictionId::new(), RoleId::new(), state, 10_000)
                })
                .collect();
            let stats = aggregate(&regs, &StatsFilter::all());
            assert!((0.0..=1.0).contains(&stats.approval_rate));
            assert!(!stats.approval_rate.is_nan());
        }
    }

    #[test]
    fn stats_serde_round_trip() {
        let regs = vec![registration(
            JurisdictionId::new(),
            RoleId::new(),
            RegistrationState::Approved,
            75_000,
        )];
        let stats = aggregate(&regs, &StatsFilter::all());
        let json = serde_json::to_string(&stats).unwrap();
        let parsed: RegistrationStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, parsed);
    }
}
