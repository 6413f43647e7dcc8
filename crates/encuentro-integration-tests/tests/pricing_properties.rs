//! Property tests for the pricing and reporting invariants: totals never
//! go negative, the clamp identity holds, frozen prices survive
//! reconfiguration, and partition counts always sum to the total.

use proptest::prelude::*;

use encuentro_core::{
    DiscountPolicy, EventId, Jurisdiction, LodgingMode, Money, Percentage, PricingConfig,
    PricingMode, RegistrantDetails, Registration, RegistrationState, RoleDefinition,
};
use encuentro_pricing::{compute_price, DefinitionIndex, PriceCalculator, Resolution};
use encuentro_stats::{aggregate, progress, StatsFilter};

fn arb_discount() -> impl Strategy<Value = DiscountPolicy> {
    prop_oneof![
        Just(DiscountPolicy::None),
        (0i64..=200).prop_map(|p| DiscountPolicy::Percentage(Percentage::from_percent(p))),
        (0i64..3_000_000).prop_map(|f| DiscountPolicy::Fixed(Money::from_major(f))),
    ]
}

fn arb_config() -> impl Strategy<Value = PricingConfig> {
    (
        prop_oneof![Just(PricingMode::Global), Just(PricingMode::PerJurisdiction)],
        prop_oneof![Just(LodgingMode::Global), Just(LodgingMode::PerJurisdiction)],
        0i64..2_000_000,
        0i64..500_000,
    )
        .prop_map(|(mode, lodging_mode, base, fee)| {
            PricingConfig::global(Money::from_major(base), Money::from_major(fee))
                .with_mode(mode)
                .with_lodging_mode(lodging_mode)
        })
}

proptest! {
    #[test]
    fn total_never_negative_and_clamp_identity(
        config in arb_config(),
        discount in arb_discount(),
        j_base in 0i64..2_000_000,
        j_fee in 0i64..500_000,
        lodging in any::<bool>(),
    ) {
        let event_id = EventId::new();
        let jurisdiction = Jurisdiction::new(
            event_id,
            "Prop",
            Money::from_major(j_base),
            Money::from_major(j_fee),
        )
        .unwrap();
        let role = RoleDefinition::new(event_id, "Prop", "prop", discount).unwrap();

        let breakdown = compute_price(
            &config,
            Resolution::Resolved(&jurisdiction),
            Resolution::Resolved(&role),
            lodging,
        );

        prop_assert!(!breakdown.total.is_negative());

        let raw = breakdown.base.cents() - breakdown.discount.cents() + breakdown.lodging.cents();
        if raw >= 0 {
            prop_assert_eq!(breakdown.total.cents(), raw);
        } else {
            prop_assert_eq!(breakdown.total, Money::ZERO);
        }

        // Lodging contributes only when requested.
        if !lodging {
            prop_assert_eq!(breakdown.lodging, Money::ZERO);
        }
    }

    #[test]
    fn reconfiguration_never_touches_agreed_price(
        first in arb_config(),
        second in arb_config(),
        discount in arb_discount(),
    ) {
        let event_id = EventId::new();
        let jurisdiction = Jurisdiction::new(
            event_id,
            "Prop",
            Money::from_major(150_000),
            Money::from_major(20_000),
        )
        .unwrap();
        let role = RoleDefinition::new(event_id, "Prop", "prop", discount).unwrap();

        let index = DefinitionIndex::new([&jurisdiction], [&role]);
        let quoted = PriceCalculator::new(&first, index.clone())
            .quote(jurisdiction.id, role.id, true);

        let registration = Registration::new(
            event_id,
            jurisdiction.id,
            role.id,
            RegistrantDetails {
                first_name: "Prop".to_string(),
                last_name: "Prueba".to_string(),
                document: "1".to_string(),
                email: "prop@example.org".to_string(),
            },
            true,
            quoted.total,
        );

        // Re-quoting under a different configuration changes nothing about
        // the existing registration.
        let _requoted = PriceCalculator::new(&second, index)
            .quote(jurisdiction.id, role.id, true);
        prop_assert_eq!(registration.agreed_price(), quoted.total);
    }

    #[test]
    fn partition_counts_sum_and_rate_bounded(
        states in proptest::collection::vec(0u8..3, 0..60),
    ) {
        let regs: Vec<Registration> = states
            .iter()
            .map(|s| {
                let mut reg = Registration::new(
                    EventId::new(),
                    encuentro_core::JurisdictionId::new(),
                    encuentro_core::RoleId::new(),
                    RegistrantDetails {
                        first_name: "Prop".to_string(),
                        last_name: "Prueba".to_string(),
                        document: "1".to_string(),
                        email: "prop@example.org".to_string(),
                    },
                    false,
                    Money::from_major(10_000),
                );
                reg.state = match s {
                    0 => RegistrationState::Pending,
                    1 => RegistrationState::Approved,
                    _ => RegistrationState::Rejected,
                };
                if reg.state == RegistrationState::Approved {
                    reg.amount_paid = reg.agreed_price();
                }
                reg
            })
            .collect();

        let stats = aggregate(&regs, &StatsFilter::all());

        let state_sum = stats.by_state.pending.count
            + stats.by_state.approved.count
            + stats.by_state.rejected.count;
        prop_assert_eq!(state_sum, stats.total_count);
        prop_assert_eq!(
            stats.by_jurisdiction.values().map(|g| g.count).sum::<usize>(),
            stats.total_count
        );
        prop_assert_eq!(
            stats.by_role.values().map(|g| g.count).sum::<usize>(),
            stats.total_count
        );

        prop_assert!((0.0..=1.0).contains(&stats.approval_rate));
        prop_assert!(!stats.approval_rate.is_nan());
    }

    #[test]
    fn goal_progress_capped(
        collected in 0i64..10_000_000,
        goal in 0i64..5_000_000,
    ) {
        let percent = progress(Money::from_major(collected), Money::from_major(goal));
        prop_assert!(percent <= 100.0);
        prop_assert!(percent >= 0.0);
    }
}
