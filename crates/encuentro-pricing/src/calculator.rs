//! # Price Calculation
//!
//! Computes the amount owed by a single registrant from the event's
//! pricing configuration, the registrant's jurisdiction and role, and the
//! lodging flag. The same computation serves registration creation (where
//! the result is stamped as the frozen agreed price) and projection
//! reporting.
//!
//! ## Algorithm
//!
//! 1. `base` — the event-wide base price, or the jurisdiction's own price
//!    under per-jurisdiction mode. An unresolved jurisdiction contributes
//!    a zero base (logged upstream, not an error).
//! 2. `discount` — the role's policy applied to the base. Not clamped
//!    here; a fixed discount may exceed the base.
//! 3. `lodging` — zero unless requested, else the event-wide or
//!    per-jurisdiction fee.
//! 4. `total = max(0, base − discount + lodging)` — the only clamping
//!    point, applied after lodging so an oversized discount can neither be
//!    refunded through lodging nor push the total negative.

use serde::{Deserialize, Serialize};

use encuentro_core::directory::ActiveContext;
use encuentro_core::{
    Jurisdiction, JurisdictionId, LodgingMode, Money, PricingConfig, PricingMode, RoleDefinition,
    RoleId,
};

use crate::resolver::{DefinitionIndex, Resolution};

/// The itemized outcome of one price computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Base price before adjustments.
    pub base: Money,
    /// Discount granted by the registrant's role (unclamped).
    pub discount: Money,
    /// Lodging surcharge (zero unless requested).
    pub lodging: Money,
    /// Amount owed: `max(0, base − discount + lodging)`.
    pub total: Money,
}

/// Compute a price breakdown from already-resolved references.
///
/// Pure and total: unresolved references degrade to zero contributions,
/// and the result is never negative.
pub fn compute_price(
    config: &PricingConfig,
    jurisdiction: Resolution<'_, Jurisdiction>,
    role: Resolution<'_, RoleDefinition>,
    lodging_requested: bool,
) -> PriceBreakdown {
    let base = match config.mode {
        PricingMode::Global => config.global_base_price,
        PricingMode::PerJurisdiction => jurisdiction
            .resolved()
            .map(|j| j.base_price)
            .unwrap_or(Money::ZERO),
    };

    let discount = role
        .resolved()
        .map(|r| r.discount.discount_for(base))
        .unwrap_or(Money::ZERO);

    let lodging = if !lodging_requested {
        Money::ZERO
    } else {
        match config.lodging_mode {
            LodgingMode::Global => config.global_lodging_fee,
            LodgingMode::PerJurisdiction => jurisdiction
                .resolved()
                .map(|j| j.lodging_fee)
                .unwrap_or(Money::ZERO),
        }
    };

    let total = base
        .saturating_sub(discount)
        .saturating_add(lodging)
        .clamped_non_negative();

    PriceBreakdown {
        base,
        discount,
        lodging,
        total,
    }
}

/// Binds a pricing configuration to a definition index so callers can
/// quote by identifier.
///
/// Stateless between calls; identical inputs always produce identical
/// breakdowns.
#[derive(Debug, Clone)]
pub struct PriceCalculator<'a> {
    config: &'a PricingConfig,
    index: DefinitionIndex<'a>,
}

impl<'a> PriceCalculator<'a> {
    /// Create a calculator over a configuration and index.
    pub fn new(config: &'a PricingConfig, index: DefinitionIndex<'a>) -> Self {
        Self { config, index }
    }

    /// Create a calculator over the active event's context.
    pub fn from_context(ctx: &ActiveContext<'a>) -> Self {
        Self {
            config: ctx.config,
            index: DefinitionIndex::from_context(ctx),
        }
    }

    /// The configuration this calculator prices against.
    pub fn config(&self) -> &PricingConfig {
        self.config
    }

    /// Quote the amount owed for a jurisdiction/role/lodging combination.
    ///
    /// Unresolved references degrade to zero contributions (logged by the
    /// resolver); no error is raised.
    pub fn quote(
        &self,
        jurisdiction_id: JurisdictionId,
        role_id: RoleId,
        lodging_requested: bool,
    ) -> PriceBreakdown {
        let jurisdiction = self.index.resolve_jurisdiction(jurisdiction_id);
        let role = self.index.resolve_role(role_id);
        let breakdown = compute_price(self.config, jurisdiction, role, lodging_requested);
        tracing::debug!(
            jurisdiction_id = %jurisdiction_id,
            role_id = %role_id,
            lodging = lodging_requested,
            total = %breakdown.total,
            "quoted registration price"
        );
        breakdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encuentro_core::{DiscountPolicy, EventId, Percentage};
    use proptest::prelude::*;

    fn fixtures(
        discount: DiscountPolicy,
    ) -> (PricingConfig, Jurisdiction, RoleDefinition) {
        let event_id = EventId::new();
        let config = PricingConfig::global(Money::from_major(100_000), Money::from_major(30_000));
        let jurisdiction = Jurisdiction::new(
            event_id,
            "Bogotá",
            Money::from_major(120_000),
            Money::from_major(25_000),
        )
        .unwrap();
        let role = RoleDefinition::new(event_id, "Joven", "joven", discount).unwrap();
        (config, jurisdiction, role)
    }

    #[test]
    fn percentage_discount_no_lodging() {
        let (config, jurisdiction, role) =
            fixtures(DiscountPolicy::Percentage(Percentage::from_percent(20)));
        let breakdown = compute_price(
            &config,
            Resolution::Resolved(&jurisdiction),
            Resolution::Resolved(&role),
            false,
        );
        assert_eq!(breakdown.base, Money::from_major(100_000));
        assert_eq!(breakdown.discount, Money::from_major(20_000));
        assert_eq!(breakdown.lodging, Money::ZERO);
        assert_eq!(breakdown.total, Money::from_major(80_000));
    }

    #[test]
    fn oversized_fixed_discount_clamps_to_zero() {
        let (config, jurisdiction, role) =
            fixtures(DiscountPolicy::Fixed(Money::from_major(150_000)));
        let breakdown = compute_price(
            &config,
            Resolution::Resolved(&jurisdiction),
            Resolution::Resolved(&role),
            false,
        );
        assert_eq!(breakdown.discount, Money::from_major(150_000));
        assert_eq!(breakdown.total, Money::ZERO);
    }

    #[test]
    fn lodging_fee_added_on_request() {
        let (config, jurisdiction, role) = fixtures(DiscountPolicy::None);
        let breakdown = compute_price(
            &config,
            Resolution::Resolved(&jurisdiction),
            Resolution::Resolved(&role),
            true,
        );
        assert_eq!(breakdown.lodging, Money::from_major(30_000));
        assert_eq!(breakdown.total, Money::from_major(130_000));
    }

    #[test]
    fn clamp_applies_after_lodging() {
        // base 100000, discount 250000, lodging 30000: the lodging fee is
        // consumed by the oversized discount and the total clamps at zero
        // rather than refunding anything.
        let (config, jurisdiction, role) =
            fixtures(DiscountPolicy::Fixed(Money::from_major(250_000)));
        let breakdown = compute_price(
            &config,
            Resolution::Resolved(&jurisdiction),
            Resolution::Resolved(&role),
            true,
        );
        assert_eq!(breakdown.total, Money::ZERO);

        // base 100000, discount 120000, lodging 30000: lodging still
        // enters the sum before clamping, leaving 10000 owed.
        let (config, jurisdiction, role) =
            fixtures(DiscountPolicy::Fixed(Money::from_major(120_000)));
        let breakdown = compute_price(
            &config,
            Resolution::Resolved(&jurisdiction),
            Resolution::Resolved(&role),
            true,
        );
        assert_eq!(breakdown.total, Money::from_major(10_000));
    }

    #[test]
    fn per_jurisdiction_mode_uses_jurisdiction_prices() {
        let (mut config, jurisdiction, role) = fixtures(DiscountPolicy::None);
        config.mode = PricingMode::PerJurisdiction;
        config.lodging_mode = LodgingMode::PerJurisdiction;

        let breakdown = compute_price(
            &config,
            Resolution::Resolved(&jurisdiction),
            Resolution::Resolved(&role),
            true,
        );
        assert_eq!(breakdown.base, Money::from_major(120_000));
        assert_eq!(breakdown.lodging, Money::from_major(25_000));
        assert_eq!(breakdown.total, Money::from_major(145_000));
    }

    #[test]
    fn unresolved_jurisdiction_degrades_to_zero_base() {
        let (mut config, _jurisdiction, role) = fixtures(DiscountPolicy::None);
        config.mode = PricingMode::PerJurisdiction;
        config.lodging_mode = LodgingMode::PerJurisdiction;

        let breakdown = compute_price(
            &config,
            Resolution::Unresolved,
            Resolution::Resolved(&role),
            true,
        );
        assert_eq!(breakdown.base, Money::ZERO);
        assert_eq!(breakdown.lodging, Money::ZERO);
        assert_eq!(breakdown.total, Money::ZERO);
    }

    #[test]
    fn unresolved_role_degrades_to_zero_discount() {
        let (config, jurisdiction, _role) =
            fixtures(DiscountPolicy::Percentage(Percentage::from_percent(50)));
        let role: Resolution<'_, RoleDefinition> = Resolution::Unresolved;
        let breakdown = compute_price(&config, Resolution::Resolved(&jurisdiction), role, false);
        assert_eq!(breakdown.discount, Money::ZERO);
        assert_eq!(breakdown.total, Money::from_major(100_000));
    }

    #[test]
    fn calculator_quotes_by_identifier() {
        let (config, jurisdiction, role) =
            fixtures(DiscountPolicy::Percentage(Percentage::from_percent(20)));
        let index = DefinitionIndex::new([&jurisdiction], [&role]);
        let calculator = PriceCalculator::new(&config, index);

        let breakdown = calculator.quote(jurisdiction.id, role.id, false);
        assert_eq!(breakdown.total, Money::from_major(80_000));

        // Unknown role id: quote still succeeds with a zero discount.
        let breakdown = calculator.quote(jurisdiction.id, RoleId::new(), false);
        assert_eq!(breakdown.total, Money::from_major(100_000));
    }

    #[test]
    fn breakdown_serde_round_trip() {
        let breakdown = PriceBreakdown {
            base: Money::from_major(100_000),
            discount: Money::from_major(20_000),
            lodging: Money::ZERO,
            total: Money::from_major(80_000),
        };
        let json = serde_json::to_string(&breakdown).unwrap();
        let parsed: PriceBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(breakdown, parsed);
    }

    proptest! {
        #[test]
        fn total_is_never_negative(
            base in 0i64..2_000_000,
            fixed in 0i64..4_000_000,
            lodging in 0i64..1_000_000,
            requested in any::<bool>(),
        ) {
            let event_id = EventId::new();
            let config = PricingConfig::global(
                Money::from_major(base),
                Money::from_major(lodging),
            );
            let jurisdiction =
                Jurisdiction::new(event_id, "J", Money::ZERO, Money::ZERO).unwrap();
            let role = RoleDefinition::new(
                event_id,
                "R",
                "r",
                DiscountPolicy::Fixed(Money::from_major(fixed)),
            )
            .unwrap();

            let breakdown = compute_price(
                &config,
                Resolution::Resolved(&jurisdiction),
                Resolution::Resolved(&role),
                requested,
            );
            prop_assert!(!breakdown.total.is_negative());

            // When the raw expression is non-negative it is the total.
            let raw = breakdown.base.cents() - breakdown.discount.cents()
                + breakdown.lodging.cents();
            if raw >= 0 {
                prop_assert_eq!(breakdown.total.cents(), raw);
            } else {
                prop_assert_eq!(breakdown.total, Money::ZERO);
            }
        }
    }
}
