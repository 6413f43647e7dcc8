//! # Pricing Configuration
//!
//! The immutable snapshot of an event's pricing strategy: whether the base
//! price and the lodging surcharge are set globally for the event or per
//! jurisdiction. At most one configuration exists per event, enforced by
//! the [`EventDirectory`](crate::directory::EventDirectory).

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// How the base price is determined for a registrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    /// One base price applies to every jurisdiction.
    Global,
    /// Each jurisdiction carries its own base price.
    PerJurisdiction,
}

impl PricingMode {
    /// The canonical string name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::PerJurisdiction => "per_jurisdiction",
        }
    }
}

impl std::fmt::Display for PricingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the lodging surcharge is determined for a registrant who requests
/// lodging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LodgingMode {
    /// One lodging fee applies to every jurisdiction.
    Global,
    /// Each jurisdiction carries its own lodging fee.
    PerJurisdiction,
}

impl LodgingMode {
    /// The canonical string name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::PerJurisdiction => "per_jurisdiction",
        }
    }
}

impl std::fmt::Display for LodgingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event's pricing strategy snapshot.
///
/// `global_base_price` is consulted only when `mode` is
/// [`PricingMode::Global`]; `global_lodging_fee` only when `lodging_mode`
/// is [`LodgingMode::Global`]. The per-jurisdiction counterparts live on
/// each [`Jurisdiction`](crate::jurisdiction::Jurisdiction).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Base-price strategy.
    pub mode: PricingMode,
    /// Event-wide base price (global mode only).
    pub global_base_price: Money,
    /// Lodging-surcharge strategy.
    pub lodging_mode: LodgingMode,
    /// Event-wide lodging fee (global lodging mode only).
    pub global_lodging_fee: Money,
}

impl PricingConfig {
    /// A configuration with one event-wide base price and lodging fee.
    pub fn global(base_price: Money, lodging_fee: Money) -> Self {
        Self {
            mode: PricingMode::Global,
            global_base_price: base_price,
            lodging_mode: LodgingMode::Global,
            global_lodging_fee: lodging_fee,
        }
    }

    /// A configuration that defers both base price and lodging fee to each
    /// jurisdiction.
    pub fn per_jurisdiction() -> Self {
        Self {
            mode: PricingMode::PerJurisdiction,
            global_base_price: Money::ZERO,
            lodging_mode: LodgingMode::PerJurisdiction,
            global_lodging_fee: Money::ZERO,
        }
    }

    /// Override the base-price strategy.
    pub fn with_mode(mut self, mode: PricingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Override the lodging strategy.
    pub fn with_lodging_mode(mut self, lodging_mode: LodgingMode) -> Self {
        self.lodging_mode = lodging_mode;
        self
    }
}
