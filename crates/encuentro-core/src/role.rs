//! # Role Definitions & Discount Policy
//!
//! A role (registrant category) carries a discount policy as a tagged
//! union: no discount, a percentage of the base price, or a fixed amount.
//! The original data model stored both discount values in a flat record
//! with an explicit method selector and ignored the inactive one;
//! [`DiscountPolicy::from_stored`] ingests that shape at the boundary and
//! drops the inactive value so it can never be consulted afterwards.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::{EventId, RoleId, RoleSlug};
use crate::money::{Money, Percentage};

/// The stored discount-method selector of the flat legacy record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountMethod {
    /// No discount applies.
    None,
    /// The percentage value applies.
    Percentage,
    /// The fixed value applies.
    Fixed,
}

impl DiscountMethod {
    /// The canonical string name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Percentage => "percentage",
            Self::Fixed => "fixed",
        }
    }
}

impl std::fmt::Display for DiscountMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role's discount policy.
///
/// Exactly one rule is representable at a time; there is no inactive
/// stored value to ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountPolicy {
    /// No discount.
    None,
    /// A percentage of the base price.
    Percentage(Percentage),
    /// A fixed amount, independent of the base price.
    Fixed(Money),
}

impl DiscountPolicy {
    /// Build the policy from the flat stored shape: an explicit method
    /// selector plus both stored values. The inactive value is dropped
    /// here, never zeroed in place and never consulted again.
    pub fn from_stored(method: DiscountMethod, percentage: Percentage, fixed: Money) -> Self {
        match method {
            DiscountMethod::None => Self::None,
            DiscountMethod::Percentage => Self::Percentage(percentage),
            DiscountMethod::Fixed => Self::Fixed(fixed),
        }
    }

    /// The discount this policy grants against a base price.
    ///
    /// Not clamped to the base: a fixed discount larger than the base is
    /// returned as-is, and the price calculator clamps the final total.
    pub fn discount_for(&self, base: Money) -> Money {
        match self {
            Self::None => Money::ZERO,
            Self::Percentage(pct) => pct.apply(base),
            Self::Fixed(amount) => *amount,
        }
    }

    /// The selector this policy corresponds to in the stored shape.
    pub fn method(&self) -> DiscountMethod {
        match self {
            Self::None => DiscountMethod::None,
            Self::Percentage(_) => DiscountMethod::Percentage,
            Self::Fixed(_) => DiscountMethod::Fixed,
        }
    }
}

/// A registrant category within an event, carrying its discount policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinition {
    /// Unique role identifier.
    pub id: RoleId,
    /// The event this role belongs to.
    pub event_id: EventId,
    /// Display name.
    pub name: String,
    /// URL-safe slug, unique within the event.
    pub slug: RoleSlug,
    /// The discount rule for registrants in this role.
    pub discount: DiscountPolicy,
    /// Display color for dashboard charts (hex string).
    pub color: String,
}

impl RoleDefinition {
    /// Create a new role definition.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] if the name is empty, or
    /// [`ValidationError::InvalidRoleSlug`] if the slug is malformed.
    pub fn new(
        event_id: EventId,
        name: impl Into<String>,
        slug: impl Into<String>,
        discount: DiscountPolicy,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName { entity: "role" });
        }
        Ok(Self {
            id: RoleId::new(),
            event_id,
            name,
            slug: RoleSlug::new(slug)?,
            discount,
            color: "#888888".to_string(),
        })
    }

    /// Builder: set the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}
