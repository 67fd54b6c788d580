//! Delivery charges

use std::cmp::Reverse;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::pricing;

/// Errors raised while building a delivery schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeliveryError {
    /// A rule's threshold or charge currency differs from the schedule currency.
    #[error("delivery rule has currency {actual}, but schedule has currency {expected}")]
    CurrencyMismatch {
        /// Schedule currency.
        expected: &'static str,

        /// The rule's currency.
        actual: &'static str,
    },
}

/// One tier of the delivery schedule: orders at or above `threshold` pay
/// `charge`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeliveryRule<'a> {
    threshold: Money<'a, Currency>,
    charge: Money<'a, Currency>,
}

impl<'a> DeliveryRule<'a> {
    /// Create a rule from a threshold and the charge applied above it.
    pub fn new(threshold: Money<'a, Currency>, charge: Money<'a, Currency>) -> Self {
        Self { threshold, charge }
    }

    /// Minimum order amount for this tier.
    pub fn threshold(&self) -> Money<'a, Currency> {
        self.threshold
    }

    /// Delivery charge for this tier.
    pub fn charge(&self) -> Money<'a, Currency> {
        self.charge
    }
}

/// Tiered delivery-charge schedule.
///
/// Rules are held sorted descending by threshold; the first rule whose
/// threshold the amount meets supplies the charge. A sane schedule includes a
/// zero-threshold catch-all tier.
#[derive(Debug)]
pub struct DeliveryChargeCalculator<'a> {
    currency: &'a Currency,
    rules: SmallVec<[DeliveryRule<'a>; 3]>,
}

impl<'a> DeliveryChargeCalculator<'a> {
    /// Build a schedule from rules in any order.
    ///
    /// The sort is stable, so if two rules share a threshold the one listed
    /// first wins.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::CurrencyMismatch`] if any rule's threshold or
    /// charge is not in `currency`.
    pub fn new(
        currency: &'a Currency,
        rules: impl IntoIterator<Item = DeliveryRule<'a>>,
    ) -> Result<Self, DeliveryError> {
        let mut rules: SmallVec<[DeliveryRule<'a>; 3]> = rules.into_iter().collect();

        for rule in &rules {
            for money in [rule.threshold(), rule.charge()] {
                if money.currency() != currency {
                    return Err(DeliveryError::CurrencyMismatch {
                        expected: currency.iso_alpha_code,
                        actual: money.currency().iso_alpha_code,
                    });
                }
            }
        }

        rules.sort_by_key(|rule| Reverse(rule.threshold().to_minor_units()));

        Ok(Self { currency, rules })
    }

    /// The schedule currency.
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }

    /// Rules sorted descending by threshold.
    pub fn rules(&self) -> &[DeliveryRule<'a>] {
        &self.rules
    }

    /// Charge for an order amount, given in minor units.
    ///
    /// The amount is the *discounted* subtotal and may carry sub-cent
    /// precision. Returns the charge of the highest-threshold rule whose
    /// threshold the amount meets, or zero when no rule matches (for example
    /// a negative amount with no catch-all tier).
    pub fn charge_for(&self, amount_minor: Decimal) -> Money<'a, Currency> {
        self.rules
            .iter()
            .find(|rule| pricing::minor_units(&rule.threshold()) <= amount_minor)
            .map_or_else(|| Money::from_minor(0, self.currency), DeliveryRule::charge)
    }
}
