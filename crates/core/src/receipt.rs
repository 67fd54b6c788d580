//! Receipt

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::pricing;

/// Final price breakdown for a checked-out basket.
///
/// The discount is kept as an exact minor-unit decimal because half-price
/// offers on odd-cent products grant half-cent amounts that a [`Money`]
/// cannot hold; only the total has been rounded (truncated toward zero).
#[derive(Debug, Clone, Copy)]
pub struct Receipt<'a> {
    subtotal: Money<'a, Currency>,
    discount: Decimal,
    delivery: Money<'a, Currency>,
    total: Money<'a, Currency>,
}

impl<'a> Receipt<'a> {
    /// Create a receipt from the pipeline's computed figures.
    pub fn new(
        subtotal: Money<'a, Currency>,
        discount: Decimal,
        delivery: Money<'a, Currency>,
        total: Money<'a, Currency>,
    ) -> Self {
        Self {
            subtotal,
            discount,
            delivery,
            total,
        }
    }

    /// Sum of unit prices before any discount.
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Total offer discount, in exact minor units.
    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// Subtotal minus discount, in exact minor units; the basis for
    /// delivery-tier selection.
    pub fn discounted_subtotal(&self) -> Decimal {
        pricing::minor_units(&self.subtotal) - self.discount
    }

    /// Delivery charge selected for the discounted subtotal.
    pub fn delivery(&self) -> Money<'a, Currency> {
        self.delivery
    }

    /// Final rounded amount payable.
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;

    use super::*;

    #[test]
    fn accessors_return_values_from_constructor() {
        let receipt = Receipt::new(
            Money::from_minor(65_90, GBP),
            Decimal::new(1647_5, 1),
            Money::from_minor(4_95, GBP),
            Money::from_minor(54_37, GBP),
        );

        assert_eq!(receipt.subtotal(), Money::from_minor(65_90, GBP));
        assert_eq!(receipt.discount(), Decimal::new(1647_5, 1));
        assert_eq!(receipt.delivery(), Money::from_minor(4_95, GBP));
        assert_eq!(receipt.total(), Money::from_minor(54_37, GBP));
    }

    #[test]
    fn discounted_subtotal_is_subtotal_minus_discount() {
        let receipt = Receipt::new(
            Money::from_minor(65_90, GBP),
            Decimal::new(1647_5, 1),
            Money::from_minor(4_95, GBP),
            Money::from_minor(54_37, GBP),
        );

        assert_eq!(receipt.discounted_subtotal(), Decimal::new(4942_5, 1));
    }
}
