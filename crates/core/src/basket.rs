//! Basket

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    catalogue::{Catalogue, CatalogueError},
    delivery::DeliveryChargeCalculator,
    offers::{OfferError, engine::OfferEngine},
    pricing::{self, SubtotalError},
    receipt::Receipt,
};

/// Errors related to basket construction or totals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BasketError {
    /// The delivery schedule's currency differs from the catalogue's.
    #[error("delivery schedule currency {actual} does not match catalogue currency {expected}")]
    CurrencyMismatch {
        /// Catalogue currency.
        expected: &'static str,

        /// Delivery schedule currency.
        actual: &'static str,
    },

    /// An item price could not be summed.
    #[error(transparent)]
    Subtotal(#[from] SubtotalError),

    /// An offer failed to evaluate.
    #[error(transparent)]
    Offer(#[from] OfferError),

    /// The final total cannot be represented in minor units.
    #[error("total cannot be represented in minor units")]
    AmountOutOfRange,
}

/// One checkout: an ordered sequence of added product codes priced against
/// an immutable catalogue, offer engine and delivery schedule.
///
/// The configuration trio is only ever read, so any number of baskets may
/// borrow it concurrently; the basket itself is the single mutable piece and
/// is not meant to be shared.
#[derive(Debug)]
pub struct Basket<'a> {
    catalogue: &'a Catalogue<'a>,
    delivery: &'a DeliveryChargeCalculator<'a>,
    offers: &'a OfferEngine<'a>,
    items: Vec<String>,
}

impl<'a> Basket<'a> {
    /// Create an empty basket over the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::CurrencyMismatch`] if the delivery schedule is
    /// not in the catalogue currency.
    pub fn new(
        catalogue: &'a Catalogue<'a>,
        delivery: &'a DeliveryChargeCalculator<'a>,
        offers: &'a OfferEngine<'a>,
    ) -> Result<Self, BasketError> {
        let expected = catalogue.currency();
        let actual = delivery.currency();

        if expected != actual {
            return Err(BasketError::CurrencyMismatch {
                expected: expected.iso_alpha_code,
                actual: actual.iso_alpha_code,
            });
        }

        Ok(Self {
            catalogue,
            delivery,
            offers,
            items: Vec::new(),
        })
    }

    /// Add a product to the basket by code.
    ///
    /// The code is validated against the catalogue first and appended only on
    /// success; an invalid code leaves the basket untouched. This is the sole
    /// validation point, so the item sequence never holds an unknown code.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::UnknownProduct`] for a code with no
    /// catalogue entry.
    pub fn add(&mut self, code: &str) -> Result<(), CatalogueError> {
        self.catalogue.find(code)?;
        self.items.push(code.to_string());

        Ok(())
    }

    /// Added product codes, in insertion order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of items in the basket.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the basket holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Price the basket and return the full breakdown.
    ///
    /// The pipeline: subtotal, minus the summed offer discount, selects a
    /// delivery tier; subtotal − discount + delivery is then truncated toward
    /// zero at the cent. Sub-cent precision from discounting is carried
    /// exactly up to that single rounding step, so a raw total of 54.375
    /// prices as 54.37.
    ///
    /// The computation is pure: it depends only on the configuration and the
    /// item sequence, and repeated calls return identical results.
    ///
    /// # Errors
    ///
    /// - [`BasketError::Subtotal`]: an item could not be summed.
    /// - [`BasketError::Offer`]: an offer failed to evaluate.
    /// - [`BasketError::AmountOutOfRange`]: an amount left the representable
    ///   range.
    pub fn receipt(&self) -> Result<Receipt<'a>, BasketError> {
        let subtotal_minor = pricing::subtotal(&self.items, self.catalogue)?;
        let discount = self
            .offers
            .calculate_discount(&self.items, self.catalogue)?;

        let discounted = Decimal::from(subtotal_minor)
            .checked_sub(discount)
            .ok_or(BasketError::AmountOutOfRange)?;

        let delivery = self.delivery.charge_for(discounted);

        let raw_total = discounted
            .checked_add(pricing::minor_units(&delivery))
            .ok_or(BasketError::AmountOutOfRange)?;
        let total_minor = pricing::truncate_to_minor(raw_total).ok_or(BasketError::AmountOutOfRange)?;

        let currency = self.catalogue.currency();

        Ok(Receipt::new(
            Money::from_minor(subtotal_minor, currency),
            discount,
            delivery,
            Money::from_minor(total_minor, currency),
        ))
    }

    /// Final amount payable for the basket.
    ///
    /// # Errors
    ///
    /// As [`Basket::receipt`].
    pub fn total(&self) -> Result<Money<'a, Currency>, BasketError> {
        Ok(self.receipt()?.total())
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, USD};
    use testresult::TestResult;

    use crate::{
        delivery::DeliveryRule,
        offers::{offer, types::SecondHalfPriceOffer},
        products::Product,
    };

    use super::*;

    fn catalogue() -> Result<Catalogue<'static>, CatalogueError> {
        Catalogue::new(vec![
            Product::new("R01", "Red Widget", Money::from_minor(32_95, GBP)),
            Product::new("G01", "Green Widget", Money::from_minor(24_95, GBP)),
            Product::new("B01", "Blue Widget", Money::from_minor(7_95, GBP)),
        ])
    }

    fn delivery() -> Result<DeliveryChargeCalculator<'static>, crate::delivery::DeliveryError> {
        DeliveryChargeCalculator::new(
            GBP,
            vec![
                DeliveryRule::new(Money::from_minor(90_00, GBP), Money::from_minor(0, GBP)),
                DeliveryRule::new(Money::from_minor(50_00, GBP), Money::from_minor(2_95, GBP)),
                DeliveryRule::new(Money::from_minor(0, GBP), Money::from_minor(4_95, GBP)),
            ],
        )
    }

    fn engine() -> OfferEngine<'static> {
        OfferEngine::new(vec![offer(SecondHalfPriceOffer::new("R01"))])
    }

    #[test]
    fn invalid_code_leaves_basket_unchanged() -> TestResult {
        let catalogue = catalogue()?;
        let delivery = delivery()?;
        let engine = engine();
        let mut basket = Basket::new(&catalogue, &delivery, &engine)?;

        basket.add("B01")?;

        assert!(matches!(
            basket.add("UNKNOWN"),
            Err(CatalogueError::UnknownProduct(_))
        ));
        assert_eq!(basket.len(), 1);
        assert_eq!(basket.items(), ["B01".to_string()]);

        Ok(())
    }

    #[test]
    fn empty_basket_pays_the_catch_all_delivery_charge() -> TestResult {
        let catalogue = catalogue()?;
        let delivery = delivery()?;
        let engine = engine();
        let basket = Basket::new(&catalogue, &delivery, &engine)?;

        assert!(basket.is_empty());
        assert_eq!(basket.total()?, Money::from_minor(4_95, GBP));

        Ok(())
    }

    #[test]
    fn repeated_totals_are_identical() -> TestResult {
        let catalogue = catalogue()?;
        let delivery = delivery()?;
        let engine = engine();
        let mut basket = Basket::new(&catalogue, &delivery, &engine)?;

        basket.add("R01")?;
        basket.add("R01")?;

        let first = basket.total()?;
        let second = basket.total()?;

        assert_eq!(first, second);
        assert_eq!(basket.len(), 2);

        Ok(())
    }

    #[test]
    fn receipt_carries_exact_discount_and_rounded_total() -> TestResult {
        let catalogue = catalogue()?;
        let delivery = delivery()?;
        let engine = engine();
        let mut basket = Basket::new(&catalogue, &delivery, &engine)?;

        basket.add("R01")?;
        basket.add("R01")?;

        let receipt = basket.receipt()?;

        assert_eq!(receipt.subtotal(), Money::from_minor(65_90, GBP));
        assert_eq!(receipt.discount(), Decimal::new(1647_5, 1));
        assert_eq!(receipt.discounted_subtotal(), Decimal::new(4942_5, 1));
        assert_eq!(receipt.delivery(), Money::from_minor(4_95, GBP));
        // Raw total 54.375 truncates to 54.37.
        assert_eq!(receipt.total(), Money::from_minor(54_37, GBP));

        Ok(())
    }

    #[test]
    fn construction_rejects_foreign_delivery_schedule() -> TestResult {
        let catalogue = catalogue()?;
        let delivery = DeliveryChargeCalculator::new(
            USD,
            vec![DeliveryRule::new(
                Money::from_minor(0, USD),
                Money::from_minor(4_95, USD),
            )],
        )?;
        let engine = engine();

        assert!(matches!(
            Basket::new(&catalogue, &delivery, &engine),
            Err(BasketError::CurrencyMismatch {
                expected: "GBP",
                actual: "USD",
            })
        ));

        Ok(())
    }
}
