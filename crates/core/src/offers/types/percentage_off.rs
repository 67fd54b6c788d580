//! Percentage Off Offer

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::{
    catalogue::Catalogue,
    offers::{Offer, OfferError},
    pricing,
};

/// Percentage discount on every matching item (e.g. "10% off Green Widgets").
///
/// The percentage is applied to the combined price of all matching items with
/// exact decimal arithmetic; any sub-cent remainder is resolved by the
/// basket's final rounding, not here.
#[derive(Debug, Clone)]
pub struct PercentageOffOffer {
    product_code: String,
    percent: Percentage,
}

impl PercentageOffOffer {
    /// Create the offer for a product code and percentage.
    pub fn new(product_code: impl Into<String>, percent: Percentage) -> Self {
        Self {
            product_code: product_code.into(),
            percent,
        }
    }

    /// The qualifying product code.
    pub fn product_code(&self) -> &str {
        &self.product_code
    }

    /// The discount percentage.
    pub fn percent(&self) -> Percentage {
        self.percent
    }
}

impl Offer for PercentageOffOffer {
    /// `percent * count * price`, in minor units.
    ///
    /// # Errors
    ///
    /// - [`OfferError::Catalogue`]: the configured code is not in the catalogue.
    /// - [`OfferError::AmountOverflow`]: the amount overflowed.
    fn apply(&self, items: &[String], catalogue: &Catalogue<'_>) -> Result<Decimal, OfferError> {
        let count = items
            .iter()
            .filter(|code| code.as_str() == self.product_code)
            .count();

        if count == 0 {
            return Ok(Decimal::ZERO);
        }

        let product = catalogue.find(&self.product_code)?;
        let matched_minor = Decimal::from(count)
            .checked_mul(pricing::minor_units(&product.price))
            .ok_or(OfferError::AmountOverflow)?;

        Ok(self.percent * matched_minor)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::GBP};
    use testresult::TestResult;

    use crate::{catalogue::CatalogueError, products::Product};

    use super::*;

    fn catalogue() -> Result<Catalogue<'static>, CatalogueError> {
        Catalogue::new(vec![
            Product::new("G01", "Green Widget", Money::from_minor(24_95, GBP)),
            Product::new("B01", "Blue Widget", Money::from_minor(7_95, GBP)),
        ])
    }

    fn items(codes: &[&str]) -> Vec<String> {
        codes.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn discounts_each_matching_item() -> TestResult {
        let offer = PercentageOffOffer::new("G01", Percentage::from(0.10));

        // 10% of 2 * 24.95 = 4.99, an exact cent amount here.
        assert_eq!(
            offer.apply(&items(&["G01", "G01", "B01"]), &catalogue()?)?,
            Decimal::from(499)
        );

        Ok(())
    }

    #[test]
    fn keeps_sub_cent_precision() -> TestResult {
        let offer = PercentageOffOffer::new("B01", Percentage::from(0.10));

        // 10% of 7.95 is 0.795, carried exactly.
        assert_eq!(
            offer.apply(&items(&["B01"]), &catalogue()?)?,
            Decimal::new(79_5, 1)
        );

        Ok(())
    }

    #[test]
    fn no_matching_items_means_no_discount() -> TestResult {
        let offer = PercentageOffOffer::new("G01", Percentage::from(0.10));

        assert_eq!(offer.apply(&items(&["B01"]), &catalogue()?)?, Decimal::ZERO);

        Ok(())
    }
}
