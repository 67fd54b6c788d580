//! Second Half Price Offer
//!
//! "Buy one, get the second half price" on a single product: every complete
//! pair of matching items is discounted by half the unit price. An odd item
//! out contributes nothing.

use rust_decimal::Decimal;

use crate::{
    catalogue::Catalogue,
    offers::{Offer, OfferError},
    pricing,
};

/// Pair discount on one product code.
#[derive(Debug, Clone)]
pub struct SecondHalfPriceOffer {
    product_code: String,
}

impl SecondHalfPriceOffer {
    /// Create the offer for a product code.
    pub fn new(product_code: impl Into<String>) -> Self {
        Self {
            product_code: product_code.into(),
        }
    }

    /// The qualifying product code.
    pub fn product_code(&self) -> &str {
        &self.product_code
    }
}

impl Offer for SecondHalfPriceOffer {
    /// `floor(count / 2) * price / 2`, in minor units.
    ///
    /// Half the price of an odd-cent product is a half-cent amount; it is
    /// returned exactly, not rounded here.
    ///
    /// # Errors
    ///
    /// - [`OfferError::Catalogue`]: the configured code is not in the catalogue.
    /// - [`OfferError::AmountOverflow`]: the amount overflowed.
    fn apply(&self, items: &[String], catalogue: &Catalogue<'_>) -> Result<Decimal, OfferError> {
        let pairs = items
            .iter()
            .filter(|code| code.as_str() == self.product_code)
            .count()
            / 2;

        if pairs == 0 {
            return Ok(Decimal::ZERO);
        }

        let product = catalogue.find(&self.product_code)?;
        let half_price = pricing::minor_units(&product.price) / Decimal::TWO;

        Decimal::from(pairs)
            .checked_mul(half_price)
            .ok_or(OfferError::AmountOverflow)
    }
}
