//! Offer Engine

use rust_decimal::Decimal;

use crate::{
    catalogue::Catalogue,
    offers::{OfferError, SharedOffer},
};

/// Ordered collection of offers whose discounts are summed.
///
/// Offers are additive and independent; each sees the original item list,
/// never another offer's effect. Under exact arithmetic the configured order
/// does not change the sum.
#[derive(Debug, Default)]
pub struct OfferEngine<'a> {
    offers: Vec<SharedOffer<'a>>,
}

impl<'a> OfferEngine<'a> {
    /// Create an engine over the given offers.
    pub fn new(offers: Vec<SharedOffer<'a>>) -> Self {
        Self { offers }
    }

    /// The configured offers, in application order.
    pub fn offers(&self) -> &[SharedOffer<'a>] {
        &self.offers
    }

    /// Total discount for the given items, in minor units.
    ///
    /// A negative amount from a misbehaving offer is treated as zero, so no
    /// single offer can inflate the total.
    ///
    /// # Errors
    ///
    /// Returns the first [`OfferError`] surfaced by an offer.
    pub fn calculate_discount(
        &self,
        items: &[String],
        catalogue: &Catalogue<'_>,
    ) -> Result<Decimal, OfferError> {
        self.offers.iter().try_fold(Decimal::ZERO, |acc, offer| {
            let amount = offer.apply(items, catalogue)?.max(Decimal::ZERO);

            acc.checked_add(amount).ok_or(OfferError::AmountOverflow)
        })
    }
}
