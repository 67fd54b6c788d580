//! Offers

use std::{fmt, sync::Arc};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::catalogue::{Catalogue, CatalogueError};

pub mod engine;
pub mod types;

/// Errors raised while evaluating an offer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OfferError {
    /// A product code referenced by the offer had no catalogue entry.
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    /// The discount amount exceeded the representable range.
    #[error("discount amount overflowed")]
    AmountOverflow,
}

/// A discount rule evaluated against the full item list and catalogue.
///
/// Implementations must return a non-negative discount in minor units;
/// fractions of a cent are allowed and survive until the basket's final
/// rounding. Offers are independent: none sees the effect of another, and
/// the result must not depend on item order. New offer shapes plug in by
/// implementing this trait; neither [`OfferEngine`](engine::OfferEngine) nor
/// the basket changes.
pub trait Offer: fmt::Debug {
    /// Discount this offer grants for the given items.
    ///
    /// # Errors
    ///
    /// - [`OfferError::Catalogue`]: a referenced product code is unknown.
    /// - [`OfferError::AmountOverflow`]: the amount overflowed.
    fn apply(&self, items: &[String], catalogue: &Catalogue<'_>) -> Result<Decimal, OfferError>;
}

/// Offer object held by the engine.
pub type SharedOffer<'a> = Arc<dyn Offer + 'a>;

/// Convert any offer implementation into a shared offer object.
pub fn offer<'a, O>(offer: O) -> SharedOffer<'a>
where
    O: Offer + 'a,
{
    Arc::new(offer)
}
