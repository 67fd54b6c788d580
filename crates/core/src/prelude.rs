//! Tally prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, BasketError},
    catalogue::{Catalogue, CatalogueError},
    delivery::{DeliveryChargeCalculator, DeliveryError, DeliveryRule},
    fixtures::{CheckoutFixture, FixtureError},
    offers::{
        Offer, OfferError, SharedOffer,
        engine::OfferEngine,
        offer,
        types::{PercentageOffOffer, SecondHalfPriceOffer},
    },
    pricing::SubtotalError,
    products::Product,
    receipt::Receipt,
};
