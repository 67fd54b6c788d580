//! Offer types

mod percentage_off;
mod second_half_price;

pub use percentage_off::PercentageOffOffer;
pub use second_half_price::SecondHalfPriceOffer;
