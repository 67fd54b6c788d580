//! Checkout Fixture Documents

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::iso::{self, Currency};
use serde::Deserialize;

use crate::fixtures::FixtureError;

/// Top-level checkout configuration document.
#[derive(Debug, Deserialize)]
pub struct CheckoutDocument {
    /// Map of product code -> product fixture
    pub catalogue: FxHashMap<String, ProductFixture>,

    /// Delivery rules, in any order
    pub delivery: Vec<DeliveryRuleFixture>,

    /// Offers, in application order
    #[serde(default)]
    pub offers: Vec<OfferFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Product price (e.g., "32.95 GBP")
    pub price: String,
}

/// Delivery Rule Fixture
#[derive(Debug, Deserialize)]
pub struct DeliveryRuleFixture {
    /// Minimum order amount (e.g., "50.00 GBP")
    pub threshold: String,

    /// Charge at or above the threshold (e.g., "2.95 GBP")
    pub charge: String,
}

/// Offer Fixture, tagged by `type`
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OfferFixture {
    /// Buy one, get the second half price
    SecondHalfPrice {
        /// Qualifying product code
        product: String,
    },

    /// Percentage off every matching item
    PercentageOff {
        /// Qualifying product code
        product: String,

        /// Discount percentage (e.g., "10%" or "0.1")
        percent: String,
    },
}

/// Parse price string (e.g., "2.99 GBP") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not a known ISO code.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(currency_code), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = iso::find(currency_code)
        .ok_or_else(|| FixtureError::UnknownCurrency(currency_code.to_string()))?;

    Ok((minor_units, currency))
}

/// Parse percentage string (e.g., "15%" or "0.15") into a `Percentage`
///
/// Accepts two formats:
/// - Percentage format: "15%" for 15%
/// - Decimal format: "0.15" for 15%
///
/// # Errors
///
/// Returns an error if the string cannot be parsed.
pub fn parse_percentage(s: &str) -> Result<Percentage, FixtureError> {
    let trimmed = s.trim();

    if let Some(percent_str) = trimmed.strip_suffix('%') {
        let value = percent_str
            .trim()
            .parse::<f64>()
            .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))?;

        Ok(Percentage::from(value / 100.0))
    } else {
        let value = trimmed
            .parse::<f64>()
            .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))?;

        Ok(Percentage::from(value))
    }
}
