//! Pricing arithmetic
//!
//! Exact minor-unit arithmetic shared by the pipeline. Amounts that may carry
//! sub-cent precision travel as [`Decimal`]; rounding happens exactly once,
//! in [`truncate_to_minor`].

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::catalogue::{Catalogue, CatalogueError};

/// Errors that can occur while summing item prices.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubtotalError {
    /// An item code had no catalogue entry.
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    /// The sum exceeded the representable range.
    #[error("subtotal overflowed minor-unit range")]
    AmountOverflow,
}

/// Sum the unit prices of the given item codes, in minor units.
///
/// Duplicate codes are counted once per occurrence; the result does not
/// depend on item order.
///
/// # Errors
///
/// - [`SubtotalError::Catalogue`]: an item code is not in the catalogue.
/// - [`SubtotalError::AmountOverflow`]: the sum overflowed.
pub fn subtotal(items: &[String], catalogue: &Catalogue<'_>) -> Result<i64, SubtotalError> {
    items.iter().try_fold(0_i64, |acc, code| {
        let product = catalogue.find(code)?;

        acc.checked_add(product.price.to_minor_units())
            .ok_or(SubtotalError::AmountOverflow)
    })
}

/// A money value as an exact minor-unit decimal.
pub fn minor_units(money: &Money<'_, Currency>) -> Decimal {
    Decimal::from(money.to_minor_units())
}

/// Drop sub-cent precision from a minor-unit amount, truncating toward zero.
///
/// This is the pipeline's single rounding policy: a raw total of 5437.5
/// minor units becomes 5437, never 5438. Returns `None` when the result does
/// not fit in `i64`.
pub fn truncate_to_minor(amount_minor: Decimal) -> Option<i64> {
    amount_minor
        .round_dp_with_strategy(0, RoundingStrategy::ToZero)
        .to_i64()
}
