//! Products

use rusty_money::{Money, iso::Currency};

/// An immutable catalogue entry. Identity is the `code`, which is unique
/// within a [`Catalogue`](crate::catalogue::Catalogue).
#[derive(Debug, Clone)]
pub struct Product<'a> {
    /// Product code scanned at checkout (e.g. `R01`)
    pub code: String,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: Money<'a, Currency>,
}

impl<'a> Product<'a> {
    /// Create a new product.
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Money<'a, Currency>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price,
        }
    }
}
