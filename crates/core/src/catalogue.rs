//! Catalogue

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::products::Product;

/// Errors raised while building or querying a catalogue.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogueError {
    /// No product exists for the requested code.
    #[error("unknown product code: {0}")]
    UnknownProduct(String),

    /// Two products were registered under the same code.
    #[error("duplicate product code: {0}")]
    DuplicateCode(String),

    /// A product's currency differs from the catalogue currency.
    #[error("product {code} has currency {actual}, but catalogue has currency {expected}")]
    CurrencyMismatch {
        /// Code of the offending product.
        code: String,

        /// Catalogue currency.
        expected: &'static str,

        /// The product's currency.
        actual: &'static str,
    },

    /// No products were provided, so currency could not be determined.
    #[error("no products provided; cannot determine currency")]
    NoProducts,
}

/// Read-only index of products by code.
///
/// Every product in a catalogue shares one currency; the rest of the pricing
/// pipeline relies on that invariant.
#[derive(Debug)]
pub struct Catalogue<'a> {
    products: FxHashMap<String, Product<'a>>,
    currency: &'a Currency,
}

impl<'a> Catalogue<'a> {
    /// Build a catalogue from a sequence of products.
    ///
    /// Duplicate codes fail construction rather than letting the last entry
    /// win, so a misconfigured catalogue is rejected loudly.
    ///
    /// # Errors
    ///
    /// - [`CatalogueError::NoProducts`]: the sequence was empty.
    /// - [`CatalogueError::DuplicateCode`]: two products share a code.
    /// - [`CatalogueError::CurrencyMismatch`]: products mix currencies.
    pub fn new(products: impl IntoIterator<Item = Product<'a>>) -> Result<Self, CatalogueError> {
        let mut index = FxHashMap::default();
        let mut currency: Option<&'a Currency> = None;

        for product in products {
            let product_currency = product.price.currency();

            match currency {
                None => currency = Some(product_currency),
                Some(expected) if expected == product_currency => {}
                Some(expected) => {
                    return Err(CatalogueError::CurrencyMismatch {
                        code: product.code,
                        expected: expected.iso_alpha_code,
                        actual: product_currency.iso_alpha_code,
                    });
                }
            }

            let code = product.code.clone();

            if index.insert(code.clone(), product).is_some() {
                return Err(CatalogueError::DuplicateCode(code));
            }
        }

        let currency = currency.ok_or(CatalogueError::NoProducts)?;

        Ok(Self {
            products: index,
            currency,
        })
    }

    /// Look up a product by exact code.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::UnknownProduct`] when no product has the
    /// given code. There is no partial or fuzzy matching.
    pub fn find(&self, code: &str) -> Result<&Product<'a>, CatalogueError> {
        self.products
            .get(code)
            .ok_or_else(|| CatalogueError::UnknownProduct(code.to_string()))
    }

    /// The currency shared by every product in the catalogue.
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }

    /// Iterate over all products, in no particular order.
    pub fn products(&self) -> impl Iterator<Item = &Product<'a>> {
        self.products.values()
    }

    /// Number of products in the catalogue.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalogue holds no products. Always `false` for a
    /// successfully constructed catalogue.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
