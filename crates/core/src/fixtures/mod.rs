//! Fixtures
//!
//! YAML checkout configuration: a catalogue, a delivery schedule and a list
//! of offers, parsed into ready-to-use pipeline components. Consumers embed
//! fixture files with `include_str!`; this module never touches the
//! filesystem.

use rusty_money::Money;
use thiserror::Error;

use crate::{
    basket::{Basket, BasketError},
    catalogue::{Catalogue, CatalogueError},
    delivery::{DeliveryChargeCalculator, DeliveryError, DeliveryRule},
    fixtures::products::{
        CheckoutDocument, DeliveryRuleFixture, OfferFixture, ProductFixture, parse_percentage,
        parse_price,
    },
    offers::{
        SharedOffer,
        engine::OfferEngine,
        offer,
        types::{PercentageOffOffer, SecondHalfPriceOffer},
    },
    products::Product,
};

pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Catalogue construction error
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    /// Delivery schedule construction error
    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    /// Basket construction error
    #[error(transparent)]
    Basket(#[from] BasketError),
}

/// A parsed checkout configuration.
#[derive(Debug)]
pub struct CheckoutFixture {
    catalogue: Catalogue<'static>,
    delivery: DeliveryChargeCalculator<'static>,
    offers: OfferEngine<'static>,
}

impl CheckoutFixture {
    /// Parse a checkout configuration from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the document is not valid YAML, a price
    /// or percentage does not parse, a currency code is unknown, or the
    /// parsed components fail their own construction checks.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        let document: CheckoutDocument = serde_norway::from_str(yaml)?;

        let products = document
            .catalogue
            .into_iter()
            .map(|(code, fixture)| build_product(code, fixture))
            .collect::<Result<Vec<_>, FixtureError>>()?;
        let catalogue = Catalogue::new(products)?;

        let rules = document
            .delivery
            .into_iter()
            .map(build_delivery_rule)
            .collect::<Result<Vec<_>, FixtureError>>()?;
        let delivery = DeliveryChargeCalculator::new(catalogue.currency(), rules)?;

        let offers = document
            .offers
            .into_iter()
            .map(build_offer)
            .collect::<Result<Vec<_>, FixtureError>>()?;

        Ok(Self {
            catalogue,
            delivery,
            offers: OfferEngine::new(offers),
        })
    }

    /// The parsed catalogue.
    pub fn catalogue(&self) -> &Catalogue<'static> {
        &self.catalogue
    }

    /// The parsed delivery schedule.
    pub fn delivery_calculator(&self) -> &DeliveryChargeCalculator<'static> {
        &self.delivery
    }

    /// The parsed offer engine.
    pub fn offer_engine(&self) -> &OfferEngine<'static> {
        &self.offers
    }

    /// Create an empty basket over the parsed configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError::Basket`] if the parsed components disagree
    /// on currency.
    pub fn basket(&self) -> Result<Basket<'_>, FixtureError> {
        Ok(Basket::new(&self.catalogue, &self.delivery, &self.offers)?)
    }
}

fn build_product(code: String, fixture: ProductFixture) -> Result<Product<'static>, FixtureError> {
    let (minor_units, currency) = parse_price(&fixture.price)?;

    Ok(Product::new(
        code,
        fixture.name,
        Money::from_minor(minor_units, currency),
    ))
}

fn build_delivery_rule(fixture: DeliveryRuleFixture) -> Result<DeliveryRule<'static>, FixtureError> {
    let (threshold_minor, threshold_currency) = parse_price(&fixture.threshold)?;
    let (charge_minor, charge_currency) = parse_price(&fixture.charge)?;

    Ok(DeliveryRule::new(
        Money::from_minor(threshold_minor, threshold_currency),
        Money::from_minor(charge_minor, charge_currency),
    ))
}

fn build_offer(fixture: OfferFixture) -> Result<SharedOffer<'static>, FixtureError> {
    match fixture {
        OfferFixture::SecondHalfPrice { product } => Ok(offer(SecondHalfPriceOffer::new(product))),
        OfferFixture::PercentageOff { product, percent } => Ok(offer(PercentageOffOffer::new(
            product,
            parse_percentage(&percent)?,
        ))),
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::GBP};
    use testresult::TestResult;

    use super::*;

    const YAML: &str = "
catalogue:
  R01:
    name: Red Widget
    price: 32.95 GBP
  B01:
    name: Blue Widget
    price: 7.95 GBP

delivery:
  - threshold: 0.00 GBP
    charge: 4.95 GBP
  - threshold: 50.00 GBP
    charge: 2.95 GBP

offers:
  - type: second_half_price
    product: R01
  - type: percentage_off
    product: B01
    percent: 10%
";

    #[test]
    fn from_yaml_builds_every_component() -> TestResult {
        let fixture = CheckoutFixture::from_yaml(YAML)?;

        assert_eq!(fixture.catalogue().len(), 2);
        assert_eq!(fixture.catalogue().currency(), GBP);
        assert_eq!(
            fixture.catalogue().find("R01")?.price,
            Money::from_minor(32_95, GBP)
        );
        assert_eq!(fixture.delivery_calculator().rules().len(), 2);
        assert_eq!(fixture.offer_engine().offers().len(), 2);

        Ok(())
    }

    #[test]
    fn parsed_basket_prices_items() -> TestResult {
        let fixture = CheckoutFixture::from_yaml(YAML)?;
        let mut basket = fixture.basket()?;

        basket.add("B01")?;

        // 7.95 - 0.795 + 4.95 = 12.105, truncated to 12.10.
        assert_eq!(basket.total()?, Money::from_minor(12_10, GBP));

        Ok(())
    }

    #[test]
    fn unknown_offer_type_is_rejected_by_the_parser() {
        let yaml = "
catalogue:
  R01:
    name: Red Widget
    price: 32.95 GBP

delivery:
  - threshold: 0.00 GBP
    charge: 4.95 GBP

offers:
  - type: mystery_meat
    product: R01
";

        assert!(matches!(
            CheckoutFixture::from_yaml(yaml),
            Err(FixtureError::Yaml(_))
        ));
    }

    #[test]
    fn offers_section_is_optional() -> TestResult {
        let yaml = "
catalogue:
  R01:
    name: Red Widget
    price: 32.95 GBP

delivery:
  - threshold: 0.00 GBP
    charge: 4.95 GBP
";

        let fixture = CheckoutFixture::from_yaml(yaml)?;

        assert!(fixture.offer_engine().offers().is_empty());

        Ok(())
    }

    #[test]
    fn invalid_price_is_rejected() {
        let yaml = "
catalogue:
  R01:
    name: Red Widget
    price: thirty-three

delivery: []
";

        assert!(matches!(
            CheckoutFixture::from_yaml(yaml),
            Err(FixtureError::InvalidPrice(_))
        ));
    }
}
