//! Acme Widget Co checkout demo.
//!
//! Prices the canned demo baskets against the embedded Acme configuration, or
//! a basket given as product codes on the command line.

use anyhow::Result;
use clap::Parser;
use rust_decimal::Decimal;
use rusty_money::iso::Currency;
use tabled::{Table, Tabled, settings::Style};

use tally::{fixtures::CheckoutFixture, receipt::Receipt};

const CHECKOUT_FIXTURE_YAML: &str = include_str!("../../../fixtures/checkout/acme.yml");

/// The baskets exercised when no codes are given.
const SCENARIOS: &[&[&str]] = &[
    &["B01", "G01"],
    &["R01", "R01"],
    &["R01", "G01"],
    &["B01", "B01", "R01", "R01", "R01"],
];

/// Arguments for the checkout demo
#[derive(Debug, Parser)]
struct DemoArgs {
    /// Product codes to add to the basket; the canned demo baskets run when
    /// none are given
    codes: Vec<String>,

    /// Print the catalogue and exit
    #[clap(short, long)]
    list: bool,
}

/// One priced basket in the output table.
#[derive(Tabled)]
struct ReceiptRow {
    /// Scanned codes
    #[tabled(rename = "Basket")]
    basket: String,

    /// Pre-discount sum
    #[tabled(rename = "Subtotal")]
    subtotal: String,

    /// Offer savings (exact, may carry half-cents)
    #[tabled(rename = "Discount")]
    discount: String,

    /// Delivery charge
    #[tabled(rename = "Delivery")]
    delivery: String,

    /// Amount payable
    #[tabled(rename = "Total")]
    total: String,
}

impl ReceiptRow {
    fn new(codes: &[String], receipt: &Receipt<'_>) -> Self {
        Self {
            basket: codes.join(", "),
            subtotal: receipt.subtotal().to_string(),
            discount: format_minor(receipt.discount(), receipt.subtotal().currency()),
            delivery: receipt.delivery().to_string(),
            total: receipt.total().to_string(),
        }
    }
}

/// One catalogue entry in the `--list` table.
#[derive(Tabled)]
struct ProductRow {
    /// Product code
    #[tabled(rename = "Code")]
    code: String,

    /// Display name
    #[tabled(rename = "Name")]
    name: String,

    /// Unit price
    #[tabled(rename = "Price")]
    price: String,
}

/// Checkout demo entry point
#[expect(clippy::print_stdout, reason = "Demo binary")]
fn main() -> Result<()> {
    let args = DemoArgs::parse();
    let fixture = CheckoutFixture::from_yaml(CHECKOUT_FIXTURE_YAML)?;

    if args.list {
        println!("{}", catalogue_table(&fixture));

        return Ok(());
    }

    let baskets: Vec<Vec<String>> = if args.codes.is_empty() {
        SCENARIOS
            .iter()
            .map(|codes| codes.iter().map(ToString::to_string).collect())
            .collect()
    } else {
        vec![args.codes.clone()]
    };

    let mut rows = Vec::new();

    for codes in &baskets {
        let mut basket = fixture.basket()?;

        for code in codes {
            basket.add(code)?;
        }

        rows.push(ReceiptRow::new(codes, &basket.receipt()?));
    }

    let mut table = Table::new(rows);
    table.with(Style::sharp());

    println!("{table}");

    Ok(())
}

fn catalogue_table(fixture: &CheckoutFixture) -> Table {
    let mut products: Vec<ProductRow> = fixture
        .catalogue()
        .products()
        .map(|product| ProductRow {
            code: product.code.clone(),
            name: product.name.clone(),
            price: product.price.to_string(),
        })
        .collect();

    products.sort_by(|left, right| left.code.cmp(&right.code));

    let mut table = Table::new(products);
    table.with(Style::sharp());

    table
}

/// Render an exact minor-unit amount as a major-unit figure, keeping any
/// half-cent precision visible (e.g. `16.475`).
fn format_minor(amount_minor: Decimal, currency: &Currency) -> String {
    let major = (amount_minor / Decimal::ONE_HUNDRED).normalize();

    format!("{}{major}", currency.symbol)
}
