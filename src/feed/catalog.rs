//! Fixed catalog the generator draws synthetic sales from
//!
//! Eight products and two eight-name lists (64 customer combinations) keep
//! the fabricated feed varied enough to look alive on a dashboard without
//! any external data source.

use rand::Rng;

use crate::domain::types::{
    CustomerName, ProductName, SaleAmount, MAX_SALE_AMOUNT, MIN_SALE_AMOUNT,
};

const PRODUCTS: [&str; 8] = [
    "Premium Widget",
    "Deluxe Package",
    "Standard Plan",
    "Pro License",
    "Enterprise Suite",
    "Basic Subscription",
    "Advanced Tools",
    "Starter Kit",
];

const FIRST_NAMES: [&str; 8] = [
    "John", "Jane", "Mike", "Sarah", "David", "Lisa", "Tom", "Emma",
];

const LAST_NAMES: [&str; 8] = [
    "Smith", "Johnson", "Brown", "Davis", "Wilson", "Miller", "Taylor", "Anderson",
];

/// Draw a sale amount uniformly from `[MIN_SALE_AMOUNT, MAX_SALE_AMOUNT)`
pub fn random_amount(rng: &mut impl Rng) -> SaleAmount {
    let raw = rng.gen_range(MIN_SALE_AMOUNT..MAX_SALE_AMOUNT);
    // gen_range draws from the half-open range SaleAmount validates, so this
    // cannot fail; fall back to the minimum rather than panic regardless.
    SaleAmount::try_new(raw).unwrap_or_else(|_| {
        SaleAmount::try_new(MIN_SALE_AMOUNT).expect("minimum sale amount is valid")
    })
}

/// Draw a product uniformly from the catalog
pub fn random_product(rng: &mut impl Rng) -> ProductName {
    ProductName::new(pick(rng, &PRODUCTS).to_string())
}

/// Draw a customer as `first + " " + last` from the two name lists
pub fn random_customer(rng: &mut impl Rng) -> CustomerName {
    let first = pick(rng, &FIRST_NAMES);
    let last = pick(rng, &LAST_NAMES);
    CustomerName::new(format!("{first} {last}"))
}

fn pick<'a>(rng: &mut impl Rng, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}
