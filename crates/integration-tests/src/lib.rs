//! Shared fixtures for Clementine integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clementine_core::{LineItem, Price, ProductId};

/// Build a line item with the given id, unit price in cents, and
/// quantity.
#[must_use]
pub fn line_item(id: i32, cents: u32, quantity: u32) -> LineItem {
    LineItem {
        id: ProductId::new(id),
        name: format!("Item {id}"),
        image: format!("/img/{id}.jpg"),
        price: Price::from_cents(cents),
        quantity,
    }
}

/// The worked pricing example: $10.00 x 2 plus $5.00 x 1.
#[must_use]
pub fn sample_cart() -> Vec<LineItem> {
    vec![line_item(1, 1000, 2), line_item(2, 500, 1)]
}
