//! Pricing invariants checked end to end.

#![allow(clippy::unwrap_used)]

use clementine_cart::{CartPage, CartTotals};
use clementine_integration_tests::{line_item, sample_cart};
use rust_decimal::Decimal;

#[test]
fn worked_example_totals() {
    let totals = CartTotals::compute(&sample_cart());
    assert_eq!(totals.subtotal, Decimal::new(2500, 2));
    assert_eq!(totals.sgst, Decimal::new(225, 2));
    assert_eq!(totals.cgst, Decimal::new(225, 2));
    assert_eq!(totals.grand_total, Decimal::new(2950, 2));
}

#[test]
fn grand_total_is_subtotal_times_1_18_for_nonempty_carts() {
    let carts = [
        vec![line_item(1, 1, 1)],
        vec![line_item(1, 999, 3)],
        vec![line_item(1, 1099, 2), line_item(2, 35, 11)],
        vec![
            line_item(1, 12_345, 1),
            line_item(2, 1, 100),
            line_item(3, 50_000, 2),
        ],
    ];
    for items in carts {
        let totals = CartTotals::compute(&items);
        assert_eq!(totals.grand_total, totals.subtotal * Decimal::new(118, 2));
        assert_eq!(totals.grand_total, totals.subtotal + totals.sgst + totals.cgst);
    }
}

#[test]
fn empty_cart_yields_all_zero_totals() {
    let totals = CartTotals::compute(&[]);
    assert_eq!(totals.subtotal, Decimal::ZERO);
    assert_eq!(totals.sgst, Decimal::ZERO);
    assert_eq!(totals.cgst, Decimal::ZERO);
    assert_eq!(totals.grand_total, Decimal::ZERO);
}

#[test]
fn display_rounds_only_at_the_page() {
    // Three units at $0.33: subtotal 0.99, tax components 0.0891 each,
    // grand total 1.1682. Full precision internally, two digits on the
    // page.
    let items = vec![line_item(1, 33, 3)];
    let totals = CartTotals::compute(&items);
    assert_eq!(totals.sgst, Decimal::new(891, 4));
    assert_eq!(totals.grand_total, Decimal::new(11682, 4));

    let page = CartPage::build(&items);
    assert_eq!(page.subtotal, "$0.99");
    assert_eq!(page.sgst, "$0.09");
    assert_eq!(page.cgst, "$0.09");
    assert_eq!(page.grand_total, "$1.17");
}
