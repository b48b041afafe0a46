//! Pure pricing derivation over cart line items.
//!
//! Totals are recomputed from the line items on every read and never
//! stored. All arithmetic is decimal at full precision; rounding to two
//! fractional digits happens in the render model only.

use clementine_core::LineItem;
use rust_decimal::Decimal;

/// Rate of each GST component (SGST and CGST are both 9%).
fn gst_component_rate() -> Decimal {
    Decimal::new(9, 2)
}

/// Totals derived from a cart's line items.
///
/// `grand_total` is always `subtotal + sgst + cgst`; with both
/// components at 9% that is exactly `subtotal * 1.18`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of `price * quantity` over all line items.
    pub subtotal: Decimal,
    /// State GST component (9% of subtotal).
    pub sgst: Decimal,
    /// Central GST component (9% of subtotal).
    pub cgst: Decimal,
    /// Subtotal plus both tax components.
    pub grand_total: Decimal,
}

impl CartTotals {
    /// Compute totals for the given line items.
    ///
    /// Total function: an empty slice yields all-zero totals.
    #[must_use]
    pub fn compute(items: &[LineItem]) -> Self {
        let subtotal: Decimal = items.iter().map(LineItem::line_total).sum();
        let sgst = subtotal * gst_component_rate();
        let cgst = subtotal * gst_component_rate();
        Self {
            subtotal,
            sgst,
            cgst,
            grand_total: subtotal + sgst + cgst,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clementine_core::{Price, ProductId};

    use super::*;

    fn item(id: i32, cents: u32, quantity: u32) -> LineItem {
        LineItem {
            id: ProductId::new(id),
            name: format!("Item {id}"),
            image: format!("/img/{id}.jpg"),
            price: Price::from_cents(cents),
            quantity,
        }
    }

    #[test]
    fn test_empty_cart_is_all_zero() {
        let totals = CartTotals::compute(&[]);
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.sgst, Decimal::ZERO);
        assert_eq!(totals.cgst, Decimal::ZERO);
        assert_eq!(totals.grand_total, Decimal::ZERO);
    }

    #[test]
    fn test_worked_example() {
        // $10.00 x 2 + $5.00 x 1 = $25.00, 9% + 9% tax, $29.50 total
        let items = vec![item(1, 1000, 2), item(2, 500, 1)];
        let totals = CartTotals::compute(&items);
        assert_eq!(totals.subtotal, Decimal::new(2500, 2));
        assert_eq!(totals.sgst, Decimal::new(225, 2));
        assert_eq!(totals.cgst, Decimal::new(225, 2));
        assert_eq!(totals.grand_total, Decimal::new(2950, 2));
    }

    #[test]
    fn test_grand_total_is_subtotal_times_1_18() {
        let carts = [
            vec![item(1, 999, 1)],
            vec![item(1, 1, 1)],
            vec![item(1, 1299, 3), item(2, 89, 7), item(3, 25_000, 1)],
        ];
        for items in carts {
            let totals = CartTotals::compute(&items);
            assert_eq!(totals.grand_total, totals.subtotal * Decimal::new(118, 2));
        }
    }

    #[test]
    fn test_tax_components_are_equal() {
        let totals = CartTotals::compute(&[item(1, 777, 2)]);
        assert_eq!(totals.sgst, totals.cgst);
    }
}
