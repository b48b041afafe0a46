//! A single product entry in a cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::Price;

/// One product entry in a cart, with unit price and quantity.
///
/// Line items are owned by whatever state container holds the cart;
/// consumers reference them read-only during a render pass. The
/// `quantity >= 1` invariant is enforced at the mutation boundary
/// (quantity input parsing), not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Stable per-product identifier, used for keying and removal.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Reference to a display asset (URL or path).
    pub image: String,
    /// Non-negative unit price.
    pub price: Price,
    /// Number of units.
    pub quantity: u32,
}

impl LineItem {
    /// Extended price for this line at full precision.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.amount() * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(cents: u32, quantity: u32) -> LineItem {
        LineItem {
            id: ProductId::new(1),
            name: "Marmalade".to_string(),
            image: "/img/marmalade.jpg".to_string(),
            price: Price::from_cents(cents),
            quantity,
        }
    }

    #[test]
    fn test_line_total() {
        assert_eq!(item(1000, 2).line_total(), Decimal::new(2000, 2));
        assert_eq!(item(333, 3).line_total(), Decimal::new(999, 2));
    }

    #[test]
    fn test_line_total_zero_quantity() {
        assert_eq!(item(1000, 0).line_total(), Decimal::ZERO);
    }

    #[test]
    fn test_serde_round_trip() {
        let original = item(1999, 4);
        let json = serde_json::to_string(&original).unwrap();
        let back: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }
}
