//! Presentation-agnostic render model for the cart page.
//!
//! Money is pre-formatted here and nowhere else: internal totals stay
//! at full decimal precision, and the page carries `$X.XX` strings
//! rounded half-away-from-zero at two fractional digits. Any host
//! (terminal, native GUI, web) renders this model as it sees fit.

use clementine_core::LineItem;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::pricing::CartTotals;

/// Placeholder shown when the cart has no line items.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty. Please add some items!";

/// Line item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemView {
    pub id: String,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    /// Unit price, formatted.
    pub price: String,
    /// Extended line price, formatted.
    pub line_total: String,
}

impl From<&LineItem> for LineItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            image: item.image.clone(),
            quantity: item.quantity,
            price: format_usd(item.price.amount()),
            line_total: format_usd(item.line_total()),
        }
    }
}

/// Cart page display data.
///
/// Both observable cart states render totals; they are trivially zero
/// when the cart is empty and only the empty state shows the
/// placeholder instead of item rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPage {
    pub items: Vec<LineItemView>,
    pub subtotal: String,
    pub sgst: String,
    pub cgst: String,
    pub grand_total: String,
}

impl CartPage {
    /// Build the page model from the current line items.
    #[must_use]
    pub fn build(items: &[LineItem]) -> Self {
        let totals = CartTotals::compute(items);
        Self {
            items: items.iter().map(LineItemView::from).collect(),
            subtotal: format_usd(totals.subtotal),
            sgst: format_usd(totals.sgst),
            cgst: format_usd(totals.cgst),
            grand_total: format_usd(totals.grand_total),
        }
    }

    /// Whether the cart renders the empty placeholder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Format a decimal amount as a dollar price string.
fn format_usd(amount: Decimal) -> String {
    format!(
        "${:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
