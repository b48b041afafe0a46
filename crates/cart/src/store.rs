//! Cart state provider: the external owner of authoritative cart data.
//!
//! The view never holds line items beyond a render pass; it reads them
//! through [`CartStore::items`] and mutates them by dispatching
//! [`CartRequest`]s. Dispatch is infallible: removal and clearing are
//! idempotent, and a quantity update for an unknown id is a no-op.

use clementine_core::{LineItem, ProductId};

/// A mutation request dispatched to the cart's state container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartRequest {
    /// Remove the line item with the given product id.
    RemoveItem(ProductId),
    /// Set the quantity of the line item with the given product id.
    SetQuantity(ProductId, u32),
    /// Remove every line item.
    Clear,
}

/// External owner of authoritative cart data.
///
/// Implementations must keep line items in insertion order and must
/// treat requests naming an absent id as silent no-ops.
pub trait CartStore {
    /// Current line items, in insertion order.
    fn items(&self) -> &[LineItem];

    /// Apply a mutation request. Never fails.
    fn dispatch(&mut self, request: CartRequest);
}

/// In-memory cart store.
///
/// Line items are kept in insertion order. No two items share an id:
/// [`MemoryCartStore::add`] merges quantities when the id is already
/// present, mirroring a typical add-to-cart action.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartStore {
    items: Vec<LineItem>,
}

impl MemoryCartStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a store seeded with the given items.
    ///
    /// Items are folded through [`MemoryCartStore::add`], so duplicate
    /// ids collapse into one line with the quantities summed.
    #[must_use]
    pub fn with_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut store = Self::new();
        for item in items {
            store.add(item);
        }
        store
    }

    /// Add an item to the cart.
    ///
    /// If a line with the same id already exists, its quantity is
    /// increased by the new item's quantity; the existing name, image,
    /// and price are kept. This is the external add-to-cart action,
    /// outside the view's dispatch surface.
    pub fn add(&mut self, item: LineItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity += item.quantity;
        } else {
            self.items.push(item);
        }
    }
}

impl CartStore for MemoryCartStore {
    fn items(&self) -> &[LineItem] {
        &self.items
    }

    fn dispatch(&mut self, request: CartRequest) {
        match request {
            CartRequest::RemoveItem(id) => self.items.retain(|item| item.id != id),
            CartRequest::SetQuantity(id, quantity) => {
                if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
                    item.quantity = quantity;
                }
            }
            CartRequest::Clear => self.items.clear(),
        }
    }
}
