//! The cart view: state reading and mutation dispatch.
//!
//! `CartView` owns its injected collaborators (store, notifier,
//! checkout prompt) and translates user intents into store requests
//! plus user-facing notices. No operation returns an error: invalid
//! quantity input is recovered locally as a warning notice, and
//! mutations naming an absent id are silent no-ops at the store.

use clementine_core::{LineItem, ProductId};
use tracing::instrument;

use crate::confirm::CheckoutPrompt;
use crate::notify::{Notifier, NoticeKind};
use crate::page::CartPage;
use crate::pricing::CartTotals;
use crate::quantity::parse_quantity;
use crate::store::{CartRequest, CartStore};

/// Notice shown after an item is removed. Error-styled, matching the
/// red removal toast on the original page.
pub const REMOVED_MESSAGE: &str = "Item removed from cart!";

/// Notice shown after a successful quantity update.
pub const UPDATED_MESSAGE: &str = "Cart updated!";

/// Confirmation shown before checkout clears the cart.
pub const PAYMENT_PROCESSING_MESSAGE: &str = "Payment is processing...";

/// Notice shown after checkout clears the cart.
pub const THANK_YOU_MESSAGE: &str = "Thank you for your purchase!";

/// Cart view over an injected state container.
///
/// Generic over its collaborators so the pricing and mutation logic
/// stays independently testable; production hosts typically pair a
/// [`crate::MemoryCartStore`] with a notifier and prompt of their own.
#[derive(Debug)]
pub struct CartView<S, N, P> {
    store: S,
    notifier: N,
    prompt: P,
}

impl<S, N, P> CartView<S, N, P>
where
    S: CartStore,
    N: Notifier,
    P: CheckoutPrompt,
{
    /// Create a view over the given collaborators.
    pub const fn new(store: S, notifier: N, prompt: P) -> Self {
        Self {
            store,
            notifier,
            prompt,
        }
    }

    /// The underlying state container.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.store.items()
    }

    /// Derive totals from the current line items.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals::compute(self.items())
    }

    /// Build the render model for the current cart state.
    #[must_use]
    pub fn page(&self) -> CartPage {
        CartPage::build(self.items())
    }

    /// Remove the line item with the given id.
    ///
    /// The removal request is dispatched unconditionally; removing an
    /// absent id is a no-op at the store, not a failure here.
    #[instrument(skip(self, id), fields(product_id = %id))]
    pub fn remove(&mut self, id: ProductId) {
        self.store.dispatch(CartRequest::RemoveItem(id));
        self.notifier.notify(NoticeKind::Error, REMOVED_MESSAGE);
    }

    /// Set the quantity of the line item with the given id from raw
    /// user input.
    ///
    /// Input that does not parse to a strictly positive integer is
    /// rejected with a warning notice and nothing is dispatched.
    #[instrument(skip(self, id), fields(product_id = %id))]
    pub fn set_quantity(&mut self, id: ProductId, raw: &str) {
        match parse_quantity(raw) {
            Ok(quantity) => {
                self.store.dispatch(CartRequest::SetQuantity(id, quantity));
                self.notifier.notify(NoticeKind::Info, UPDATED_MESSAGE);
            }
            Err(err) => {
                tracing::debug!(input = raw, %err, "rejected quantity input");
                self.notifier.notify(NoticeKind::Warning, &err.to_string());
            }
        }
    }

    /// Simulated checkout: confirm, clear the cart, thank the user.
    ///
    /// If the prompt cancels, the cart is left untouched and no notice
    /// is emitted. Safe to call on an already-empty cart.
    #[instrument(skip(self))]
    pub fn checkout(&mut self) {
        if !self.prompt.confirm(PAYMENT_PROCESSING_MESSAGE) {
            tracing::debug!("checkout cancelled at prompt");
            return;
        }
        self.store.dispatch(CartRequest::Clear);
        self.notifier.notify(NoticeKind::Success, THANK_YOU_MESSAGE);
    }
}
