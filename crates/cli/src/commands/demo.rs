//! Scripted walkthrough of the cart operations.

use clementine_cart::{AlwaysConfirm, CartView, MemoryCartStore};
use clementine_core::ProductId;

use crate::commands::catalog;
use crate::commands::shell::print_page;
use crate::console::ConsoleNotifier;

/// Walk through every cart operation over the sample catalog.
pub fn run() {
    let store = MemoryCartStore::with_items(catalog::sample_items());
    let mut view = CartView::new(store, ConsoleNotifier, AlwaysConfirm);

    println!("-- Initial cart");
    print_page(&view.page());

    println!("-- Set item 2 quantity to 3");
    view.set_quantity(ProductId::new(2), "3");
    print_page(&view.page());

    println!("-- Reject a non-positive quantity");
    view.set_quantity(ProductId::new(2), "0");

    println!("-- Reject a non-integer quantity");
    view.set_quantity(ProductId::new(2), "2.5");

    println!("-- Remove item 1");
    view.remove(ProductId::new(1));
    print_page(&view.page());

    println!("-- Checkout");
    view.checkout();
    print_page(&view.page());
}
