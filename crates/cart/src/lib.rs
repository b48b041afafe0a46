//! Clementine Cart - Headless shopping-cart engine.
//!
//! The engine separates three concerns that a cart page usually folds
//! together:
//!
//! - **State reading**: the [`store::CartStore`] trait exposes the
//!   current line items from an injected state container.
//! - **Pricing**: [`pricing::CartTotals`] derives subtotal, the two GST
//!   components, and the grand total from the line items. Pure
//!   decimal arithmetic; nothing is persisted.
//! - **Mutation dispatch**: [`view::CartView`] translates user intents
//!   (set quantity, remove, checkout) into [`store::CartRequest`]s and
//!   user-facing notices.
//!
//! Presentation is out of scope: [`page::CartPage`] is a plain view
//! model with pre-formatted money strings, and the [`notify::Notifier`]
//! and [`confirm::CheckoutPrompt`] traits let the host decide how
//! notices and the checkout confirmation are shown.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod confirm;
pub mod notify;
pub mod page;
pub mod pricing;
pub mod quantity;
pub mod store;
pub mod view;

pub use confirm::{AlwaysConfirm, CheckoutPrompt};
pub use notify::{BufferedNotifier, Notifier, NoticeKind, TracingNotifier};
pub use page::{CartPage, LineItemView};
pub use pricing::CartTotals;
pub use quantity::{QuantityError, parse_quantity};
pub use store::{CartRequest, CartStore, MemoryCartStore};
pub use view::CartView;
