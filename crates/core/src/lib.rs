//! Clementine Core - Shared types library.
//!
//! This crate provides common types used across all Clementine components:
//! - `cart` - The headless cart engine (pricing, mutations, view model)
//! - `cli` - Terminal host for the cart engine
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no state containers,
//! no rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus the
//!   cart line item

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
