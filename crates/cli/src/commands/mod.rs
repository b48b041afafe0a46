//! CLI command implementations.

pub mod catalog;
pub mod demo;
pub mod shell;
