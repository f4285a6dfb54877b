//! School Mart Core - Shared cart types.
//!
//! This crate provides the types used across the School Mart components:
//! - `storefront` - The cart widget (store, model, view, quick view, binder)
//! - `cli` - Command-line front end that drives one page load per invocation
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no
//! storage, no rendering. This keeps the cart arithmetic testable on its own.
//!
//! # Modules
//!
//! - [`types`] - Newtype identifiers, prices, and the cart itself

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
