//! Core types for School Mart.
//!
//! This module provides type-safe wrappers for the cart domain.

pub mod cart;
pub mod id;
pub mod price;

pub use cart::{Cart, CartError, LineItem};
pub use id::*;
pub use price::{CurrencyCode, Price, PriceError, format_amount};
