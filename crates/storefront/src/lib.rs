//! School Mart Storefront - the cart widget.
//!
//! Tracks selected items and quantities, persists them across page loads,
//! and renders the cart drawer and a product quick-view overlay.
//!
//! # Architecture
//!
//! Data flows one way: a [`binder::UiEvent`] reaches the [`binder::CartWidget`],
//! which mutates the cart through [`cart::CartModel`] (persisting through a
//! [`store::KeyValueStore`]), then refreshes badges and re-renders through
//! [`view`] onto the [`page::Surface`].
//!
//! # Modules
//!
//! - [`store`] - Durable key-value storage and the cart codec
//! - [`cart`] - The live cart and its mutations
//! - [`view`] - Drawer rendering (askama) and badges
//! - [`overlay`] - Quick-view modal state machine
//! - [`page`] - Page manifest, typed bindings, display surface
//! - [`binder`] - Event wiring
//! - [`config`] - Environment configuration
//! - [`error`] - Setup errors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod binder;
pub mod cart;
pub mod config;
pub mod error;
pub mod overlay;
pub mod page;
pub mod store;
pub mod view;

pub use binder::{CartWidget, UiEvent};
pub use error::{AppError, Result};
