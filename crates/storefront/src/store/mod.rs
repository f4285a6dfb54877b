//! Durable key-value storage for the cart.
//!
//! # Layout
//!
//! The cart lives under a single fixed key, [`CART_KEY`], as a JSON object:
//!
//! ```json
//! { "pen": { "name": "Pen", "price": 0.5, "qty": 2 } }
//! ```
//!
//! There is no versioning and no migration: a value that does not decode is
//! replaced by an empty cart on the next [`load`], and the next [`save`]
//! overwrites it.
//!
//! # Backends
//!
//! - [`FileStore`] - One file per key under a data directory; survives
//!   process restarts the way browser storage survives page reloads
//! - [`MemoryStore`] - Process-local map, used by tests

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use school_mart_core::{Cart, CartError};
use thiserror::Error;

/// Storage key holding the serialized cart.
pub const CART_KEY: &str = "school_mart_cart_v1";

/// Errors from the storage layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing medium failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored value is not valid cart JSON.
    #[error("malformed cart data: {0}")]
    Json(#[from] serde_json::Error),

    /// The stored value parsed but breaks a cart invariant.
    #[error("invalid cart data: {0}")]
    InvalidCart(#[from] CartError),

    /// The key cannot be mapped onto the backing medium.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// A synchronous, durable string key-value store.
pub trait KeyValueStore {
    /// Read the value at `key`, `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value at `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing medium cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Decode a persisted cart.
///
/// # Errors
///
/// Returns `StoreError::Json` for malformed JSON or the wrong shape, and
/// `StoreError::InvalidCart` when a line item breaks an invariant.
pub fn decode(raw: &str) -> Result<Cart, StoreError> {
    let cart: Cart = serde_json::from_str(raw)?;
    cart.validate()?;
    Ok(cart)
}

/// Encode a cart for persistence.
///
/// # Errors
///
/// Returns `StoreError::Json` if serialization fails.
pub fn encode(cart: &Cart) -> Result<String, StoreError> {
    Ok(serde_json::to_string(cart)?)
}

/// Load the cart, falling back to an empty one.
///
/// Missing data is normal on first visit. Unreadable or undecodable data is
/// logged and discarded.
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Cart {
    let raw = match store.get(CART_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key = CART_KEY, "No persisted cart, starting empty");
            return Cart::new();
        }
        Err(e) => {
            tracing::warn!(key = CART_KEY, error = %e, "Failed to read persisted cart");
            return Cart::new();
        }
    };

    match decode(&raw) {
        Ok(cart) => {
            tracing::debug!(key = CART_KEY, items = cart.len(), "Loaded persisted cart");
            cart
        }
        Err(e) => {
            tracing::warn!(key = CART_KEY, error = %e, "Discarding persisted cart");
            Cart::new()
        }
    }
}

/// Overwrite the persisted cart with `cart`.
///
/// A failed write is logged; the in-memory cart stays authoritative.
pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, cart: &Cart) {
    let result = encode(cart).and_then(|raw| store.set(CART_KEY, &raw));
    if let Err(e) = result {
        tracing::error!(key = CART_KEY, error = %e, "Failed to persist cart");
    }
}
