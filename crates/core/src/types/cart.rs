//! The cart: identifier → line item, plus derived count and total.
//!
//! All operations are pure in-memory mutations. Persistence, badges and
//! rendering are layered on top by the storefront crate.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ItemId;
use super::price::Price;

/// Reasons a deserialized cart violates its invariants.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// A line item was stored with quantity zero.
    #[error("line item {0} has quantity 0")]
    ZeroQuantity(ItemId),
    /// A line item carries a negative unit price.
    #[error("line item {0} has a negative price")]
    NegativePrice(ItemId),
    /// The cart total would exceed the representable decimal range at this
    /// line item.
    #[error("cart total overflows at line item {0}")]
    AmountOverflow(ItemId),
}

/// One cart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Display name captured when the item was first added.
    pub name: String,
    /// Unit price captured when the item was first added.
    pub price: Price,
    /// Always at least 1 while the item is in the cart.
    pub qty: u32,
}

impl LineItem {
    /// `price × qty`, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price.amount().saturating_mul(Decimal::from(self.qty))
    }

    /// `price × qty`, or `None` if the product is out of range.
    #[must_use]
    pub fn checked_subtotal(&self) -> Option<Decimal> {
        self.price.amount().checked_mul(Decimal::from(self.qty))
    }
}

/// The shopping cart.
///
/// Entries keep insertion order, so the drawer lists items in the order they
/// were first added and the persisted JSON object keeps that order too.
///
/// ```
/// use rust_decimal::Decimal;
/// use school_mart_core::{Cart, ItemId, Price};
///
/// let mut cart = Cart::new();
/// let pen = ItemId::new("pen");
/// let price = Price::new(Decimal::new(5, 1)).unwrap();
/// cart.add(&pen, "Pen", price);
/// cart.add(&pen, "Pen", price);
/// assert_eq!(cart.count(), 2);
/// assert_eq!(cart.total(), Decimal::ONE);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: IndexMap<ItemId, LineItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `id`.
    ///
    /// The first call for an identifier fixes its name and price; later calls
    /// only bump the quantity.
    ///
    /// Returns `false` (and changes nothing) if the extra unit would push the
    /// quantity past `u32::MAX` or the total out of the decimal range.
    pub fn add(&mut self, id: &ItemId, name: &str, price: Price) -> bool {
        if let Some(current) = self.items.get(id).map(|line| line.qty) {
            return current
                .checked_add(1)
                .is_some_and(|qty| self.try_set_qty(id, qty));
        }

        self.items.insert(
            id.clone(),
            LineItem {
                name: name.to_string(),
                price,
                qty: 1,
            },
        );
        if self.checked_total().is_some() {
            return true;
        }
        self.items.shift_remove(id);
        false
    }

    /// Apply a signed quantity change.
    ///
    /// Returns `false` (and changes nothing) when `id` is not in the cart.
    /// A resulting quantity of zero or less removes the line item. Growth
    /// saturates at `u32::MAX` and is dropped if the total would leave the
    /// decimal range.
    pub fn change_qty(&mut self, id: &ItemId, delta: i64) -> bool {
        let Some(current) = self.items.get(id).map(|line| line.qty) else {
            return false;
        };
        let next = i64::from(current).saturating_add(delta);
        if next <= 0 {
            self.items.shift_remove(id);
        } else {
            self.try_set_qty(id, u32::try_from(next).unwrap_or(u32::MAX));
        }
        true
    }

    /// Set the quantity of an existing line, rolling back if the total
    /// overflows.
    fn try_set_qty(&mut self, id: &ItemId, qty: u32) -> bool {
        let Some(line) = self.items.get_mut(id) else {
            return false;
        };
        let previous = std::mem::replace(&mut line.qty, qty);
        if qty <= previous || self.checked_total().is_some() {
            return true;
        }
        if let Some(line) = self.items.get_mut(id) {
            line.qty = previous;
        }
        false
    }

    /// Remove `id`, returning the removed line if it was present.
    pub fn remove(&mut self, id: &ItemId) -> Option<LineItem> {
        self.items.shift_remove(id)
    }

    /// Drop every line item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.items.values().map(|line| u64::from(line.qty)).sum()
    }

    /// Sum of `price × qty` over all line items.
    ///
    /// Saturates at `Decimal::MAX`; carts built through [`Cart::add`] or
    /// accepted by [`Cart::validate`] never reach it.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items
            .values()
            .fold(Decimal::ZERO, |acc, line| acc.saturating_add(line.subtotal()))
    }

    /// Sum of `price × qty`, or `None` if any step overflows.
    #[must_use]
    pub fn checked_total(&self) -> Option<Decimal> {
        self.items.values().try_fold(Decimal::ZERO, |acc, line| {
            acc.checked_add(line.checked_subtotal()?)
        })
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&LineItem> {
        self.items.get(id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Line items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &LineItem)> {
        self.items.iter()
    }

    /// Check the invariants that deserialization alone cannot enforce.
    ///
    /// # Errors
    ///
    /// Returns the first violating line item.
    pub fn validate(&self) -> Result<(), CartError> {
        let mut total = Decimal::ZERO;
        for (id, line) in &self.items {
            if line.qty == 0 {
                return Err(CartError::ZeroQuantity(id.clone()));
            }
            if !line.price.is_valid() {
                return Err(CartError::NegativePrice(id.clone()));
            }
            total = line
                .checked_subtotal()
                .and_then(|subtotal| total.checked_add(subtotal))
                .ok_or_else(|| CartError::AmountOverflow(id.clone()))?;
        }
        Ok(())
    }
}
