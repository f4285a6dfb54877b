//! Cart model: the live cart plus the store it is mirrored to.
//!
//! Every mutation writes the full cart back to the store before returning
//! the updated cart. Badge refreshes and re-rendering are the caller's
//! explicit next step (see [`crate::binder`]).

use rust_decimal::Decimal;
use school_mart_core::{Cart, ItemId, Price};

use crate::store::{self, KeyValueStore};

/// Owner of the single in-memory cart.
#[derive(Debug)]
pub struct CartModel<S> {
    cart: Cart,
    store: S,
}

impl<S: KeyValueStore> CartModel<S> {
    /// Load the persisted cart from `store` (empty if missing or corrupt).
    pub fn load(store: S) -> Self {
        let cart = store::load(&store);
        Self { cart, store }
    }

    /// The live cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Add one unit of `id`. Name and price only apply the first time.
    ///
    /// A unit that would overflow the quantity or total is dropped and
    /// nothing is written.
    pub fn add_to_cart(&mut self, id: &ItemId, name: &str, price: Price) -> &Cart {
        if !self.cart.add(id, name, price) {
            tracing::warn!(item_id = %id, "Cart cannot hold another unit");
            return &self.cart;
        }
        tracing::debug!(item_id = %id, count = self.cart.count(), "Added to cart");
        self.persist()
    }

    /// Change the quantity of `id` by `delta`; zero or below removes it.
    ///
    /// Unknown identifiers are ignored and nothing is written.
    pub fn change_qty(&mut self, id: &ItemId, delta: i64) -> &Cart {
        if !self.cart.change_qty(id, delta) {
            tracing::debug!(item_id = %id, delta, "Quantity change for item not in cart");
            return &self.cart;
        }
        tracing::debug!(item_id = %id, delta, "Changed quantity");
        self.persist()
    }

    /// Remove `id` if present.
    pub fn remove_item(&mut self, id: &ItemId) -> &Cart {
        if self.cart.remove(id).is_some() {
            tracing::debug!(item_id = %id, "Removed from cart");
        }
        self.persist()
    }

    /// Replace the cart with an empty one.
    pub fn clear_cart(&mut self) -> &Cart {
        self.cart.clear();
        tracing::debug!("Cleared cart");
        self.persist()
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.cart.count()
    }

    #[must_use]
    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    fn persist(&mut self) -> &Cart {
        store::save(&mut self.store, &self.cart);
        &self.cart
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::{CART_KEY, MemoryStore, StoreError};

    fn price(units: i64, scale: u32) -> Price {
        Price::new(Decimal::new(units, scale)).unwrap()
    }

    fn persisted(model: &CartModel<MemoryStore>) -> Option<String> {
        model.store().get(CART_KEY).unwrap()
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let mut model = CartModel::load(MemoryStore::new());
        model.add_to_cart(&ItemId::new("pen"), "Pen", price(5, 1));
        assert_eq!(
            store::decode(&persisted(&model).unwrap()).unwrap(),
            *model.cart()
        );

        model.change_qty(&ItemId::new("pen"), 1);
        assert_eq!(
            store::decode(&persisted(&model).unwrap()).unwrap().count(),
            2
        );
    }

    #[test]
    fn test_clear_persists_empty_mapping() {
        let mut model = CartModel::load(MemoryStore::new());
        model.add_to_cart(&ItemId::new("pen"), "Pen", price(5, 1));
        model.add_to_cart(&ItemId::new("book"), "Book", price(2, 0));
        model.clear_cart();
        assert_eq!(model.count(), 0);
        assert_eq!(model.total(), Decimal::ZERO);
        assert_eq!(persisted(&model).as_deref(), Some("{}"));
    }

    #[test]
    fn test_change_qty_on_absent_item_writes_nothing() {
        let mut model = CartModel::load(MemoryStore::new());
        model.change_qty(&ItemId::new("ghost"), 1);
        assert_eq!(persisted(&model), None);
    }

    #[test]
    fn test_load_picks_up_existing_cart() {
        let mut backing = MemoryStore::new();
        backing
            .set(CART_KEY, r#"{"pen":{"name":"Pen","price":0.5,"qty":2}}"#)
            .unwrap();
        let model = CartModel::load(backing);
        assert_eq!(model.count(), 2);
        assert_eq!(model.total(), Decimal::ONE);
    }

    #[test]
    fn test_load_survives_corrupt_store() {
        let mut backing = MemoryStore::new();
        backing.set(CART_KEY, "\u{0}garbage").unwrap();
        let model = CartModel::load(backing);
        assert_eq!(model.count(), 0);
    }

    #[test]
    fn test_add_beyond_total_range_writes_nothing() {
        let mut model = CartModel::load(MemoryStore::new());
        let big = Price::new(Decimal::MAX).unwrap();
        model.add_to_cart(&ItemId::new("gold"), "Gold", big);
        let saved = persisted(&model);

        model.add_to_cart(&ItemId::new("gold"), "Gold", big);
        assert_eq!(model.count(), 1);
        assert_eq!(persisted(&model), saved);
    }

    /// A store whose writes always fail.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::InvalidKey(key.to_string()))
        }
    }

    #[test]
    fn test_failed_write_keeps_in_memory_cart() {
        let mut model = CartModel::load(ReadOnlyStore);
        let cart = model.add_to_cart(&ItemId::new("pen"), "Pen", price(5, 1));
        assert_eq!(cart.count(), 1);
    }
}
