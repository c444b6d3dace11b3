use storefront_common::config::CART_SLOT;
use storefront_common::error::StorageResult;
use storefront_common::ports::storage::{CartRepository, KeyValueStore};
use storefront_common::shop::cart::Cart;
use tracing::warn;

/// Stores the cart as a JSON array of `{name, price, quantity}` under one slot.
pub struct SlotCartRepository<S> {
    store: S,
    slot: String,
}

impl<S: KeyValueStore> SlotCartRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_slot(store, CART_SLOT)
    }

    pub fn with_slot(store: S, slot: impl Into<String>) -> Self {
        Self {
            store,
            slot: slot.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: KeyValueStore> CartRepository for SlotCartRepository<S> {
    fn load(&self) -> StorageResult<Cart> {
        let Some(raw) = self.store.get(&self.slot)? else {
            return Ok(Cart::new());
        };
        match serde_json::from_str::<Cart>(&raw) {
            Ok(cart) => Ok(cart),
            Err(e) => {
                warn!("slot '{}' does not hold a cart, treating it as empty: {e}", self.slot);
                Ok(Cart::new())
            }
        }
    }

    fn save(&mut self, cart: &Cart) -> StorageResult<()> {
        let raw: String = serde_json::to_string(cart)?;
        self.store.set(&self.slot, &raw)
    }

    fn clear(&mut self) -> StorageResult<()> {
        self.store.remove(&self.slot)
    }
}
