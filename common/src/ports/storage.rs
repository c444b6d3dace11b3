use crate::error::StorageResult;
use crate::shop::cart::Cart;

/// A string key/value store with durable slots, like browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
    /// Deletes the slot. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

/// The single durable owner of the cart.
///
/// Callers keep no copy between operations: every change is load, mutate, save.
pub trait CartRepository {
    /// Returns the stored cart. An absent or unreadable slot is an empty cart.
    fn load(&self) -> StorageResult<Cart>;
    fn save(&mut self, cart: &Cart) -> StorageResult<()>;
    /// Deletes the cart slot entirely instead of storing an empty list.
    fn clear(&mut self) -> StorageResult<()>;
}
