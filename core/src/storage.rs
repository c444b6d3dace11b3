//! Concrete storage behind the [`KeyValueStore`] and [`CartRepository`] ports.
//!
//! * [`memory::MemoryStore`]: A process-local store, used by tests and ephemeral sessions.
//! * [`file::FileStore`]: A JSON file of slots, the terminal counterpart of browser local storage.
//! * [`slot::SlotCartRepository`]: Keeps the cart as a JSON array in one named slot of any store.
//!
//! [`KeyValueStore`]: storefront_common::ports::storage::KeyValueStore
//! [`CartRepository`]: storefront_common::ports::storage::CartRepository

pub mod file;
pub mod memory;
pub mod slot;
