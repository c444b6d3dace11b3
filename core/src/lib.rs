//! # Storefront Core
//!
//! The storefront's behaviour, independent of any front-end.
//!
//! * **[`cart`]**: The cart engine (add, change quantity, remove, clear).
//! * **[`render`]**: Projection of a cart into display rows, total and checkout link.
//! * **[`notification`]**: Toasts that hide themselves unless replaced.
//! * **[`search`]**: Catalog suggestions for a search field.
//! * **[`storage`]**: Key/value stores and the slot-backed cart repository.
//! * **[`storefront`]**: The application service tying the engine to display anchors.

pub mod cart;
pub mod notification;
pub mod render;
pub mod search;
pub mod storage;
pub mod storefront;
