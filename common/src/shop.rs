//! # Shop Models
//!
//! ## Core Entities
//! * [`cart::Cart`]: The ordered list of lines a shopper has selected.
//! * [`catalog::Catalog`]: The fixed list of purchasable products.
//!
//! ## Value Objects
//! * [`product::Product`]: A catalog entry with its canonical price.
//! * [`cart::CartLine`]: One product in the cart with its captured price and quantity.
//! * [`view::CartView`]: What a front-end draws for a cart.

pub mod cart;
pub mod catalog;
pub mod product;
pub mod view;
