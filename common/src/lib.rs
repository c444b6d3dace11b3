//! # Storefront Common
//!
//! Shared vocabulary of the storefront workspace.
//!
//! * **[`shop`]**: The domain models (products, cart lines, the cart and its view models).
//! * **[`ports`]**: Traits the core logic depends on and the front-ends implement.
//! * **[`config`]**: Runtime configuration built by the front-end.
//! * **[`error`]**: Error types surfaced by durable storage backends.

pub mod config;
pub mod error;
pub mod macros;
pub mod ports;
pub mod shop;

#[doc(hidden)]
pub use tracing as __tracing;
