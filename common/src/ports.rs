//! # Ports (Boundaries)
//!
//! Traits that isolate the storefront logic from the infrastructure it runs on.
//!
//! ## What belongs here?
//! * **Repositories**: Where the cart lives ([`storage`]).
//! * **Display anchors**: Places a front-end draws into ([`view`], [`notify`]).
//!
//! ## Rules
//! 1. All items here are `traits`.
//! 2. No concrete implementations; those live in `storefront-core` and the front-ends.
//! 3. Signatures speak in [`crate::shop`] models.

pub mod notify;
pub mod storage;
pub mod view;
