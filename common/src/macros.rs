//! Logging shorthands shared by every crate.
//!
//! All of them emit `tracing` events, so the front-end decides how they look.

/// Event target used for positive outcomes, rendered with a `[+]` marker.
pub const SUCCESS_TARGET: &str = "storefront::success";

/// Event target used for raw terminal output that bypasses the level marker.
pub const PRINT_TARGET: &str = "storefront::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: $crate::macros::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!($($arg)*)
    };
}
