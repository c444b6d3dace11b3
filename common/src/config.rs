use std::path::PathBuf;
use std::time::Duration;

/// Name of the storage slot holding the serialized cart.
pub const CART_SLOT: &str = "cart";

/// How long a toast stays on screen unless a newer one replaces it.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

/// Messaging contact the checkout link points at.
pub const DEFAULT_CHECKOUT_ENDPOINT: &str = "https://wa.me/2340000000000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File backing the key/value store.
    ///
    /// `None` keeps the cart in memory for the lifetime of the process.
    pub storage_path: Option<PathBuf>,
    pub toast_duration: Duration,
    pub checkout_endpoint: String,
    /// 0 prints everything, 1 hides headers, 2 only prints results.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
            toast_duration: DEFAULT_TOAST_DURATION,
            checkout_endpoint: DEFAULT_CHECKOUT_ENDPOINT.to_string(),
            quiet: 0,
        }
    }
}

/// `<data dir>/storefront/storage.json`, if the platform has a data directory.
pub fn default_storage_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("storefront").join("storage.json"))
}
