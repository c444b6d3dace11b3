pub mod cart;
pub mod catalog;
pub mod shop;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use storefront_common::config::{self, Config};
use storefront_common::ports::notify::{Notifier, ToastSlot};
use storefront_common::ports::storage::CartRepository;
use storefront_common::shop::catalog::Catalog;
use storefront_core::cart::CartService;
use storefront_core::notification::Toaster;
use storefront_core::storage::file::FileStore;
use storefront_core::storage::memory::MemoryStore;
use storefront_core::storage::slot::SlotCartRepository;
use tracing::debug;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "A small shop with a cart that remembers.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// File holding the cart between runs
    #[arg(long, global = true, value_name = "PATH")]
    pub storage: Option<PathBuf>,

    /// Keep the cart in memory only
    #[arg(long, global = true, conflicts_with = "storage")]
    pub ephemeral: bool,

    /// How long a notification stays visible, in milliseconds
    #[arg(long, global = true, default_value_t = 3000)]
    pub toast_ms: u64,

    /// Contact link the checkout message is sent to
    #[arg(long, global = true, default_value = config::DEFAULT_CHECKOUT_ENDPOINT)]
    pub endpoint: String,

    /// Print less; repeat for even less
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every product in the catalog
    #[command(alias = "p")]
    Products,
    /// Put one unit of a product in the cart
    #[command(alias = "a")]
    Add {
        name: String,
        /// Unit price to use instead of the catalog price
        #[arg(long, value_parser = parse_price)]
        price: Option<f64>,
    },
    /// Change the quantity of a cart line, e.g. `qty Dress -1`
    #[command(alias = "n")]
    Qty {
        name: String,
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
    /// Remove a line from the cart
    #[command(alias = "r")]
    Remove { name: String },
    /// Empty the cart
    #[command(alias = "c")]
    Clear,
    /// Show the cart with its total and checkout link
    #[command(alias = "show")]
    Cart,
    /// Show how many items are in the cart
    #[command(alias = "b")]
    Badge,
    /// Suggest products matching a query
    #[command(alias = "s")]
    Search { query: String },
    /// Browse and fill the cart interactively
    #[command(alias = "i")]
    Shop,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        let storage_path: Option<PathBuf> = match (&self.storage, self.ephemeral) {
            (_, true) => None,
            (Some(path), false) => Some(path.clone()),
            (None, false) => config::default_storage_path(),
        };
        Config {
            storage_path,
            toast_duration: Duration::from_millis(self.toast_ms),
            checkout_endpoint: self.endpoint.clone(),
            quiet: self.quiet,
        }
    }
}

/// Accepts plain non-negative amounts only; `NaN` and `inf` cannot be stored.
fn parse_price(raw: &str) -> Result<f64, String> {
    let price: f64 = raw.parse().map_err(|_| format!("'{raw}' is not a number"))?;
    if !price.is_finite() || price < 0.0 {
        return Err(format!("'{raw}' is not a usable price"));
    }
    Ok(price)
}

pub fn open_repository(cfg: &Config) -> anyhow::Result<Box<dyn CartRepository>> {
    match &cfg.storage_path {
        Some(path) => {
            debug!("cart stored in {}", path.display());
            Ok(Box::new(SlotCartRepository::new(FileStore::open(path)?)))
        }
        None => {
            debug!("cart kept in memory");
            Ok(Box::new(SlotCartRepository::new(MemoryStore::new())))
        }
    }
}

pub fn cart_service(cfg: &Config, slot: Arc<dyn ToastSlot>) -> anyhow::Result<CartService> {
    let notifier: Arc<dyn Notifier> = Arc::new(Toaster::with_duration(slot, cfg.toast_duration));
    Ok(CartService::new(open_repository(cfg)?, Catalog::default(), notifier))
}
