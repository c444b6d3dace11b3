//! # Cart Engine
//!
//! Business rules for changing a cart. The engine holds no cart of its own:
//! every operation loads the cart from the [`CartRepository`], changes it and
//! writes it back, so the repository is the only source of truth.

use std::sync::Arc;

use storefront_common::error::StorageResult;
use storefront_common::ports::notify::Notifier;
use storefront_common::ports::storage::CartRepository;
use storefront_common::shop::cart::{Adjustment, Cart, CartLine};
use storefront_common::shop::catalog::Catalog;
use tracing::debug;

pub struct CartService {
    repo: Box<dyn CartRepository>,
    catalog: Catalog,
    notifier: Arc<dyn Notifier>,
}

impl CartService {
    pub fn new(
        repo: Box<dyn CartRepository>,
        catalog: Catalog,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            repo,
            catalog,
            notifier,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> StorageResult<Cart> {
        self.repo.load()
    }

    /// Unit price for a new line: a finite, non-zero explicit price wins, then
    /// the catalog price, then zero.
    pub fn resolve_price(&self, name: &str, price: Option<f64>) -> f64 {
        price
            .filter(|p| p.is_finite() && *p != 0.0)
            .or_else(|| self.catalog.find(name).map(|product| product.price))
            .unwrap_or(0.0)
    }

    /// Adds one unit of `name`. Unknown names are accepted as-is.
    pub fn add_item(&mut self, name: &str, price: Option<f64>) -> StorageResult<CartLine> {
        let mut cart: Cart = self.repo.load()?;
        let unit_price: f64 = self.resolve_price(name, price);
        let line: CartLine = cart.add(name, unit_price).clone();
        self.repo.save(&cart)?;

        debug!("{} now at quantity {}", line.name, line.quantity);
        self.notifier.notify(&format!("{name} added to cart!"));
        Ok(line)
    }

    /// Moves the quantity of `name` by `delta`, dropping the line at zero.
    ///
    /// Unknown names leave the cart untouched.
    pub fn change_quantity(&mut self, name: &str, delta: i64) -> StorageResult<Adjustment> {
        let mut cart: Cart = self.repo.load()?;
        let adjustment: Adjustment = cart.adjust(name, delta);
        match &adjustment {
            Adjustment::Missing => debug!("no line named {name}, quantity unchanged"),
            _ => self.repo.save(&cart)?,
        }
        Ok(adjustment)
    }

    /// Same as [`CartService::change_quantity`] for the line shown at `index`.
    pub fn change_quantity_at(&mut self, index: usize, delta: i64) -> StorageResult<Adjustment> {
        match self.name_at(index)? {
            Some(name) => self.change_quantity(&name, delta),
            None => Ok(Adjustment::Missing),
        }
    }

    /// Removes the line named `name`, if there is one.
    pub fn remove_item(&mut self, name: &str) -> StorageResult<Option<CartLine>> {
        let mut cart: Cart = self.repo.load()?;
        let Some(removed) = cart.remove(name) else {
            debug!("no line named {name}, nothing removed");
            return Ok(None);
        };
        self.repo.save(&cart)?;
        self.notifier.notify(&format!("{} removed", removed.name));
        Ok(Some(removed))
    }

    /// Removes the line shown at `index`. Out-of-range positions do nothing.
    pub fn remove_item_at(&mut self, index: usize) -> StorageResult<Option<CartLine>> {
        match self.name_at(index)? {
            Some(name) => self.remove_item(&name),
            None => Ok(None),
        }
    }

    /// Deletes the stored cart.
    pub fn clear_cart(&mut self) -> StorageResult<()> {
        self.repo.clear()?;
        self.notifier.notify("Cart cleared");
        Ok(())
    }

    pub fn total_quantity(&self) -> StorageResult<u64> {
        Ok(self.repo.load()?.total_quantity())
    }

    pub fn total(&self) -> StorageResult<f64> {
        Ok(self.repo.load()?.total())
    }

    fn name_at(&self, index: usize) -> StorageResult<Option<String>> {
        Ok(self.repo.load()?.name_at(index).map(str::to_string))
    }
}
