//! # Storefront Service
//!
//! Wires the [`CartService`] to whatever display anchors the front-end has.
//!
//! Orchestrates every cart action by:
//! 1. delegating the change to the engine.
//! 2. refreshing the anchors that depend on it (badge, cart panel).
//!
//! A missing anchor simply means the matching refresh is skipped.

use storefront_common::error::StorageResult;
use storefront_common::ports::view::{BadgeSlot, CartPanel};
use storefront_common::shop::cart::{Adjustment, Cart, CartLine};
use storefront_common::shop::view::CartView;

use crate::cart::CartService;
use crate::render;

pub struct Storefront {
    cart: CartService,
    checkout_endpoint: String,
    badge: Option<Box<dyn BadgeSlot>>,
    panel: Option<Box<dyn CartPanel>>,
}

impl Storefront {
    pub fn new(cart: CartService, checkout_endpoint: impl Into<String>) -> Self {
        Self {
            cart,
            checkout_endpoint: checkout_endpoint.into(),
            badge: None,
            panel: None,
        }
    }

    pub fn with_badge(mut self, badge: Box<dyn BadgeSlot>) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_panel(mut self, panel: Box<dyn CartPanel>) -> Self {
        self.panel = Some(panel);
        self
    }

    pub fn engine(&self) -> &CartService {
        &self.cart
    }

    /// Page-load sequence: badge first, then the cart if there is a panel for it.
    pub fn start(&mut self) -> StorageResult<()> {
        self.update_badge()?;
        if self.panel.is_some() {
            self.render()?;
        }
        Ok(())
    }

    pub fn view(&self) -> StorageResult<CartView> {
        let cart: Cart = self.cart.cart()?;
        Ok(render::project(&cart, &self.checkout_endpoint))
    }

    pub fn render(&mut self) -> StorageResult<()> {
        let view: CartView = self.view()?;
        if let Some(panel) = self.panel.as_mut() {
            panel.render(&view);
        }
        if let Some(badge) = self.badge.as_mut() {
            badge.set_count(view.badge);
        }
        Ok(())
    }

    pub fn update_badge(&mut self) -> StorageResult<()> {
        let Some(badge) = self.badge.as_mut() else {
            return Ok(());
        };
        badge.set_count(self.cart.total_quantity()?);
        Ok(())
    }

    /// Adding only refreshes the badge; the cart panel is redrawn on its next render.
    pub fn add_item(&mut self, name: &str, price: Option<f64>) -> StorageResult<CartLine> {
        let line: CartLine = self.cart.add_item(name, price)?;
        self.update_badge()?;
        Ok(line)
    }

    pub fn change_quantity(&mut self, name: &str, delta: i64) -> StorageResult<Adjustment> {
        let adjustment: Adjustment = self.cart.change_quantity(name, delta)?;
        self.render()?;
        Ok(adjustment)
    }

    pub fn change_quantity_at(&mut self, index: usize, delta: i64) -> StorageResult<Adjustment> {
        let adjustment: Adjustment = self.cart.change_quantity_at(index, delta)?;
        self.render()?;
        Ok(adjustment)
    }

    pub fn remove_item(&mut self, name: &str) -> StorageResult<Option<CartLine>> {
        let removed: Option<CartLine> = self.cart.remove_item(name)?;
        self.render()?;
        Ok(removed)
    }

    pub fn remove_item_at(&mut self, index: usize) -> StorageResult<Option<CartLine>> {
        let removed: Option<CartLine> = self.cart.remove_item_at(index)?;
        self.render()?;
        Ok(removed)
    }

    pub fn clear_cart(&mut self) -> StorageResult<()> {
        self.cart.clear_cart()?;
        self.render()
    }
}
