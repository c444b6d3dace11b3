use std::sync::Arc;

use storefront_common::config::Config;
use storefront_common::shop::cart::Adjustment;
use storefront_common::warn;
use storefront_core::storefront::Storefront;

use crate::commands;
use crate::terminal::toast::LogToast;
use crate::terminal::widgets::{TerminalBadge, TerminalCartPanel};

/// Which parts of the page a command draws.
enum Page {
    BadgeOnly,
    Full,
}

fn open(cfg: &Config, page: Page) -> anyhow::Result<Storefront> {
    let engine = commands::cart_service(cfg, Arc::new(LogToast))?;
    let shop = Storefront::new(engine, cfg.checkout_endpoint.clone()).with_badge(Box::new(TerminalBadge));
    Ok(match page {
        Page::BadgeOnly => shop,
        Page::Full => shop.with_panel(Box::new(TerminalCartPanel { quiet: cfg.quiet })),
    })
}

pub fn add(name: &str, price: Option<f64>, cfg: &Config) -> anyhow::Result<()> {
    let mut shop = open(cfg, Page::BadgeOnly)?;
    shop.add_item(name, price)?;
    Ok(())
}

pub fn change_quantity(name: &str, delta: i64, cfg: &Config) -> anyhow::Result<()> {
    let mut shop = open(cfg, Page::Full)?;
    if let Adjustment::Missing = shop.change_quantity(name, delta)? {
        warn!("'{name}' is not in the cart");
    }
    Ok(())
}

pub fn remove(name: &str, cfg: &Config) -> anyhow::Result<()> {
    let mut shop = open(cfg, Page::Full)?;
    if shop.remove_item(name)?.is_none() {
        warn!("'{name}' is not in the cart");
    }
    Ok(())
}

pub fn clear(cfg: &Config) -> anyhow::Result<()> {
    let mut shop = open(cfg, Page::Full)?;
    shop.clear_cart()?;
    Ok(())
}

pub fn show(cfg: &Config) -> anyhow::Result<()> {
    let mut shop = open(cfg, Page::Full)?;
    shop.start()?;
    Ok(())
}

pub fn badge(cfg: &Config) -> anyhow::Result<()> {
    let mut shop = open(cfg, Page::BadgeOnly)?;
    shop.start()?;
    Ok(())
}
