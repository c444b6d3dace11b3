use std::sync::Arc;

use storefront_common::config::CART_SLOT;
use storefront_common::ports::notify::SilentNotifier;
use storefront_common::ports::storage::{CartRepository, KeyValueStore};
use storefront_common::shop::catalog::Catalog;
use storefront_core::cart::CartService;
use storefront_core::storage::file::FileStore;
use storefront_core::storage::slot::SlotCartRepository;

fn file_engine(path: &std::path::Path) -> CartService {
    let repo = Box::new(SlotCartRepository::new(FileStore::open(path).unwrap()));
    CartService::new(repo, Catalog::default(), Arc::new(SilentNotifier))
}

#[test]
fn cart_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    {
        let mut engine = file_engine(&path);
        engine.add_item("Dress", None).unwrap();
        engine.add_item("Sneakers", None).unwrap();
        engine.add_item("Dress", None).unwrap();
        engine.change_quantity("Sneakers", -1).unwrap();
    }

    let engine = file_engine(&path);
    let cart = engine.cart().unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.get("Dress").map(|l| l.quantity), Some(2));
    assert_eq!(engine.total().unwrap(), 100.0);
}

#[test]
fn clear_removes_the_slot_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut engine = file_engine(&path);
    engine.add_item("Heels", None).unwrap();
    engine.clear_cart().unwrap();

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get(CART_SLOT).unwrap(), None);
}

#[test]
fn stored_payload_matches_browser_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut engine = file_engine(&path);
    engine.add_item("Sun Hat", None).unwrap();

    let store = FileStore::open(&path).unwrap();
    assert_eq!(
        store.get(CART_SLOT).unwrap().as_deref(),
        Some(r#"[{"name":"Sun Hat","price":20.0,"quantity":1}]"#)
    );
}

#[test]
fn tampered_slot_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut store = FileStore::open(&path).unwrap();
    store.set(CART_SLOT, "[{\"name\": 3}]").unwrap();
    let repo = SlotCartRepository::new(store);
    assert!(repo.load().unwrap().is_empty());

    let mut engine = file_engine(&path);
    engine.add_item("Dress", None).unwrap();
    assert_eq!(engine.cart().unwrap().len(), 1);
}

#[test]
fn non_finite_prices_never_reach_the_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    {
        let mut engine = file_engine(&path);
        engine.add_item("Heels", None).unwrap();
        engine.add_item("Dress", Some(f64::NAN)).unwrap();
        engine.add_item("Gadget", Some(f64::INFINITY)).unwrap();
    }

    let raw = FileStore::open(&path).unwrap().get(CART_SLOT).unwrap().unwrap();
    assert!(!raw.contains("null"));

    let mut engine = file_engine(&path);
    engine.add_item("Sun Hat", None).unwrap();
    let cart = engine.cart().unwrap();
    assert_eq!(cart.summary(), "Heels (x1), Dress (x1), Gadget (x1), Sun Hat (x1)");
    assert_eq!(engine.total().unwrap(), 120.0);
}

#[test]
fn huge_quantity_change_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    {
        let mut engine = file_engine(&path);
        engine.add_item("Dress", None).unwrap();
        engine.change_quantity("Dress", i64::MAX).unwrap();
    }

    let engine = file_engine(&path);
    assert_eq!(engine.total_quantity().unwrap(), u64::from(u32::MAX));
}
