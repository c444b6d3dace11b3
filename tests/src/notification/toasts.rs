use std::sync::Arc;
use std::time::Duration;

use storefront_common::shop::catalog::Catalog;
use storefront_core::cart::CartService;
use storefront_core::notification::Toaster;
use storefront_core::storage::memory::MemoryStore;
use storefront_core::storage::slot::SlotCartRepository;

use crate::utils::Screen;

fn engine_with_screen() -> (CartService, Arc<Screen>) {
    let screen = Arc::new(Screen::default());
    let toaster = Toaster::with_duration(screen.clone(), Duration::from_secs(3));
    let repo = Box::new(SlotCartRepository::new(MemoryStore::new()));
    (CartService::new(repo, Catalog::default(), Arc::new(toaster)), screen)
}

#[tokio::test(start_paused = true)]
async fn cart_actions_show_toasts_that_expire() {
    let (mut engine, screen) = engine_with_screen();

    engine.add_item("Dress", None).unwrap();
    assert_eq!(screen.visible().as_deref(), Some("Dress added to cart!"));

    tokio::time::sleep(Duration::from_millis(3_100)).await;
    assert_eq!(screen.visible(), None);
}

#[tokio::test(start_paused = true)]
async fn rapid_actions_keep_the_newest_toast() {
    let (mut engine, screen) = engine_with_screen();

    engine.add_item("Dress", None).unwrap();
    tokio::time::sleep(Duration::from_millis(2_500)).await;
    engine.remove_item("Dress").unwrap();
    assert_eq!(screen.visible().as_deref(), Some("Dress removed"));

    // The add toast's timer expires at 3s and must leave the newer message alone.
    tokio::time::sleep(Duration::from_millis(1_000)).await;
    assert_eq!(screen.visible().as_deref(), Some("Dress removed"));

    tokio::time::sleep(Duration::from_millis(2_100)).await;
    assert_eq!(screen.visible(), None);
}
