use std::sync::{Arc, Mutex};

use storefront_common::ports::notify::{Notifier, ToastSlot};
use storefront_common::ports::storage::CartRepository;
use storefront_common::shop::catalog::Catalog;
use storefront_core::cart::CartService;
use storefront_core::storage::memory::MemoryStore;
use storefront_core::storage::slot::SlotCartRepository;

/// Remembers every notification, in order.
#[derive(Default)]
pub struct Inbox(Mutex<Vec<String>>);

impl Notifier for Inbox {
    fn notify(&self, message: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}

impl Inbox {
    pub fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// A toast slot that records what is currently visible.
#[derive(Default)]
pub struct Screen(Mutex<Option<String>>);

impl ToastSlot for Screen {
    fn show(&self, message: &str) {
        *self.0.lock().unwrap() = Some(message.to_string());
    }

    fn hide(&self) {
        *self.0.lock().unwrap() = None;
    }
}

impl Screen {
    pub fn visible(&self) -> Option<String> {
        self.0.lock().unwrap().clone()
    }
}

pub fn memory_engine() -> (CartService, Arc<Inbox>) {
    let inbox = Arc::new(Inbox::default());
    let repo: Box<dyn CartRepository> = Box::new(SlotCartRepository::new(MemoryStore::new()));
    (CartService::new(repo, Catalog::default(), inbox.clone()), inbox)
}
