//! # Toast Notifications
//!
//! A single reusable display slot for short messages. Every message replaces
//! the previous one and schedules its own hide; each request carries a
//! generation number so a hide belonging to an older message is ignored.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use storefront_common::config::DEFAULT_TOAST_DURATION;
use storefront_common::ports::notify::{Notifier, ToastSlot};
use tokio::runtime::Handle;
use tracing::debug;

#[derive(Clone)]
pub struct Toaster {
    slot: Arc<dyn ToastSlot>,
    generation: Arc<AtomicU64>,
    duration: Duration,
}

impl Toaster {
    pub fn new(slot: Arc<dyn ToastSlot>) -> Self {
        Self::with_duration(slot, DEFAULT_TOAST_DURATION)
    }

    pub fn with_duration(slot: Arc<dyn ToastSlot>, duration: Duration) -> Self {
        Self {
            slot,
            generation: Arc::new(AtomicU64::new(0)),
            duration,
        }
    }

    /// Token of the message currently owning the slot.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Shows `message` now and hides it after the configured duration,
    /// unless a newer message took the slot in between.
    ///
    /// Returns the generation assigned to this message.
    pub fn show(&self, message: &str) -> u64 {
        let generation: u64 = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.slot.show(message);

        let Ok(handle) = Handle::try_current() else {
            debug!("no async runtime, toast '{message}' stays until replaced");
            return generation;
        };

        let slot = Arc::clone(&self.slot);
        let current = Arc::clone(&self.generation);
        let duration: Duration = self.duration;
        handle.spawn(async move {
            tokio::time::sleep(duration).await;
            if current.load(Ordering::SeqCst) == generation {
                slot.hide();
            }
        });
        generation
    }
}

impl Notifier for Toaster {
    fn notify(&self, message: &str) {
        self.show(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSlot {
        shown: Mutex<Option<String>>,
        hides: AtomicU64,
    }

    impl ToastSlot for RecordingSlot {
        fn show(&self, message: &str) {
            *self.shown.lock().unwrap() = Some(message.to_string());
        }

        fn hide(&self) {
            self.hides.fetch_add(1, Ordering::SeqCst);
            *self.shown.lock().unwrap() = None;
        }
    }

    impl RecordingSlot {
        fn current(&self) -> Option<String> {
            self.shown.lock().unwrap().clone()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn hides_after_duration() {
        let slot = Arc::new(RecordingSlot::default());
        let toaster = Toaster::new(slot.clone());

        toaster.notify("Dress added to cart!");
        assert_eq!(slot.current().as_deref(), Some("Dress added to cart!"));

        tokio::time::sleep(Duration::from_millis(2_900)).await;
        assert!(slot.current().is_some());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(slot.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn old_timer_does_not_hide_newer_message() {
        let slot = Arc::new(RecordingSlot::default());
        let toaster = Toaster::new(slot.clone());

        toaster.notify("first");
        tokio::time::sleep(Duration::from_secs(2)).await;
        let second = toaster.show("second");

        // The first message's timer fires here.
        tokio::time::sleep(Duration::from_millis(1_500)).await;
        assert_eq!(slot.current().as_deref(), Some("second"));
        assert_eq!(slot.hides.load(Ordering::SeqCst), 0);
        assert_eq!(toaster.generation(), second);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(slot.current(), None);
        assert_eq!(slot.hides.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn without_runtime_message_stays() {
        let slot = Arc::new(RecordingSlot::default());
        let toaster = Toaster::new(slot.clone());
        assert_eq!(toaster.show("Cart cleared"), 1);
        assert_eq!(slot.current().as_deref(), Some("Cart cleared"));
    }
}
