/// Fire-and-forget user feedback. Implementations must not block the caller.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// The one reusable on-screen spot a toast is drawn in.
pub trait ToastSlot: Send + Sync {
    /// Replaces whatever is currently shown.
    fn show(&self, message: &str);
    fn hide(&self);
}

/// Discards every message.
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _message: &str) {}
}
