//! Terminal toasts.
//!
//! An interactive session draws toasts on an indicatif line pinned under the
//! output; one-shot commands have no time to hide anything and simply log them.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use storefront_common::ports::notify::ToastSlot;
use storefront_common::success;

static TOAST_LINE: OnceLock<ProgressBar> = OnceLock::new();

fn init_toast_line() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["🛍 ", "🛒 ", "🛍 ", "🛒 ", " "]);
    pb.set_style(style);
    pb
}

fn toast_line() -> Option<&'static ProgressBar> {
    TOAST_LINE.get()
}

/// Toasts drawn on the pinned indicatif line.
pub struct LineToast;

impl LineToast {
    pub fn new() -> Self {
        TOAST_LINE.get_or_init(init_toast_line);
        Self
    }

    pub fn finish(&self) {
        if let Some(pb) = toast_line() {
            pb.finish_and_clear();
        }
    }
}

impl ToastSlot for LineToast {
    fn show(&self, message: &str) {
        if let Some(pb) = toast_line() {
            pb.set_message(format!("{}", message.bold().white()));
            pb.enable_steady_tick(Duration::from_millis(250));
        }
    }

    fn hide(&self) {
        if let Some(pb) = toast_line() {
            pb.disable_steady_tick();
            pb.set_message("");
            pb.tick();
        }
    }
}

/// Toasts written straight to the log, for commands that exit right away.
pub struct LogToast;

impl ToastSlot for LogToast {
    fn show(&self, message: &str) {
        success!("{message}");
    }

    fn hide(&self) {}
}

/// Routes log output above the toast line when one is active.
pub struct ToastWriter;

impl Write for ToastWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match toast_line() {
            Some(pb) if !pb.is_finished() => {
                let msg = String::from_utf8_lossy(buf);
                pb.println(msg.trim_end());
                Ok(buf.len())
            }
            _ => std::io::stdout().write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stdout().flush()
    }
}
