//! Terminal implementations of the display anchors.

use storefront_common::ports::view::{BadgeSlot, CartPanel, SuggestionList};
use storefront_common::shop::product::Product;
use storefront_common::shop::view::{CartContents, CartView};

use crate::terminal::print;

/// Cart item counter.
pub struct TerminalBadge;

impl BadgeSlot for TerminalBadge {
    fn set_count(&mut self, total_quantity: u64) {
        print::item_count(total_quantity);
    }
}

pub struct TerminalCartPanel {
    pub quiet: u8,
}

impl CartPanel for TerminalCartPanel {
    fn render(&mut self, view: &CartView) {
        print::header("your cart", self.quiet);
        match &view.contents {
            CartContents::Empty => print::empty_cart(),
            CartContents::Lines(rows) => print::cart_rows(rows),
        }
        print::cart_footer(view);
    }
}

pub struct TerminalSuggestions;

impl SuggestionList for TerminalSuggestions {
    fn show(&mut self, matches: &[&Product]) {
        print::suggestions(matches);
    }

    fn hide(&mut self) {}
}
