//! Display anchors a front-end may or may not provide.
//!
//! Every anchor is optional: logic that depends on a missing anchor does nothing.

use crate::shop::product::Product;
use crate::shop::view::CartView;

/// The item counter shown next to the cart link.
pub trait BadgeSlot {
    fn set_count(&mut self, total_quantity: u64);
}

/// The cart page: line rows, total and checkout link.
pub trait CartPanel {
    fn render(&mut self, view: &CartView);
}

/// The drop-down under the search field.
pub trait SuggestionList {
    fn show(&mut self, matches: &[&Product]);
    fn hide(&mut self);
}
