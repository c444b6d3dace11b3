//! Projection of a [`Cart`] into the [`CartView`] a front-end draws.

use storefront_common::shop::cart::{Cart, CartLine};
use storefront_common::shop::view::{CartContents, CartRow, CartView, Checkout};

/// Two decimals, no currency sign.
pub fn format_money(amount: f64) -> String {
    format!("{amount:.2}")
}

pub fn project(cart: &Cart, checkout_endpoint: &str) -> CartView {
    let total: f64 = cart.total();
    let total_text: String = format!("Total: ${}", format_money(total));

    let (contents, checkout) = if cart.is_empty() {
        (CartContents::Empty, Checkout::Inert)
    } else {
        let rows: Vec<CartRow> = cart.lines().iter().enumerate().map(to_row).collect();
        let url: String = checkout_url(checkout_endpoint, cart, total);
        (CartContents::Lines(rows), Checkout::Order { url })
    };

    CartView {
        contents,
        total_text,
        checkout,
        badge: cart.total_quantity(),
    }
}

fn to_row((index, line): (usize, &CartLine)) -> CartRow {
    CartRow {
        index,
        name: line.name.clone(),
        unit_price: format_money(line.price),
        quantity: line.quantity,
        line_total: format_money(line.line_total()),
    }
}

/// `<endpoint>?text=<encoded order message>`.
pub fn checkout_url(endpoint: &str, cart: &Cart, total: f64) -> String {
    let message: String = format!(
        "I want to order: {}. Total: ${}",
        cart.summary(),
        format_money(total)
    );
    format!("{endpoint}?text={}", urlencoding::encode(&message))
}
