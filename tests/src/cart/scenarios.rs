use storefront_common::config::DEFAULT_CHECKOUT_ENDPOINT;
use storefront_common::shop::cart::{Adjustment, CartLine};
use storefront_common::shop::view::{CartContents, Checkout};
use storefront_core::render;

use crate::utils::memory_engine;

/// Empty cart, add Dress twice, then drop it with a single -2 change.
#[test]
fn dress_added_twice_then_removed() {
    let (mut engine, inbox) = memory_engine();

    engine.add_item("Dress", None).unwrap();
    assert_eq!(
        engine.cart().unwrap().lines(),
        &[CartLine { name: "Dress".into(), price: 50.0, quantity: 1 }]
    );
    assert_eq!(engine.total_quantity().unwrap(), 1);

    engine.add_item("Dress", None).unwrap();
    assert_eq!(engine.cart().unwrap().get("Dress").map(|l| l.quantity), Some(2));
    assert_eq!(engine.total_quantity().unwrap(), 2);

    let adjustment = engine.change_quantity_at(0, -2).unwrap();
    assert!(matches!(adjustment, Adjustment::Removed(ref line) if line.name == "Dress"));
    assert!(engine.cart().unwrap().is_empty());
    assert_eq!(engine.total_quantity().unwrap(), 0);

    assert_eq!(
        inbox.messages(),
        vec!["Dress added to cart!", "Dress added to cart!"]
    );
}

#[test]
fn unknown_product_is_free() {
    let (mut engine, _) = memory_engine();
    let line = engine.add_item("Gadget", None).unwrap();
    assert_eq!(line, CartLine { name: "Gadget".into(), price: 0.0, quantity: 1 });

    let view = render::project(&engine.cart().unwrap(), DEFAULT_CHECKOUT_ENDPOINT);
    assert_eq!(view.total_text, "Total: $0.00");
}

#[test]
fn clearing_a_full_cart_renders_empty() {
    let (mut engine, inbox) = memory_engine();
    for name in ["Denim Jacket", "Sneakers", "Curly Wig"] {
        engine.add_item(name, None).unwrap();
    }
    assert_eq!(engine.cart().unwrap().len(), 3);

    engine.clear_cart().unwrap();
    let view = render::project(&engine.cart().unwrap(), DEFAULT_CHECKOUT_ENDPOINT);
    assert_eq!(view.contents, CartContents::Empty);
    assert_eq!(view.checkout, Checkout::Inert);
    assert_eq!(inbox.messages().last().map(String::as_str), Some("Cart cleared"));
}

#[test]
fn rows_are_addressed_by_name_after_a_shift() {
    let (mut engine, _) = memory_engine();
    engine.add_item("Dress", None).unwrap();
    engine.add_item("Heels", None).unwrap();
    engine.add_item("Sun Hat", None).unwrap();

    // A row rendered as "[2] Sun Hat" keeps pointing at Sun Hat once Dress is gone.
    engine.remove_item("Dress").unwrap();
    engine.change_quantity("Sun Hat", 1).unwrap();

    let cart = engine.cart().unwrap();
    assert_eq!(cart.get("Sun Hat").map(|l| l.quantity), Some(2));
    assert_eq!(cart.get("Heels").map(|l| l.quantity), Some(1));

    // The same shift through positions is now out of range and ignored.
    assert_eq!(engine.remove_item_at(2).unwrap(), None);
    assert_eq!(engine.cart().unwrap().len(), 2);
}

#[test]
fn checkout_link_lists_every_line() {
    let (mut engine, _) = memory_engine();
    engine.add_item("Crystal Earrings", None).unwrap();
    engine.add_item("Straight Wig", Some(22.5)).unwrap();
    engine.add_item("Straight Wig", None).unwrap();

    let view = render::project(&engine.cart().unwrap(), "https://wa.me/1");
    let url = view.checkout.url().unwrap();
    assert!(url.starts_with("https://wa.me/1?text=I%20want%20to%20order%3A%20"));
    assert!(url.contains("Crystal%20Earrings%20%28x1%29%2C%20Straight%20Wig%20%28x2%29"));
    assert!(url.ends_with("Total%3A%20%2455.00"));
    assert_eq!(view.badge, 3);
}
