//! Page layout for the terminal storefront.
//!
//! Every line goes out as a `tracing` event on [`PRINT_TARGET`], so it is
//! drawn above the toast line instead of through it.

use colored::*;
use storefront_common::macros::PRINT_TARGET;
use storefront_common::shop::product::Product;
use storefront_common::shop::view::{CartRow, CartView, Checkout, EMPTY_CART_MESSAGE};
use storefront_core::render;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const PAGE_WIDTH: usize = 64;

/// Width of the widest key in a cart line's details ("Price", "Total").
const DETAIL_KEY_WIDTH: usize = 5;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn blank() {
    print("");
}

pub fn banner(q_level: u8) {
    if q_level > 0 {
        return;
    }
    let title: String = format!(" STOREFRONT v{} ", env!("CARGO_PKG_VERSION"));
    print(&centered(&title.bright_green().bold().to_string(), "═"));
}

pub fn header(title: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    let title: String = format!(" {} ", title.to_uppercase());
    print(&centered(&title.bright_green().to_string(), "─"));
}

pub fn rule() {
    print(&"═".repeat(PAGE_WIDTH).color(colors::SEPARATOR).to_string());
}

pub fn status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT)));
}

/// Key/value lines with the colons lined up on the widest key.
pub fn entries(list: &[(String, ColoredString)]) {
    let width: usize = list.iter().map(|(key, _)| key.width()).max().unwrap_or(0);
    for (key, value) in list {
        status(entry_line(key, width, value));
    }
}

pub fn money(amount: &str) -> ColoredString {
    format!("${amount}").color(colors::PRICE)
}

pub fn catalog(products: &[Product]) {
    let list: Vec<(String, ColoredString)> = products
        .iter()
        .map(|p| (p.name.clone(), money(&render::format_money(p.price))))
        .collect();
    entries(&list);
}

pub fn help(commands: &[(&str, &str)]) {
    let list: Vec<(String, ColoredString)> = commands
        .iter()
        .map(|(cmd, what)| (cmd.to_string(), what.color(colors::TEXT_DEFAULT)))
        .collect();
    entries(&list);
}

pub fn item_count(total_quantity: u64) {
    entries(&[(
        String::from("Cart"),
        format!("{total_quantity} item(s)").color(colors::ACCENT),
    )]);
}

pub fn suggestions(matches: &[&Product]) {
    for (idx, product) in matches.iter().enumerate() {
        numbered(idx, &product.name);
    }
}

pub fn no_results(query: &str) {
    status(format!("nothing on the shelves matches '{query}'").red().to_string());
}

pub fn empty_cart() {
    status(EMPTY_CART_MESSAGE);
}

/// One block per line: `[i] Name` followed by its price, quantity and total.
pub fn cart_rows(rows: &[CartRow]) {
    for (i, row) in rows.iter().enumerate() {
        numbered(row.index, &row.name);
        let details: [(&str, ColoredString); 3] = [
            ("Price", money(&row.unit_price)),
            ("Qty", row.quantity.to_string().color(colors::ACCENT)),
            ("Total", money(&row.line_total).bold()),
        ];
        for (j, (key, value)) in details.iter().enumerate() {
            let branch: &str = if j + 1 == details.len() { "└─" } else { "├─" };
            print(&format!(
                " {} {}",
                branch.color(colors::SEPARATOR),
                entry_line(key, DETAIL_KEY_WIDTH, value)
            ));
        }
        if i + 1 != rows.len() {
            blank();
        }
    }
}

/// Total, checkout link and the clear hint under the cart lines.
pub fn cart_footer(view: &CartView) {
    rule();
    print(&centered(&view.total_text.bold().color(colors::PRICE).to_string(), " "));

    let mut actions: Vec<(String, ColoredString)> = Vec::new();
    if let Checkout::Order { url } = &view.checkout {
        actions.push((String::from("Checkout"), url.as_str().color(colors::LINK).underline()));
    }
    if view.show_clear_button() {
        actions.push((String::from("Clear"), "storefront clear".color(colors::TEXT_DEFAULT)));
    }
    entries(&actions);
}

fn numbered(idx: usize, name: &str) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

fn entry_line(key: &str, width: usize, value: &ColoredString) -> String {
    let dots: String = ".".repeat((width + 1).saturating_sub(key.width()));
    format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    )
}

/// `text` in the middle of a page-wide line padded with `fill`.
fn centered(text: &str, fill: &str) -> String {
    let pad: usize = PAGE_WIDTH.saturating_sub(console::measure_text_width(text));
    let left: usize = pad / 2;
    format!(
        "{}{}{}",
        fill.repeat(left).color(colors::SEPARATOR),
        text,
        fill.repeat(pad - left).color(colors::SEPARATOR)
    )
}
