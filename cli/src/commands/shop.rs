//! Interactive session: one line of input per user action.

use std::sync::Arc;

use storefront_common::config::Config;
use storefront_common::shop::catalog::Catalog;
use storefront_common::{info, warn};
use storefront_core::search::{ClickTarget, SearchBox};
use storefront_core::storefront::Storefront;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands;
use crate::terminal::print;
use crate::terminal::toast::LineToast;
use crate::terminal::widgets::{TerminalBadge, TerminalCartPanel, TerminalSuggestions};

const HELP: &[(&str, &str)] = &[
    ("add <name>", "put one unit in the cart"),
    ("inc <row|name>", "one more of a cart line"),
    ("dec <row|name>", "one less of a cart line"),
    ("rm <row|name>", "remove a cart line"),
    ("clear", "empty the cart"),
    ("cart", "show the cart"),
    ("find <text>", "search the catalog"),
    ("pick <n>", "take suggestion n into the search field"),
    ("buy", "add the product in the search field"),
    ("close", "dismiss suggestions"),
    ("quit", "leave the shop"),
];

/// A cart line given either by its row number or by name.
enum LineRef<'a> {
    Row(usize),
    Name(&'a str),
}

impl<'a> From<&'a str> for LineRef<'a> {
    fn from(arg: &'a str) -> Self {
        match arg.parse::<usize>() {
            Ok(row) => LineRef::Row(row),
            Err(_) => LineRef::Name(arg),
        }
    }
}

pub async fn shop(cfg: &Config) -> anyhow::Result<()> {
    let toast = Arc::new(LineToast::new());
    let engine = commands::cart_service(cfg, toast.clone())?;
    let mut store = Storefront::new(engine, cfg.checkout_endpoint.clone())
        .with_badge(Box::new(TerminalBadge))
        .with_panel(Box::new(TerminalCartPanel { quiet: cfg.quiet }));

    let catalog = Catalog::default();
    let mut search = SearchBox::new(&catalog).with_list(Box::new(TerminalSuggestions));

    print_help(cfg.quiet);
    store.start()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line: &str = line.trim();
        let (cmd, arg) = line.split_once(' ').unwrap_or((line, ""));
        let arg: &str = arg.trim();

        match cmd {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "help" | "?" => print_help(0),
            "add" if !arg.is_empty() => {
                store.add_item(arg, None)?;
            }
            "inc" | "dec" if !arg.is_empty() => {
                let delta: i64 = if cmd == "inc" { 1 } else { -1 };
                match LineRef::from(arg) {
                    LineRef::Row(row) => store.change_quantity_at(row, delta)?,
                    LineRef::Name(name) => store.change_quantity(name, delta)?,
                };
            }
            "rm" if !arg.is_empty() => {
                match LineRef::from(arg) {
                    LineRef::Row(row) => store.remove_item_at(row)?,
                    LineRef::Name(name) => store.remove_item(name)?,
                };
            }
            "clear" => store.clear_cart()?,
            "cart" => store.render()?,
            "find" => {
                search.click(ClickTarget::Input);
                search.input(arg);
                if !search.is_visible() {
                    info!("no products match '{arg}'");
                }
            }
            "pick" => match arg.parse::<usize>().ok().and_then(|idx| search.select(idx)) {
                Some(product) => info!("search field: {}", product.name),
                None => warn!("no suggestion '{arg}' to pick"),
            },
            "buy" if !search.query().is_empty() => {
                let name: String = search.query().to_string();
                store.add_item(&name, None)?;
            }
            "close" => search.click(ClickTarget::Elsewhere),
            _ => warn!("unknown command '{line}', try 'help'"),
        }
    }

    toast.finish();
    print::rule();
    Ok(())
}

fn print_help(quiet: u8) {
    print::header("welcome to the shop", quiet);
    print::help(HELP);
}
