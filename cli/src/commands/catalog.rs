use colored::*;
use storefront_common::config::Config;
use storefront_common::shop::catalog::Catalog;
use storefront_core::search::SearchBox;

use crate::terminal::widgets::TerminalSuggestions;
use crate::terminal::{colors, print};

pub fn products(cfg: &Config) -> anyhow::Result<()> {
    let catalog = Catalog::default();
    print::header("catalog", cfg.quiet);
    print::catalog(catalog.products());
    Ok(())
}

pub fn search(query: &str, cfg: &Config) -> anyhow::Result<()> {
    let catalog = Catalog::default();
    print::header("suggestions", cfg.quiet);

    let mut search = SearchBox::new(&catalog).with_list(Box::new(TerminalSuggestions));
    search.input(query);

    if !search.is_visible() {
        print::no_results(query);
        return Ok(());
    }

    let count: ColoredString = search.suggestions().len().to_string().bold().color(colors::ACCENT);
    print::status(format!("{count} product(s) match '{query}'"));
    Ok(())
}
