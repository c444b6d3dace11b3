//! # Search Suggestions
//!
//! Live filtering of the catalog while the shopper types. The component keeps
//! the text of the search field and the list currently offered, and mirrors
//! every visibility change to an optional [`SuggestionList`] anchor.

use storefront_common::ports::view::SuggestionList;
use storefront_common::shop::catalog::Catalog;
use storefront_common::shop::product::Product;

/// Where a click landed, relative to the search widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Input,
    Suggestions,
    Elsewhere,
}

pub struct SearchBox<'a> {
    catalog: &'a Catalog,
    list: Option<Box<dyn SuggestionList + 'a>>,
    query: String,
    suggestions: Vec<&'a Product>,
    visible: bool,
}

impl<'a> SearchBox<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            list: None,
            query: String::new(),
            suggestions: Vec::new(),
            visible: false,
        }
    }

    pub fn with_list(mut self, list: Box<dyn SuggestionList + 'a>) -> Self {
        self.list = Some(list);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Products currently offered. Empty while the list is hidden.
    pub fn suggestions(&self) -> &[&'a Product] {
        &self.suggestions
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The field now holds `text`.
    pub fn input(&mut self, text: &str) {
        self.query = text.to_string();
        let matches: Vec<&'a Product> = self.catalog.search(text);
        if matches.is_empty() {
            self.hide();
            return;
        }
        self.suggestions = matches;
        self.visible = true;
        if let Some(list) = self.list.as_mut() {
            list.show(&self.suggestions);
        }
    }

    /// Picks the suggestion at `index`, copying its full name into the field.
    pub fn select(&mut self, index: usize) -> Option<&'a Product> {
        if !self.visible {
            return None;
        }
        let product: &'a Product = self.suggestions.get(index).copied()?;
        self.query = product.name.clone();
        self.hide();
        Some(product)
    }

    /// Picks the offered suggestion called `name`.
    pub fn select_name(&mut self, name: &str) -> Option<&'a Product> {
        let index: usize = self.suggestions.iter().position(|p| p.name == name)?;
        self.select(index)
    }

    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Elsewhere {
            self.hide();
        }
    }

    fn hide(&mut self) {
        self.suggestions.clear();
        self.visible = false;
        if let Some(list) = self.list.as_mut() {
            list.hide();
        }
    }
}
