//! # Product Catalog
//!
//! The immutable list of products known at startup. Lookups are exact and
//! case-sensitive; [`Catalog::search`] is the case-insensitive variant used
//! for suggestions.

use crate::shop::product::Product;

const DEFAULT_PRODUCTS: &[(&str, f64)] = &[
    ("Denim Jacket", 35.0),
    ("Dress", 50.0),
    ("Sneakers", 45.0),
    ("Crystal Earrings", 10.0),
    ("Sun Hat", 20.0),
    ("Curly Wig", 30.0),
    ("Straight Wig", 25.0),
    ("Heels", 50.0),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_PRODUCTS
                .iter()
                .map(|(name, price)| Product::new(*name, *price))
                .collect(),
        )
    }
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.name == name)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Products whose name contains `query`, ignoring case, in catalog order.
    ///
    /// An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query: String = query.to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.products
            .iter()
            .filter(|product| product.matches(&query))
            .collect()
    }
}
