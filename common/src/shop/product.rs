use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Case-insensitive substring match. `query` must already be lower-cased.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
    }
}
