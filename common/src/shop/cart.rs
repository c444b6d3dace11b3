//! # Cart Model
//!
//! An ordered list of [`CartLine`]s with at most one line per name.
//!
//! Lines are addressed by name. Positions are only meaningful for the cart
//! they were read from, so positional lookups go through [`Cart::name_at`]
//! before any mutation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    /// Unit price captured when the line was first added.
    pub price: f64,
    /// Always at least 1 while the line is in a cart.
    pub quantity: u32,
}

impl CartLine {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Outcome of [`Cart::adjust`].
#[derive(Debug, Clone, PartialEq)]
pub enum Adjustment {
    /// No line carries that name.
    Missing,
    /// The line is still there with this quantity.
    Updated(u32),
    /// The quantity dropped to zero or below and the line was dropped.
    Removed(CartLine),
}

/// Serialized as a bare array of lines. Deserializing goes through
/// [`FromIterator`], so stored duplicates and empty lines never survive a load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn get(&self, name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.name == name)
    }

    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|line| line.name.as_str())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.name == name)
    }

    /// Bumps the quantity of an existing line or appends a new one.
    ///
    /// The price of an existing line is never overwritten.
    pub fn add(&mut self, name: &str, price: f64) -> &CartLine {
        let idx: usize = match self.position(name) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity = line.quantity.saturating_add(1);
                idx
            }
            None => {
                self.lines.push(CartLine::new(name, price));
                self.lines.len() - 1
            }
        };
        &self.lines[idx]
    }

    pub fn adjust(&mut self, name: &str, delta: i64) -> Adjustment {
        let Some(idx) = self.position(name) else {
            return Adjustment::Missing;
        };
        let quantity: i64 = i64::from(self.lines[idx].quantity).saturating_add(delta);
        if quantity <= 0 {
            return Adjustment::Removed(self.lines.remove(idx));
        }
        let quantity: u32 = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.lines[idx].quantity = quantity;
        Adjustment::Updated(quantity)
    }

    pub fn remove(&mut self, name: &str) -> Option<CartLine> {
        self.position(name).map(|idx| self.lines.remove(idx))
    }

    /// Sum of all quantities, shown on the cart badge.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// `"<name> (x<qty>)"` for every line, joined by `", "`.
    pub fn summary(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("{} (x{})", line.name, line.quantity))
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl FromIterator<CartLine> for Cart {
    fn from_iter<I: IntoIterator<Item = CartLine>>(iter: I) -> Self {
        let mut cart = Cart::new();
        for line in iter {
            match cart.position(&line.name) {
                Some(idx) => cart.lines[idx] = line,
                None => cart.lines.push(line),
            }
        }
        cart.lines.retain(|line| line.quantity > 0);
        cart
    }
}

impl From<Vec<CartLine>> for Cart {
    fn from(lines: Vec<CartLine>) -> Self {
        lines.into_iter().collect()
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}
