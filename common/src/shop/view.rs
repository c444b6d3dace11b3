/// A cart as a front-end should draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub contents: CartContents,
    /// `"Total: $<amount>"`.
    pub total_text: String,
    pub checkout: Checkout,
    /// Sum of all quantities.
    pub badge: u64,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        matches!(self.contents, CartContents::Empty)
    }

    /// The "Clear Cart" control is only offered when there is something to clear.
    pub fn show_clear_button(&self) -> bool {
        !self.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CartContents {
    Empty,
    Lines(Vec<CartRow>),
}

/// One rendered cart line. Money fields are pre-formatted to two decimals.
///
/// Controls bound to a row address it by `name`; `index` is only its display position.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    pub index: usize,
    pub name: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Checkout {
    /// Nothing to order; the link goes nowhere.
    Inert,
    Order { url: String },
}

impl Checkout {
    pub fn url(&self) -> Option<&str> {
        match self {
            Checkout::Inert => None,
            Checkout::Order { url } => Some(url),
        }
    }
}

pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";
