//! State for the catalog and the cart.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ui::mvi::UiState;

/// Externally assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog entry as served by the remote endpoint.
///
/// Fields the endpoint sends beyond these four are ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    /// Image URL.
    pub image: String,
}

/// A product plus how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// First line for a product; quantity starts at 1.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// A new line with the quantity bumped by one. `self` is untouched.
    pub fn incremented(&self) -> Self {
        Self {
            product: self.product.clone(),
            quantity: self.quantity.saturating_add(1),
        }
    }
}

/// Everything the view renders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartState {
    /// Replaced wholesale by `SetProducts` only.
    pub products: Vec<Product>,
    /// At most one line per product id.
    pub cart: Vec<CartLine>,
    /// Set by `SetError`, cleared by the next `SetProducts`.
    pub error: Option<String>,
}

impl UiState for CartState {}

impl CartState {
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn cart_line(&self, id: ProductId) -> Option<&CartLine> {
        self.cart.iter().find(|line| line.id() == id)
    }

    /// Sum of quantities across all cart lines.
    pub fn item_count(&self) -> u64 {
        self.cart.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn cart_total(&self) -> f64 {
        self.cart
            .iter()
            .map(|line| line.product.price * f64::from(line.quantity))
            .sum()
    }
}
