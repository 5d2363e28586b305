//! The closed action vocabulary for the cart.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::state::{Product, ProductId};
use crate::store::Dispatchable;
use crate::ui::mvi::{Intent, Reducer};

/// Intents that can be dispatched to the cart store.
///
/// The wire form is `{"type": TAG, "payload": ...}`. Tags outside the
/// vocabulary decode to [`CartAction::Unknown`] whatever their payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Put one more of this product in the cart.
    AddToCart(Product),

    /// Drop the cart line for this product id.
    RemoveFromCart(ProductId),

    /// Catalog fetched successfully.
    SetProducts(Vec<Product>),

    /// Catalog fetch failed.
    SetError(String),

    /// Any tag this version does not know about.
    Unknown,
}

/// Untyped wire shape; the payload is only interpreted for known tags.
#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    tag: String,
    #[serde(default)]
    payload: Option<serde_json::Value>,
}

impl RawAction {
    fn payload<T, E>(self) -> Result<T, E>
    where
        T: serde::de::DeserializeOwned,
        E: de::Error,
    {
        let payload = self.payload.ok_or_else(|| E::missing_field("payload"))?;
        serde_json::from_value(payload).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for CartAction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawAction::deserialize(deserializer)?;
        match raw.tag.as_str() {
            "ADD_TO_CART" => raw.payload().map(CartAction::AddToCart),
            "REMOVE_FROM_CART" => raw.payload().map(CartAction::RemoveFromCart),
            "SET_PRODUCTS" => raw.payload().map(CartAction::SetProducts),
            "SET_ERROR" => raw.payload().map(CartAction::SetError),
            _ => Ok(CartAction::Unknown),
        }
    }
}

impl Intent for CartAction {
    fn tag(&self) -> &'static str {
        match self {
            CartAction::AddToCart(_) => "ADD_TO_CART",
            CartAction::RemoveFromCart(_) => "REMOVE_FROM_CART",
            CartAction::SetProducts(_) => "SET_PRODUCTS",
            CartAction::SetError(_) => "SET_ERROR",
            CartAction::Unknown => "UNKNOWN",
        }
    }
}

impl<R> From<CartAction> for Dispatchable<R>
where
    R: Reducer<Intent = CartAction>,
{
    fn from(action: CartAction) -> Self {
        Dispatchable::Action(action)
    }
}
