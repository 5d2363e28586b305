//! Reducer for the cart store.

use crate::ui::mvi::Reducer;

use super::intent::CartAction;
use super::state::{CartLine, CartState};

/// Reducer for catalog and cart state transitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Intent = CartAction;

    fn reduce(&self, state: &Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CartAction::AddToCart(product) => {
                let cart = if state.cart_line(product.id).is_some() {
                    state
                        .cart
                        .iter()
                        .map(|line| {
                            if line.id() == product.id {
                                line.incremented()
                            } else {
                                line.clone()
                            }
                        })
                        .collect()
                } else {
                    // Not cross-checked against the catalog.
                    let mut cart = state.cart.clone();
                    cart.push(CartLine::new(product));
                    cart
                };
                CartState {
                    cart,
                    ..state.clone()
                }
            }

            CartAction::RemoveFromCart(id) => CartState {
                cart: state
                    .cart
                    .iter()
                    .filter(|line| line.id() != id)
                    .cloned()
                    .collect(),
                ..state.clone()
            },

            CartAction::SetProducts(products) => CartState {
                products,
                cart: state.cart.clone(),
                error: None,
            },

            CartAction::SetError(message) => CartState {
                error: Some(message),
                ..state.clone()
            },

            CartAction::Unknown => state.clone(),
        }
    }
}
