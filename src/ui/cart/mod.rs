//! Shopping cart feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Catalog, cart lines and the fetch error
//! - `intent.rs` - The closed action vocabulary
//! - `reducer.rs` - State transitions

mod intent;
mod reducer;
mod state;

pub use intent::CartAction;
pub use reducer::CartReducer;
pub use state::{CartLine, CartState, Product, ProductId};
