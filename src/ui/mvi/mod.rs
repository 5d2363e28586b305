//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the base traits the store is generic over.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of everything the view renders
//! - **Intent**: User actions or system events (fetch results)
//! - **Reducer**: Pure function that computes the next state from an intent

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
