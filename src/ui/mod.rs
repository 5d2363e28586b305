//! View-facing layer: MVI primitives, the cart feature, and the
//! text driver that renders state and turns typed commands into actions.

pub mod app;
pub mod cart;
pub mod input;
pub mod mvi;
pub mod render;
pub mod runtime;
