//! Client-side state container for a shopping cart.
//!
//! A [`store::Store`] owns the current [`ui::cart::CartState`], applies
//! [`ui::cart::CartAction`]s through a pure [`ui::cart::CartReducer`], and
//! notifies subscribers after every commit. Remote data arrives through
//! workflows such as [`catalog::fetch_products`], which report back by
//! dispatching plain actions.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod store;
pub mod ui;
