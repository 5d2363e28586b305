//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use cart_store::catalog::CatalogClient;
use cart_store::config::CatalogConfig;
use cart_store::ui::cart::{CartAction, CartReducer, CartState, Product, ProductId};
use cart_store::ui::mvi::Reducer;
use parking_lot::Mutex;
use std::net::TcpListener;
use std::sync::Arc;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn product(id: u64) -> Product {
    Product {
        id: ProductId(id),
        title: format!("Product {}", id),
        price: 9.99,
        image: format!("https://img.example/{}.png", id),
    }
}

pub fn catalog_client(endpoint: &str) -> CatalogClient {
    catalog_client_with(CatalogConfig {
        endpoint: endpoint.to_string(),
        connect_timeout_seconds: Some(2),
        timeout_seconds: None,
    })
}

pub fn catalog_client_with(config: CatalogConfig) -> CatalogClient {
    CatalogClient::new(&config).expect("Failed to build catalog client")
}

/// Cart reducer that records every action it is asked to reduce.
#[derive(Clone, Default)]
pub struct RecordingReducer {
    seen: Arc<Mutex<Vec<CartAction>>>,
}

impl RecordingReducer {
    pub fn actions(&self) -> Vec<CartAction> {
        self.seen.lock().clone()
    }
}

impl Reducer for RecordingReducer {
    type State = CartState;
    type Intent = CartAction;

    fn reduce(&self, state: &CartState, intent: CartAction) -> CartState {
        self.seen.lock().push(intent.clone());
        CartReducer.reduce(state, intent)
    }
}
