use std::sync::Arc;

use crate::catalog::{fetch_products, CatalogClient};
use crate::store::{Dispatched, Store, Subscription};
use crate::ui::cart::{CartAction, CartReducer, CartState, ProductId};

pub type CartStore = Store<CartReducer>;

/// Driver-facing facade over the store: what the view layer is allowed
/// to do, and nothing more.
pub struct App {
    store: CartStore,
    catalog: CatalogClient,
    render_subscription: Option<Subscription>,
}

impl App {
    pub fn new(store: CartStore, catalog: CatalogClient) -> Self {
        Self {
            store,
            catalog,
            render_subscription: None,
        }
    }

    pub fn store(&self) -> &CartStore {
        &self.store
    }

    pub fn state(&self) -> Arc<CartState> {
        self.store.get_state()
    }

    /// Startup sequence: subscribe `render`, start the catalog fetch, then
    /// render the state taken before the fetch started, without waiting for it.
    ///
    /// Returns the fetch's dispatch outcome so callers may await it.
    pub fn bootstrap<F>(&mut self, render: F) -> Dispatched
    where
        F: Fn(&CartState) + Send + Sync + 'static,
    {
        let render = Arc::new(render);

        if let Some(previous) = self.render_subscription.take() {
            previous.unsubscribe();
        }
        let store = self.store.clone();
        let on_change = Arc::clone(&render);
        self.render_subscription = Some(self.store.subscribe(move || {
            on_change(store.get_state().as_ref());
        }));

        // A fast fetch may commit before the initial render below.
        let initial = self.store.get_state();
        let fetch = self
            .store
            .dispatch(fetch_products::<CartReducer>(self.catalog.clone()));

        render(initial.as_ref());
        fetch
    }

    /// Add the catalog product with `id` to the cart.
    ///
    /// Returns false, dispatching nothing, when the catalog has no such id.
    pub fn add_to_cart(&self, id: ProductId) -> bool {
        let state = self.store.get_state();
        match state.product(id) {
            Some(product) => {
                self.store.dispatch(CartAction::AddToCart(product.clone()));
                true
            }
            None => {
                tracing::debug!(%id, "Add ignored: product not in catalog");
                false
            }
        }
    }

    pub fn remove_from_cart(&self, id: ProductId) {
        self.store.dispatch(CartAction::RemoveFromCart(id));
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // The render listener holds a store clone.
        if let Some(subscription) = self.render_subscription.take() {
            subscription.unsubscribe();
        }
    }
}
