//! The fetch-products workflow.
//!
//! ```text
//! Start ──GET──┬─ 2xx + decodable body ──→ dispatch SetProducts ──→ Done
//!              └─ anything else ─────────→ dispatch SetError ────→ Done
//! ```
//!
//! Single attempt, no retry, not cancellable.

use crate::catalog::client::CatalogClient;
use crate::store::{Dispatchable, Workflow, WorkflowContext, WorkflowFuture};
use crate::ui::cart::CartAction;
use crate::ui::mvi::Reducer;

/// The only error text the view ever shows for a failed fetch.
pub const FETCH_ERROR_MESSAGE: &str = "An error occurred while fetching products.";

/// Workflow that loads the catalog and reports the outcome as one action.
#[derive(Debug, Clone)]
pub struct FetchProducts {
    client: CatalogClient,
}

impl FetchProducts {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }
}

impl<R> Workflow<R> for FetchProducts
where
    R: Reducer<Intent = CartAction>,
{
    fn name(&self) -> &'static str {
        "fetch_products"
    }

    fn run(self: Box<Self>, ctx: WorkflowContext<R>) -> WorkflowFuture {
        Box::pin(async move {
            let action = match self.client.fetch_products().await {
                Ok(products) => {
                    tracing::info!(count = products.len(), "Catalog fetched");
                    CartAction::SetProducts(products)
                }
                Err(err) => {
                    tracing::warn!(
                        endpoint = self.client.endpoint(),
                        kind = err.kind(),
                        error = %err,
                        "Catalog fetch failed"
                    );
                    CartAction::SetError(FETCH_ERROR_MESSAGE.to_string())
                }
            };
            ctx.dispatch(action);
        })
    }
}

/// Action producer for the fetch workflow.
pub fn fetch_products<R>(client: CatalogClient) -> Dispatchable<R>
where
    R: Reducer<Intent = CartAction>,
{
    Dispatchable::workflow(FetchProducts::new(client))
}
