//! Deferred units of work that report back through dispatch.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::middleware::Dispatchable;
use super::{Dispatched, Store};
use crate::ui::mvi::Reducer;

/// Boxed future a workflow runs to completion on the store's runtime.
pub type WorkflowFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// An asynchronous unit of work that eventually dispatches zero or more
/// plain intents.
///
/// A workflow owns no state of its own; everything it learns goes back
/// into the store through [`WorkflowContext::dispatch`].
pub trait Workflow<R: Reducer>: Send + 'static {
    /// Name used in log events.
    fn name(&self) -> &'static str {
        "workflow"
    }

    fn run(self: Box<Self>, ctx: WorkflowContext<R>) -> WorkflowFuture;
}

/// Capabilities handed to a running workflow.
pub struct WorkflowContext<R: Reducer> {
    store: Store<R>,
}

impl<R: Reducer> WorkflowContext<R> {
    pub(crate) fn new(store: Store<R>) -> Self {
        Self { store }
    }

    /// Dispatch through the same middleware the store uses, so a workflow
    /// may start further workflows.
    pub fn dispatch(&self, input: impl Into<Dispatchable<R>>) -> Dispatched {
        self.store.dispatch(input)
    }

    pub fn get_state(&self) -> Arc<R::State> {
        self.store.get_state()
    }
}

impl<R: Reducer> Clone for WorkflowContext<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

struct FnWorkflow<F> {
    name: &'static str,
    f: F,
}

impl<R, F, Fut> Workflow<R> for FnWorkflow<F>
where
    R: Reducer,
    F: FnOnce(WorkflowContext<R>) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn run(self: Box<Self>, ctx: WorkflowContext<R>) -> WorkflowFuture {
        Box::pin((self.f)(ctx))
    }
}

/// Wrap an async closure as a dispatchable workflow.
pub fn workflow_fn<R, F, Fut>(name: &'static str, f: F) -> Dispatchable<R>
where
    R: Reducer,
    F: FnOnce(WorkflowContext<R>) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    Dispatchable::workflow(FnWorkflow { name, f })
}
