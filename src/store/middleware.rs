//! Async dispatch middleware.
//!
//! Everything passed to [`Store::dispatch`](super::Store::dispatch) is a
//! [`Dispatchable`]: either a plain intent bound for the reducer, or a
//! workflow to be started on the runtime. The middleware decides which
//! path a value takes; it never looks inside an intent.

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::workflow::{Workflow, WorkflowContext};
use super::Store;
use crate::ui::mvi::Reducer;

/// Input accepted by the store's dispatch.
pub enum Dispatchable<R: Reducer> {
    /// Plain intent, reduced and committed synchronously.
    Action(R::Intent),
    /// Deferred work, started and left to run.
    Workflow(Box<dyn Workflow<R>>),
}

impl<R: Reducer> Dispatchable<R> {
    pub fn workflow(workflow: impl Workflow<R>) -> Self {
        Dispatchable::Workflow(Box::new(workflow))
    }
}

impl<R: Reducer> std::fmt::Debug for Dispatchable<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dispatchable::Action(intent) => f.debug_tuple("Action").field(intent).finish(),
            Dispatchable::Workflow(workflow) => {
                f.debug_tuple("Workflow").field(&workflow.name()).finish()
            }
        }
    }
}

/// What the middleware did with a dispatched value.
pub(crate) enum Handled<I> {
    /// Continue to the reducer-commit path.
    PassThrough(I),
    /// A workflow was spawned.
    Started(JoinHandle<()>),
}

/// Runs workflows on a Tokio runtime; passes intents through untouched.
#[derive(Debug, Clone)]
pub(crate) struct ThunkMiddleware {
    runtime: Handle,
}

impl ThunkMiddleware {
    pub(crate) fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    pub(crate) fn handle<R: Reducer>(
        &self,
        input: Dispatchable<R>,
        store: &Store<R>,
    ) -> Handled<R::Intent> {
        match input {
            Dispatchable::Action(intent) => Handled::PassThrough(intent),
            Dispatchable::Workflow(workflow) => {
                tracing::info!(workflow = workflow.name(), "Starting workflow");
                let ctx = WorkflowContext::new(store.clone());
                Handled::Started(self.runtime.spawn(workflow.run(ctx)))
            }
        }
    }
}
