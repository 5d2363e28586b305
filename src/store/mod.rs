//! The store: sole owner and writer of application state.
//!
//! # Dispatch protocol
//!
//! ```text
//! dispatch(x) ──→ ThunkMiddleware ──┬─ Action ──→ queue ──→ reduce ──→ commit ──→ notify
//!                                   └─ Workflow ──→ spawn ──→ ... ──→ dispatch(Action)
//! ```
//!
//! All commits happen on one sequential timeline. Whoever finds the queue
//! idle becomes the drainer and commits every queued intent, in order,
//! before returning. An intent dispatched while another caller is draining
//! (a listener dispatching during notification, or a workflow finishing on
//! another runtime thread) is queued and committed by that drainer after
//! the current notification round.

mod middleware;
mod workflow;

pub use middleware::Dispatchable;
pub use workflow::{workflow_fn, Workflow, WorkflowContext, WorkflowFuture};

use parking_lot::{Mutex, RwLock};
use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::ui::mvi::{Intent, Reducer};
use middleware::{Handled, ThunkMiddleware};

type Listener = Arc<dyn Fn() + Send + Sync>;
type ListenerList = Mutex<Vec<(u64, Listener)>>;

/// Outcome of a single [`Store::dispatch`] call.
#[derive(Debug)]
pub enum Dispatched {
    /// The intent was reduced, committed and every listener notified
    /// before dispatch returned.
    Committed,
    /// Another caller is draining; the intent will be committed by it.
    Queued,
    /// A workflow was started. The handle resolves when it finishes.
    Started(JoinHandle<()>),
}

impl Dispatched {
    /// Wait for a started workflow to finish. Returns immediately otherwise.
    pub async fn completed(self) {
        if let Dispatched::Started(handle) = self {
            if let Err(err) = handle.await {
                tracing::error!(error = %err, "Workflow task failed");
            }
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self, Dispatched::Started(_))
    }
}

/// Handle returned by [`Store::subscribe`].
///
/// Dropping it does not unsubscribe; call [`Subscription::unsubscribe`].
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    listeners: Weak<ListenerList>,
}

impl Subscription {
    /// Remove the listener. Calling this more than once is harmless.
    pub fn unsubscribe(&self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.lock().retain(|(id, _)| *id != self.id);
        }
    }
}

struct DispatchQueue<I> {
    pending: VecDeque<I>,
    draining: bool,
}

struct StoreInner<R: Reducer> {
    reducer: R,
    state: RwLock<Arc<R::State>>,
    listeners: Arc<ListenerList>,
    next_listener_id: AtomicU64,
    queue: Mutex<DispatchQueue<R::Intent>>,
    middleware: ThunkMiddleware,
}

/// Owner of the current state, the reducer and the subscriber list.
///
/// Cloning is cheap; every clone refers to the same store.
pub struct Store<R: Reducer> {
    inner: Arc<StoreInner<R>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store. Workflows are spawned on `runtime`.
    pub fn new(reducer: R, initial_state: R::State, runtime: Handle) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                reducer,
                state: RwLock::new(Arc::new(initial_state)),
                listeners: Arc::new(Mutex::new(Vec::new())),
                next_listener_id: AtomicU64::new(0),
                queue: Mutex::new(DispatchQueue {
                    pending: VecDeque::new(),
                    draining: false,
                }),
                middleware: ThunkMiddleware::new(runtime),
            }),
        }
    }

    /// Current state snapshot. Later commits never alter a returned snapshot.
    pub fn get_state(&self) -> Arc<R::State> {
        self.inner.state.read().clone()
    }

    /// Dispatch an intent or a workflow.
    pub fn dispatch(&self, input: impl Into<Dispatchable<R>>) -> Dispatched {
        match self.inner.middleware.handle(input.into(), self) {
            Handled::PassThrough(intent) => self.enqueue(intent),
            Handled::Started(handle) => Dispatched::Started(handle),
        }
    }

    /// Register a zero-argument listener, called after every commit.
    ///
    /// Listeners run in registration order. The listener list is read once
    /// per commit, so changes made during a notification round apply from
    /// the next one.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners.lock().push((id, Arc::new(listener)));
        Subscription {
            id,
            listeners: Arc::downgrade(&self.inner.listeners),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    fn enqueue(&self, intent: R::Intent) -> Dispatched {
        {
            let mut queue = self.inner.queue.lock();
            if queue.draining {
                tracing::debug!(action = intent.tag(), "Dispatch queued behind active drain");
                queue.pending.push_back(intent);
                return Dispatched::Queued;
            }
            queue.pending.push_back(intent);
            queue.draining = true;
        }
        self.drain();
        Dispatched::Committed
    }

    fn drain(&self) {
        // Release drain ownership if a reducer panics mid-loop.
        let queue = scopeguard::guard_on_unwind(&self.inner.queue, |queue| {
            queue.lock().draining = false;
        });

        loop {
            let intent = {
                let mut queue = queue.lock();
                match queue.pending.pop_front() {
                    Some(intent) => intent,
                    None => {
                        queue.draining = false;
                        return;
                    }
                }
            };

            tracing::debug!(action = intent.tag(), "Committing action");
            let current = self.get_state();
            let next = Arc::new(self.inner.reducer.reduce(&current, intent));
            *self.inner.state.write() = next;

            self.notify();
        }
    }

    fn notify(&self) {
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            if panic::catch_unwind(AssertUnwindSafe(|| listener())).is_err() {
                tracing::error!("Store listener panicked; remaining listeners still notified");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::cart::{CartAction, CartReducer, CartState, Product, ProductId};
    use std::sync::atomic::AtomicUsize;

    fn product(id: u64) -> Product {
        Product {
            id: ProductId(id),
            title: format!("Product {}", id),
            price: 1.0,
            image: "u".into(),
        }
    }

    fn store() -> Store<CartReducer> {
        Store::new(CartReducer, CartState::default(), Handle::current())
    }

    #[tokio::test]
    async fn plain_action_commits_synchronously() {
        let store = store();
        let result = store.dispatch(CartAction::AddToCart(product(1)));
        assert!(matches!(result, Dispatched::Committed));
        assert_eq!(store.get_state().cart.len(), 1);
    }

    #[tokio::test]
    async fn earlier_snapshot_survives_later_commits() {
        let store = store();
        let before = store.get_state();
        store.dispatch(CartAction::AddToCart(product(1)));
        assert!(before.cart.is_empty());
        assert_eq!(store.get_state().cart.len(), 1);
    }

    #[tokio::test]
    async fn listeners_notified_in_registration_order() {
        let store = store();
        let calls = Arc::new(Mutex::new(Vec::new()));

        let a = calls.clone();
        store.subscribe(move || a.lock().push("A"));
        let b = calls.clone();
        store.subscribe(move || b.lock().push("B"));

        store.dispatch(CartAction::AddToCart(product(1)));
        store.dispatch(CartAction::RemoveFromCart(ProductId(1)));

        assert_eq!(*calls.lock(), vec!["A", "B", "A", "B"]);
    }

    #[tokio::test]
    async fn unsubscribe_stops_notifications() {
        let store = store();
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let sub = store.subscribe(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(CartAction::Unknown);
        sub.unsubscribe();
        sub.unsubscribe();
        store.dispatch(CartAction::Unknown);

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(store.listener_count(), 0);
    }

    #[tokio::test]
    async fn reentrant_dispatch_is_queued_until_round_completes() {
        let store = store();
        let log = Arc::new(Mutex::new(Vec::new()));

        let nested = Arc::new(Mutex::new(Vec::new()));

        let inner_store = store.clone();
        let first_log = log.clone();
        let first_nested = nested.clone();
        store.subscribe(move || {
            let state = inner_store.get_state();
            first_log.lock().push(("first", state.cart.len()));
            if state.cart.len() == 1 {
                let outcome = inner_store.dispatch(CartAction::AddToCart(product(2)));
                let len_after = inner_store.get_state().cart.len();
                first_nested
                    .lock()
                    .push((matches!(outcome, Dispatched::Queued), len_after));
            }
        });
        let second_store = store.clone();
        let second_log = log.clone();
        store.subscribe(move || {
            second_log
                .lock()
                .push(("second", second_store.get_state().cart.len()));
        });

        let outcome = store.dispatch(CartAction::AddToCart(product(1)));
        assert!(matches!(outcome, Dispatched::Committed));
        assert_eq!(
            *log.lock(),
            vec![("first", 1), ("second", 1), ("first", 2), ("second", 2)]
        );
        // Queued, and not yet visible when dispatch returned.
        assert_eq!(*nested.lock(), vec![(true, 1)]);
        assert_eq!(store.get_state().cart.len(), 2);
    }

    #[tokio::test]
    async fn panicking_listener_does_not_block_others() {
        let store = store();
        let reached = Arc::new(AtomicUsize::new(0));

        store.subscribe(|| panic!("listener failure"));
        let r = reached.clone();
        store.subscribe(move || {
            r.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(CartAction::SetError("x".into()));
        store.dispatch(CartAction::SetProducts(vec![product(1)]));

        assert_eq!(reached.load(Ordering::SeqCst), 2);
        assert_eq!(store.get_state().products.len(), 1);
        assert_eq!(store.get_state().error, None);
    }

    #[tokio::test]
    async fn workflow_returns_before_it_finishes() {
        let store = store();
        let (release_tx, release_rx) = tokio::sync::oneshot::channel::<()>();

        let gated = move |ctx: WorkflowContext<CartReducer>| async move {
            let _ = release_rx.await;
            ctx.dispatch(CartAction::SetProducts(vec![product(3)]));
        };
        let outcome = store.dispatch(workflow_fn("gated", gated));

        assert!(outcome.is_started());
        assert!(store.get_state().products.is_empty());

        release_tx.send(()).unwrap();
        outcome.completed().await;
        assert_eq!(store.get_state().products, vec![product(3)]);
    }

    #[tokio::test]
    async fn workflow_can_read_state_and_start_workflows() {
        let store = store();
        store.dispatch(CartAction::AddToCart(product(1)));

        let outer = |ctx: WorkflowContext<CartReducer>| async move {
            let seen = ctx.get_state().cart.len() as u64;
            let inner = move |ctx: WorkflowContext<CartReducer>| async move {
                ctx.dispatch(CartAction::AddToCart(product(10 + seen)));
            };
            ctx.dispatch(workflow_fn("inner", inner)).completed().await;
        };
        store.dispatch(workflow_fn("outer", outer)).completed().await;

        let state = store.get_state();
        assert_eq!(state.cart.len(), 2);
        assert!(state.cart_line(ProductId(11)).is_some());
    }
}
