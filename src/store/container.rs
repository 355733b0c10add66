//! State container and action bus.
//!
//! The store owns the current [`AppState`] snapshot, folds every
//! dispatched action through [`CounterReducer`], and fans the action out
//! to filtered subscribers. State is never mutated in place: each change
//! publishes a fresh `Arc<AppState>` on a watch channel.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;

use crate::mvi::Reducer;

use super::action::{ActionKind, CounterAction};
use super::history::{ActionHistory, HistoryEntry};
use super::reducer::CounterReducer;
use super::state::AppState;

/// Cheaply cloneable handle to a shared store.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state_tx: watch::Sender<Arc<AppState>>,
    core: Mutex<StoreCore>,
    next_subscriber_id: AtomicU64,
}

struct StoreCore {
    history: ActionHistory,
    subscribers: Vec<Subscriber>,
}

struct Subscriber {
    id: u64,
    /// Empty means every action.
    kinds: Vec<ActionKind>,
    tx: mpsc::UnboundedSender<Dispatched>,
}

/// An action as delivered to subscribers, stamped when it was dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    /// Store-wide dispatch order, starting at 1.
    pub seq: u64,
    pub dispatched_at: Instant,
    pub action: CounterAction,
}

impl Subscriber {
    fn accepts(&self, kind: ActionKind) -> bool {
        self.kinds.is_empty() || self.kinds.contains(&kind)
    }
}

impl Store {
    pub fn new(initial: AppState, history_limit: usize) -> Self {
        let (state_tx, _) = watch::channel(Arc::new(initial));
        Self {
            inner: Arc::new(StoreInner {
                state_tx,
                core: Mutex::new(StoreCore {
                    history: ActionHistory::new(history_limit),
                    subscribers: Vec::new(),
                }),
                next_subscriber_id: AtomicU64::new(1),
            }),
        }
    }

    /// Reduce `action` into the state, then publish it to subscribers.
    ///
    /// Dispatches are serialized, so subscribers observe actions in
    /// dispatch order and always after the state they produced.
    pub fn dispatch(&self, action: CounterAction) {
        let kind = action.kind();
        let dispatched_at = Instant::now();
        let mut core = self.inner.core.lock();

        let current = self.inner.state_tx.borrow().clone();
        let next = CounterReducer::reduce(AppState::clone(&current), action.clone());
        let counter_after = next.counter;
        if next != *current {
            self.inner.state_tx.send_replace(Arc::new(next));
        }

        let seq = core.history.record(action.clone(), counter_after);
        let dispatched = Dispatched {
            seq,
            dispatched_at,
            action,
        };
        core.subscribers.retain(|subscriber| {
            if !subscriber.accepts(kind) {
                return true;
            }
            // A closed receiver means the subscriber went away without dropping its handle yet.
            subscriber.tx.send(dispatched.clone()).is_ok()
        });

        tracing::debug!(
            seq,
            action = dispatched.action.label(),
            counter = counter_after,
            "Dispatched action"
        );
    }

    /// Subscribe to actions whose kind is in `kinds` (all actions if empty).
    pub fn subscribe(&self, kinds: &[ActionKind]) -> Subscription {
        let id = self.inner.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner.core.lock().subscribers.push(Subscriber {
            id,
            kinds: kinds.to_vec(),
            tx,
        });
        Subscription {
            id,
            rx,
            store: Arc::downgrade(&self.inner),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> Arc<AppState> {
        self.inner.state_tx.borrow().clone()
    }

    /// Apply a selector to the current state.
    pub fn select<T>(&self, selector: impl FnOnce(&AppState) -> T) -> T {
        let state = self.inner.state_tx.borrow();
        selector(&**state)
    }

    /// Reactive stream of state snapshots.
    pub fn watch(&self) -> watch::Receiver<Arc<AppState>> {
        self.inner.state_tx.subscribe()
    }

    /// Recently dispatched actions, oldest first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.inner.core.lock().history.entries()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.core.lock().subscribers.len()
    }
}

/// Filtered action stream. Dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    rx: mpsc::UnboundedReceiver<Dispatched>,
    store: Weak<StoreInner>,
}

impl Subscription {
    /// Next matching action, or `None` once the store is gone.
    pub async fn recv(&mut self) -> Option<CounterAction> {
        self.rx.recv().await.map(|dispatched| dispatched.action)
    }

    /// Like [`Subscription::recv`], keeping the dispatch stamp.
    pub async fn recv_dispatched(&mut self) -> Option<Dispatched> {
        self.rx.recv().await
    }

    /// Non-blocking variant of [`Subscription::recv`].
    pub fn try_recv(&mut self) -> Option<CounterAction> {
        self.rx.try_recv().ok().map(|dispatched| dispatched.action)
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner
                .core
                .lock()
                .subscribers
                .retain(|subscriber| subscriber.id != self.id);
        }
    }
}
