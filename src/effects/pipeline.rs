//! Effect pipeline: resolves intents into outcome actions.
//!
//! ```text
//! Increment ──→ [delay] ──→ service ──┬─→ IncrementSuccess
//!                                     └─→ IncrementError
//! *Error ──→ diagnostic sink (never dispatches)
//! ```
//!
//! Every intent occurrence gets its own timer; families never wait on each
//! other. Outcomes fire in dispatch order. Nothing is debounced or
//! cancelled while the pipeline runs.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::store::{ActionKind, CounterAction, Operation, Store, Subscription};

use super::scheduler::Scheduler;
use super::service::OperationService;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Receives error outcomes for diagnostics.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, action: &CounterAction);
}

/// Writes error outcomes to the `tracing` log.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, action: &CounterAction) {
        tracing::error!(
            action = action.label(),
            error = action.error_message().unwrap_or_default(),
            "Counter operation failed"
        );
    }
}

pub struct EffectPipeline {
    store: Store,
    scheduler: Scheduler,
    service: Arc<dyn OperationService>,
    sink: Arc<dyn DiagnosticSink>,
    delay: Duration,
}

impl EffectPipeline {
    pub fn new(store: Store, scheduler: Scheduler, service: Arc<dyn OperationService>) -> Self {
        Self {
            store,
            scheduler,
            service,
            sink: Arc::new(TracingSink),
            delay: DEFAULT_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Start all listeners on the current runtime.
    ///
    /// Subscriptions are taken before this returns, so intents dispatched
    /// right afterwards are never missed.
    pub fn spawn(self) -> EffectsHandle {
        let intent_kinds: Vec<ActionKind> =
            Operation::ALL.iter().map(|op| op.intent_kind()).collect();
        let intents = self.store.subscribe(&intent_kinds);
        let resolver = IntentResolver {
            store: self.store.clone(),
            scheduler: self.scheduler.clone(),
            service: Arc::clone(&self.service),
            delay: self.delay,
        };

        let errors = self.store.subscribe(&ActionKind::ERRORS);
        let listeners = vec![
            tokio::spawn(resolver.run(intents)),
            tokio::spawn(log_errors(errors, Arc::clone(&self.sink))),
        ];

        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "Effect pipeline started");
        EffectsHandle {
            listeners,
            scheduler: self.scheduler,
        }
    }
}

/// Schedules the outcome of every intent.
///
/// All intents arrive on one subscription in dispatch order, and each
/// deadline is measured from the dispatch stamp, so the scheduler's
/// (deadline, order) queue releases outcomes first-in first-out.
struct IntentResolver {
    store: Store,
    scheduler: Scheduler,
    service: Arc<dyn OperationService>,
    delay: Duration,
}

impl IntentResolver {
    async fn run(self, mut intents: Subscription) {
        while let Some(dispatched) = intents.recv_dispatched().await {
            let operation = dispatched.action.operation();
            let store = self.store.clone();
            let service = Arc::clone(&self.service);
            let deadline = dispatched.dispatched_at + self.delay;
            self.scheduler.schedule_at(deadline, move || {
                let outcome = match service.perform(operation) {
                    Ok(()) => operation.success(),
                    Err(err) => {
                        tracing::warn!(error = %err, "Operation service rejected request");
                        operation.error(operation.failure_message())
                    }
                };
                store.dispatch(outcome);
            });
        }
    }
}

async fn log_errors(mut errors: Subscription, sink: Arc<dyn DiagnosticSink>) {
    while let Some(action) = errors.recv().await {
        sink.record(&action);
    }
}

/// Running pipeline. Call [`EffectsHandle::shutdown`] on teardown.
pub struct EffectsHandle {
    listeners: Vec<JoinHandle<()>>,
    scheduler: Scheduler,
}

impl EffectsHandle {
    /// Stop listening and cancel outcomes that have not fired yet.
    pub fn shutdown(self) {
        for listener in &self.listeners {
            listener.abort();
        }
        let cancelled = self.scheduler.cancel_all();
        tracing::debug!(cancelled, "Effect pipeline stopped");
    }

    /// Outcomes scheduled but not yet dispatched.
    pub fn in_flight(&self) -> usize {
        self.scheduler.pending()
    }
}
