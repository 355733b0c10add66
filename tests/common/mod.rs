//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tally::effects::{
    DiagnosticSink, EffectPipeline, EffectsHandle, OperationError, OperationService, Scheduler,
    SimulatedService,
};
use tally::store::{AppState, CounterAction, Operation, Store, DEFAULT_HISTORY_LIMIT};
use tally::ui::app::App;

pub const DELAY: Duration = Duration::from_millis(1000);

pub fn make_store() -> Store {
    Store::new(AppState::default(), DEFAULT_HISTORY_LIMIT)
}

pub fn store_at(counter: i64) -> Store {
    Store::new(
        AppState {
            counter,
            error: None,
        },
        DEFAULT_HISTORY_LIMIT,
    )
}

pub fn make_app() -> App {
    App::new(make_store())
}

/// Start the pipeline with the default delay and a service that never fails.
pub fn spawn_effects(store: &Store) -> EffectsHandle {
    spawn_effects_with(
        store,
        Arc::new(SimulatedService::default()),
        Arc::new(RecordingSink::default()),
    )
}

pub fn spawn_effects_with(
    store: &Store,
    service: Arc<dyn OperationService>,
    sink: Arc<dyn DiagnosticSink>,
) -> EffectsHandle {
    EffectPipeline::new(store.clone(), Scheduler::new(), service)
        .with_delay(DELAY)
        .with_sink(sink)
        .spawn()
}

/// Service that rejects every request.
pub struct FailingService;

impl OperationService for FailingService {
    fn perform(&self, operation: Operation) -> Result<(), OperationError> {
        Err(OperationError::Failed {
            operation,
            reason: "backend unavailable".to_string(),
        })
    }
}

/// Sink that keeps every recorded action.
#[derive(Default)]
pub struct RecordingSink {
    pub records: Mutex<Vec<CounterAction>>,
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, action: &CounterAction) {
        self.records.lock().push(action.clone());
    }
}

/// Let spawned tasks run without moving the clock.
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

/// Wait until the store state satisfies `pred`, failing after a generous timeout.
pub async fn wait_for_state(store: &Store, pred: impl Fn(&AppState) -> bool) -> Arc<AppState> {
    let mut rx = store.watch();
    let wait = async {
        loop {
            let state = rx.borrow_and_update().clone();
            if pred(&state) {
                return state;
            }
            rx.changed().await.expect("store dropped");
        }
    };
    tokio::time::timeout(Duration::from_secs(30), wait)
        .await
        .expect("state condition not reached")
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}
