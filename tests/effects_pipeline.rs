//! End-to-end behaviour of the intent -> delay -> outcome pipeline.

mod common;

use common::*;
use std::sync::Arc;
use std::time::Duration;
use tally::effects::SimulatedService;
use tally::store::{select_counter, select_error, ActionKind, CounterAction, Operation};
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn increment_resolves_only_after_delay() {
    let store = make_store();
    let effects = spawn_effects(&store);
    let start = Instant::now();

    store.dispatch(CounterAction::Increment);
    assert_eq!(store.select(select_counter), 0);

    let state = wait_for_state(&store, |s| s.counter == 1).await;
    assert!(start.elapsed() >= DELAY);
    assert_eq!(state.error, None);
    assert_eq!(select_error(&store.state()), None);

    effects.shutdown();
}

#[tokio::test(start_paused = true)]
async fn outcome_not_visible_one_millisecond_early() {
    let store = make_store();
    let effects = spawn_effects(&store);

    store.dispatch(CounterAction::Increment);
    settle().await;
    assert_eq!(effects.in_flight(), 1);

    tokio::time::advance(Duration::from_millis(999)).await;
    settle().await;
    assert_eq!(store.select(select_counter), 0);

    tokio::time::advance(Duration::from_millis(1)).await;
    settle().await;
    assert_eq!(store.select(select_counter), 1);
    assert_eq!(effects.in_flight(), 0);

    effects.shutdown();
}

#[tokio::test(start_paused = true)]
async fn each_intent_yields_exactly_one_outcome() {
    let store = make_store();
    let effects = spawn_effects(&store);
    let mut outcomes = store.subscribe(&[
        ActionKind::IncrementSuccess,
        ActionKind::IncrementError,
    ]);

    store.dispatch(CounterAction::Increment);
    wait_for_state(&store, |s| s.counter == 1).await;

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(outcomes.try_recv(), Some(CounterAction::IncrementSuccess));
    assert_eq!(outcomes.try_recv(), None);
    assert_eq!(store.select(select_counter), 1);

    effects.shutdown();
}

#[tokio::test(start_paused = true)]
async fn rapid_decrements_are_not_debounced() {
    let store = make_store();
    let effects = spawn_effects(&store);

    for _ in 0..3 {
        store.dispatch(CounterAction::Decrement);
    }

    let state = wait_for_state(&store, |s| s.counter == -3).await;
    assert_eq!(state.error, None);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(store.select(select_counter), -3);

    effects.shutdown();
}

#[tokio::test(start_paused = true)]
async fn reset_from_five_returns_to_zero() {
    let store = store_at(5);
    let effects = spawn_effects(&store);

    store.dispatch(CounterAction::Reset);
    assert_eq!(store.select(select_counter), 5);

    let state = wait_for_state(&store, |s| s.counter == 0).await;
    assert_eq!(state.error, None);

    effects.shutdown();
}

#[tokio::test(start_paused = true)]
async fn mixed_intents_resolve_in_dispatch_order() {
    let store = make_store();
    let effects = spawn_effects(&store);
    let mut outcomes = store.subscribe(&[
        ActionKind::IncrementSuccess,
        ActionKind::DecrementSuccess,
        ActionKind::ResetSuccess,
    ]);

    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Reset);
    store.dispatch(CounterAction::Decrement);

    tokio::time::sleep(Duration::from_secs(3)).await;
    let mut seen = Vec::new();
    while let Some(action) = outcomes.try_recv() {
        seen.push(action);
    }
    assert_eq!(
        seen,
        vec![
            CounterAction::IncrementSuccess,
            CounterAction::ResetSuccess,
            CounterAction::DecrementSuccess,
        ]
    );
    assert_eq!(store.select(select_counter), -1);

    effects.shutdown();
}

#[tokio::test(start_paused = true)]
async fn repeated_mixed_bursts_stay_ordered() {
    let store = store_at(10);
    let effects = spawn_effects(&store);

    for _ in 0..5 {
        store.dispatch(CounterAction::Decrement);
        store.dispatch(CounterAction::Reset);
        store.dispatch(CounterAction::Increment);
        store.dispatch(CounterAction::Increment);
    }

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(store.select(select_counter), 2);
    let outcomes: Vec<ActionKind> = store
        .history()
        .iter()
        .map(|entry| entry.action.kind())
        .filter(|kind| !kind.is_intent())
        .collect();
    assert_eq!(
        &outcomes[..4],
        &[
            ActionKind::DecrementSuccess,
            ActionKind::ResetSuccess,
            ActionKind::IncrementSuccess,
            ActionKind::IncrementSuccess,
        ]
    );

    effects.shutdown();
}

#[tokio::test(start_paused = true)]
async fn different_intents_resolve_independently() {
    let store = make_store();
    let effects = spawn_effects(&store);
    let start = Instant::now();

    store.dispatch(CounterAction::Increment);
    tokio::time::sleep(Duration::from_millis(500)).await;
    store.dispatch(CounterAction::Decrement);

    wait_for_state(&store, |s| s.counter == 1).await;
    let first = start.elapsed();
    wait_for_state(&store, |s| s.counter == 0).await;
    let second = start.elapsed();

    assert!(first >= DELAY);
    assert!(second >= DELAY + Duration::from_millis(500));

    effects.shutdown();
}

#[tokio::test(start_paused = true)]
async fn failing_service_emits_matching_error_and_logs_it() {
    let store = store_at(3);
    let sink = Arc::new(RecordingSink::default());
    let effects = spawn_effects_with(&store, Arc::new(FailingService), sink.clone());

    store.dispatch(CounterAction::Reset);
    let state = wait_for_state(&store, |s| s.error.is_some()).await;
    assert_eq!(state.counter, 3);
    assert_eq!(state.error.as_deref(), Some(Operation::Reset.failure_message()));

    settle().await;
    let records = sink.records.lock().clone();
    assert_eq!(
        records,
        vec![Operation::Reset.error(Operation::Reset.failure_message())]
    );

    effects.shutdown();
}

#[tokio::test(start_paused = true)]
async fn error_sink_never_dispatches() {
    let store = make_store();
    let sink = Arc::new(RecordingSink::default());
    let effects = spawn_effects_with(&store, Arc::new(FailingService), sink.clone());

    store.dispatch(CounterAction::Increment);
    wait_for_state(&store, |s| s.error.is_some()).await;
    tokio::time::sleep(Duration::from_secs(5)).await;

    let kinds: Vec<ActionKind> = store.history().iter().map(|e| e.action.kind()).collect();
    assert_eq!(kinds, vec![ActionKind::Increment, ActionKind::IncrementError]);
    assert_eq!(sink.records.lock().len(), 1);

    effects.shutdown();
}

#[tokio::test(start_paused = true)]
async fn next_success_clears_error() {
    let store = make_store();
    // Second call fails, first and third succeed.
    let effects = spawn_effects_with(
        &store,
        Arc::new(SimulatedService::new(2)),
        Arc::new(RecordingSink::default()),
    );

    store.dispatch(CounterAction::Increment);
    wait_for_state(&store, |s| s.counter == 1).await;

    store.dispatch(CounterAction::Decrement);
    let failed = wait_for_state(&store, |s| s.error.is_some()).await;
    assert_eq!(failed.counter, 1);
    assert_eq!(
        failed.error.as_deref(),
        Some(Operation::Decrement.failure_message())
    );

    store.dispatch(CounterAction::Increment);
    let recovered = wait_for_state(&store, |s| s.counter == 2).await;
    assert_eq!(recovered.error, None);

    effects.shutdown();
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_pending_outcomes() {
    let store = make_store();
    let effects = spawn_effects(&store);

    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Increment);
    settle().await;
    assert_eq!(effects.in_flight(), 2);

    effects.shutdown();
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(store.select(select_counter), 0);
    assert_eq!(store.subscriber_count(), 0);
}
