//! Reducer for the counter store.

use crate::mvi::Reducer;

use super::action::CounterAction;
use super::state::AppState;

/// Folds outcome actions into [`AppState`].
///
/// Intents pass through unchanged; only the effect pipeline resolves them.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = AppState;
    type Action = CounterAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            CounterAction::IncrementSuccess => AppState {
                counter: state.counter.saturating_add(1),
                error: None,
            },
            CounterAction::DecrementSuccess => AppState {
                counter: state.counter.saturating_sub(1),
                error: None,
            },
            CounterAction::ResetSuccess => AppState {
                counter: 0,
                error: None,
            },
            CounterAction::IncrementError { error }
            | CounterAction::DecrementError { error }
            | CounterAction::ResetError { error } => AppState {
                error: Some(error),
                ..state
            },
            CounterAction::Increment | CounterAction::Decrement | CounterAction::Reset => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::action::Operation;

    fn errored(counter: i64) -> AppState {
        AppState {
            counter,
            error: Some("previous failure".to_string()),
        }
    }

    #[test]
    fn increment_success_adds_one_and_clears_error() {
        let new = CounterReducer::reduce(errored(4), CounterAction::IncrementSuccess);
        assert_eq!(new, AppState { counter: 5, error: None });
    }

    #[test]
    fn decrement_success_subtracts_one_and_clears_error() {
        let new = CounterReducer::reduce(errored(0), CounterAction::DecrementSuccess);
        assert_eq!(new, AppState { counter: -1, error: None });
    }

    #[test]
    fn reset_success_zeroes_counter() {
        let new = CounterReducer::reduce(errored(42), CounterAction::ResetSuccess);
        assert_eq!(new, AppState::default());
    }

    #[test]
    fn reset_success_twice_stays_zero() {
        let once = CounterReducer::reduce(errored(7), CounterAction::ResetSuccess);
        assert_eq!(once.counter, 0);
        let twice = CounterReducer::reduce(once, CounterAction::ResetSuccess);
        assert_eq!(twice.counter, 0);
    }

    #[test]
    fn error_outcomes_keep_counter_and_set_message() {
        for op in Operation::ALL {
            let state = AppState {
                counter: 9,
                error: None,
            };
            let new = CounterReducer::reduce(state, op.error("went wrong"));
            assert_eq!(new.counter, 9);
            assert_eq!(new.error.as_deref(), Some("went wrong"));
        }
    }

    #[test]
    fn intents_are_identity() {
        for op in Operation::ALL {
            let state = errored(-3);
            let new = CounterReducer::reduce(state.clone(), op.intent());
            assert_eq!(new, state);
        }
    }

    #[test]
    fn counter_saturates_at_bounds() {
        let top = AppState {
            counter: i64::MAX,
            error: None,
        };
        assert_eq!(
            CounterReducer::reduce(top, CounterAction::IncrementSuccess).counter,
            i64::MAX
        );
        let bottom = AppState {
            counter: i64::MIN,
            error: None,
        };
        assert_eq!(
            CounterReducer::reduce(bottom, CounterAction::DecrementSuccess).counter,
            i64::MIN
        );
    }

    #[test]
    fn reduce_or_init_starts_from_default() {
        let new = CounterReducer::reduce_or_init(None, CounterAction::IncrementSuccess);
        assert_eq!(new, AppState { counter: 1, error: None });

        let untouched = CounterReducer::reduce_or_init(None, CounterAction::Decrement);
        assert_eq!(untouched, AppState::default());
    }
}
