//! Pure projections from [`AppState`].

use std::sync::Arc;

use super::state::AppState;

pub fn select_counter(state: &AppState) -> i64 {
    state.counter
}

pub fn select_error(state: &AppState) -> Option<&str> {
    state.error.as_deref()
}

/// Caches a selector's result by the identity of the last state snapshot.
///
/// The store replaces its `Arc<AppState>` on every change, so pointer
/// equality is enough to skip re-projection.
pub struct Memoized<T> {
    project: fn(&AppState) -> T,
    last_state: Option<Arc<AppState>>,
    value: T,
}

impl<T: Clone + PartialEq> Memoized<T> {
    pub fn new(project: fn(&AppState) -> T, state: &Arc<AppState>) -> Self {
        Self {
            project,
            value: project(state),
            last_state: Some(Arc::clone(state)),
        }
    }

    /// Re-run the projection if `state` is a new snapshot.
    ///
    /// Returns true when the projected value changed.
    pub fn update(&mut self, state: &Arc<AppState>) -> bool {
        if let Some(last) = &self.last_state {
            if Arc::ptr_eq(last, state) {
                return false;
            }
        }
        self.last_state = Some(Arc::clone(state));
        let next = (self.project)(state);
        if next == self.value {
            return false;
        }
        self.value = next;
        true
    }

    pub fn get(&self) -> &T {
        &self.value
    }
}

/// Owned variant of [`select_error`] for use with [`Memoized`].
pub fn select_error_owned(state: &AppState) -> Option<String> {
    state.error.clone()
}
