use std::sync::Arc;

use crate::store::{
    select_counter, select_error_owned, AppState, HistoryEntry, Memoized, Operation, Store,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PopupKind {
    History,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Counter,
    Popup(PopupKind),
}

/// View model: selector projections plus the store handle to dispatch on.
///
/// Holds no counter state of its own; everything shown comes from the
/// latest store snapshot passed to [`App::on_state`].
pub struct App {
    should_quit: bool,
    focus: Focus,
    store: Store,
    counter: Memoized<i64>,
    error: Memoized<Option<String>>,
    in_flight: usize,
}

impl App {
    pub fn new(store: Store) -> Self {
        let state = store.state();
        Self {
            should_quit: false,
            focus: Focus::Counter,
            counter: Memoized::new(select_counter, &state),
            error: Memoized::new(select_error_owned, &state),
            in_flight: 0,
            store,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn show_popup(&self) -> bool {
        matches!(self.focus, Focus::Popup(_))
    }

    pub fn popup_kind(&self) -> Option<PopupKind> {
        match self.focus {
            Focus::Popup(kind) => Some(kind),
            Focus::Counter => None,
        }
    }

    pub fn toggle_popup(&mut self, kind: PopupKind) -> bool {
        self.focus = match self.focus {
            Focus::Popup(active) if active == kind => Focus::Counter,
            _ => Focus::Popup(kind),
        };
        self.show_popup()
    }

    pub fn close_popup(&mut self) {
        self.focus = Focus::Counter;
    }

    /// Refresh projections from a new snapshot. Returns true if anything shown changed.
    pub fn on_state(&mut self, state: &Arc<AppState>) -> bool {
        let counter_changed = self.counter.update(state);
        let error_changed = self.error.update(state);
        if error_changed {
            if let Some(error) = self.error.get() {
                tracing::debug!(error = %error, "Showing error");
            }
        }
        counter_changed || error_changed
    }

    pub fn counter(&self) -> i64 {
        *self.counter.get()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.get().as_deref()
    }

    /// Requests whose outcome has not been dispatched yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn set_in_flight(&mut self, in_flight: usize) {
        self.in_flight = in_flight;
    }

    pub fn increment(&self) {
        self.request(Operation::Increment);
    }

    pub fn decrement(&self) {
        self.request(Operation::Decrement);
    }

    pub fn reset(&self) {
        self.request(Operation::Reset);
    }

    fn request(&self, operation: Operation) {
        tracing::debug!(?operation, "User requested operation");
        self.store.dispatch(operation.intent());
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.store.history()
    }
}
