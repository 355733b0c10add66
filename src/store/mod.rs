//! Counter store: actions, state, reducer, selectors and the dispatch bus.

mod action;
mod container;
mod history;
mod reducer;
mod selectors;
mod state;

pub use action::{ActionKind, CounterAction, Operation};
pub use container::{Dispatched, Store, Subscription};
pub use history::{ActionHistory, HistoryEntry, DEFAULT_HISTORY_LIMIT};
pub use reducer::CounterReducer;
pub use selectors::{select_counter, select_error, select_error_owned, Memoized};
pub use state::AppState;
