//! Model-View-Intent (MVI) primitives shared by the store and the view.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ View
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot, replaced wholesale on each transition
//! - **Action**: Intents (user requests) and their resolved outcomes
//! - **Reducer**: Pure function folding an action into a new state

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::State;
