//! Tally: a terminal counter built on a unidirectional action store.
//!
//! ```text
//! view ──intent──→ Store ──→ effects ──[delay]──outcome──→ Store
//!   ↑                │
//!   └───snapshot─────┘
//! ```

pub mod cli;
pub mod config;
pub mod effects;
pub mod logging;
pub mod mvi;
pub mod shutdown;
pub mod store;
pub mod ui;
