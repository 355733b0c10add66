use crate::mvi::State;

/// Counter value plus the message of the last failed operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub counter: i64,
    /// Set right after a failed operation; cleared by the next success.
    pub error: Option<String>,
}

impl State for AppState {}
