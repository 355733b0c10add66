//! Counter actions: three intents and their success/error outcomes.

use crate::mvi::Action;

/// Intent family an action belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Increment,
    Decrement,
    Reset,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Increment, Operation::Decrement, Operation::Reset];

    /// The intent requesting this operation.
    pub fn intent(self) -> CounterAction {
        match self {
            Operation::Increment => CounterAction::Increment,
            Operation::Decrement => CounterAction::Decrement,
            Operation::Reset => CounterAction::Reset,
        }
    }

    pub fn success(self) -> CounterAction {
        match self {
            Operation::Increment => CounterAction::IncrementSuccess,
            Operation::Decrement => CounterAction::DecrementSuccess,
            Operation::Reset => CounterAction::ResetSuccess,
        }
    }

    pub fn error(self, error: impl Into<String>) -> CounterAction {
        let error = error.into();
        match self {
            Operation::Increment => CounterAction::IncrementError { error },
            Operation::Decrement => CounterAction::DecrementError { error },
            Operation::Reset => CounterAction::ResetError { error },
        }
    }

    /// Fixed user-facing message reported when this operation fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Increment => "Failed to increment the counter",
            Operation::Decrement => "Failed to decrement the counter",
            Operation::Reset => "Failed to reset the counter",
        }
    }

    pub fn intent_kind(self) -> ActionKind {
        self.intent().kind()
    }
}

/// Every action the counter store understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    IncrementSuccess,
    IncrementError { error: String },
    Decrement,
    DecrementSuccess,
    DecrementError { error: String },
    Reset,
    ResetSuccess,
    ResetError { error: String },
}

impl Action for CounterAction {}

/// Payload-free tag of a [`CounterAction`], used to filter subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Increment,
    IncrementSuccess,
    IncrementError,
    Decrement,
    DecrementSuccess,
    DecrementError,
    Reset,
    ResetSuccess,
    ResetError,
}

impl ActionKind {
    pub const ERRORS: [ActionKind; 3] = [
        ActionKind::IncrementError,
        ActionKind::DecrementError,
        ActionKind::ResetError,
    ];

    pub fn is_intent(self) -> bool {
        matches!(
            self,
            ActionKind::Increment | ActionKind::Decrement | ActionKind::Reset
        )
    }
}

impl CounterAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            CounterAction::Increment => ActionKind::Increment,
            CounterAction::IncrementSuccess => ActionKind::IncrementSuccess,
            CounterAction::IncrementError { .. } => ActionKind::IncrementError,
            CounterAction::Decrement => ActionKind::Decrement,
            CounterAction::DecrementSuccess => ActionKind::DecrementSuccess,
            CounterAction::DecrementError { .. } => ActionKind::DecrementError,
            CounterAction::Reset => ActionKind::Reset,
            CounterAction::ResetSuccess => ActionKind::ResetSuccess,
            CounterAction::ResetError { .. } => ActionKind::ResetError,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            CounterAction::Increment
            | CounterAction::IncrementSuccess
            | CounterAction::IncrementError { .. } => Operation::Increment,
            CounterAction::Decrement
            | CounterAction::DecrementSuccess
            | CounterAction::DecrementError { .. } => Operation::Decrement,
            CounterAction::Reset
            | CounterAction::ResetSuccess
            | CounterAction::ResetError { .. } => Operation::Reset,
        }
    }

    /// Stable display label, e.g. `[Counter] Increment Success`.
    pub fn label(&self) -> &'static str {
        match self {
            CounterAction::Increment => "[Counter] Increment",
            CounterAction::IncrementSuccess => "[Counter] Increment Success",
            CounterAction::IncrementError { .. } => "[Counter] Increment Error",
            CounterAction::Decrement => "[Counter] Decrement",
            CounterAction::DecrementSuccess => "[Counter] Decrement Success",
            CounterAction::DecrementError { .. } => "[Counter] Decrement Error",
            CounterAction::Reset => "[Counter] Reset",
            CounterAction::ResetSuccess => "[Counter] Reset Success",
            CounterAction::ResetError { .. } => "[Counter] Reset Error",
        }
    }

    /// Error payload, if this is one of the error outcomes.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            CounterAction::IncrementError { error }
            | CounterAction::DecrementError { error }
            | CounterAction::ResetError { error } => Some(error),
            _ => None,
        }
    }
}
