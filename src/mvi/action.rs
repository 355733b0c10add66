//! Base trait for actions in MVI architecture.

/// Marker trait for action objects.
///
/// Actions represent:
/// - Intents (key presses asking for a change)
/// - Outcomes (the success or error an effect resolved an intent to)
///
/// Actions travel across tasks, so they must be `Send` and cloneable
/// for fan-out to several subscribers.
pub trait Action: Clone + Send + 'static {}
