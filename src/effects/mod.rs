//! Side effects: turning intents into delayed outcome actions.

mod pipeline;
mod scheduler;
mod service;

pub use pipeline::{DiagnosticSink, EffectPipeline, EffectsHandle, TracingSink, DEFAULT_DELAY};
pub use scheduler::{Scheduler, TimerHandle};
pub use service::{OperationError, OperationService, SimulatedService};
