//! The fallible step an effect runs once its delay has elapsed.

use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

use crate::store::Operation;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("{operation:?} operation failed: {reason}")]
    Failed { operation: Operation, reason: String },
}

/// Backend an effect consults before emitting its outcome.
pub trait OperationService: Send + Sync {
    fn perform(&self, operation: Operation) -> Result<(), OperationError>;
}

/// Stand-in for a remote backend. Succeeds unless told to fail every
/// `fail_every`-th call (0 disables failures).
#[derive(Debug, Default)]
pub struct SimulatedService {
    fail_every: u32,
    calls: AtomicU64,
}

impl SimulatedService {
    pub fn new(fail_every: u32) -> Self {
        Self {
            fail_every,
            calls: AtomicU64::new(0),
        }
    }
}

impl OperationService for SimulatedService {
    fn perform(&self, operation: Operation) -> Result<(), OperationError> {
        let call = self.calls.fetch_add(1, Ordering::Relaxed) + 1;
        if self.fail_every > 0 && call % u64::from(self.fail_every) == 0 {
            return Err(OperationError::Failed {
                operation,
                reason: format!("simulated failure on call {call}"),
            });
        }
        Ok(())
    }
}
