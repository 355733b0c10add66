//! Delayed callbacks with cancellation.
//!
//! All timers share one ordered queue drained by a single driver task, so
//! callbacks fire by deadline and, for equal deadlines, in the order they
//! were scheduled.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::Notify;
use tokio::task::AbortHandle;
use tokio::time::Instant;

type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Queue position: deadline first, then scheduling order.
type TimerKey = (Instant, u64);

/// Runs callbacks after a delay on the current tokio runtime.
///
/// Every scheduled callback stays queued until it fires or is cancelled,
/// so teardown can cancel whatever is still in flight.
#[derive(Clone, Default)]
pub struct Scheduler {
    inner: Arc<SchedulerInner>,
}

#[derive(Default)]
struct SchedulerInner {
    queue: Mutex<BTreeMap<TimerKey, Callback>>,
    next_id: AtomicU64,
    wake: Arc<Notify>,
    driver: Mutex<Option<AbortHandle>>,
}

impl Drop for SchedulerInner {
    fn drop(&mut self) {
        if let Some(driver) = self.driver.get_mut().take() {
            driver.abort();
        }
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` once `delay` has elapsed.
    ///
    /// Must be called from within a tokio runtime. Dropping the returned
    /// handle does not cancel the timer.
    pub fn schedule<F>(&self, delay: Duration, callback: F) -> TimerHandle
    where
        F: FnOnce() + Send + 'static,
    {
        self.schedule_at(Instant::now() + delay, callback)
    }

    /// Run `callback` at `deadline`. Callbacks with equal deadlines fire
    /// in scheduling order.
    pub fn schedule_at<F>(&self, deadline: Instant, callback: F) -> TimerHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let key = (deadline, self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner.queue.lock().insert(key, Box::new(callback));
        self.ensure_driver();
        self.inner.wake.notify_one();

        TimerHandle {
            key,
            scheduler: Arc::downgrade(&self.inner),
        }
    }

    fn ensure_driver(&self) {
        let mut driver = self.inner.driver.lock();
        if driver.is_none() {
            let task = tokio::spawn(drive(
                Arc::downgrade(&self.inner),
                Arc::clone(&self.inner.wake),
            ));
            *driver = Some(task.abort_handle());
        }
    }

    /// Number of timers that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.inner.queue.lock().len()
    }

    /// Cancel every pending timer. Returns how many were cancelled.
    pub fn cancel_all(&self) -> usize {
        let drained = std::mem::take(&mut *self.inner.queue.lock());
        drained.len()
    }
}

/// Fires due callbacks in key order. Holds only a weak reference so the
/// scheduler can be dropped while the driver sleeps.
async fn drive(inner: Weak<SchedulerInner>, wake: Arc<Notify>) {
    loop {
        let next_deadline = {
            let Some(inner) = inner.upgrade() else {
                return;
            };
            let deadline = inner.queue.lock().keys().next().map(|(deadline, _)| *deadline);
            deadline
        };

        match next_deadline {
            None => wake.notified().await,
            Some(deadline) => {
                tokio::select! {
                    _ = tokio::time::sleep_until(deadline) => {}
                    // An earlier timer may have been queued; re-read the head.
                    _ = wake.notified() => continue,
                }
            }
        }

        loop {
            let Some(inner) = inner.upgrade() else {
                return;
            };
            let due = {
                let mut queue = inner.queue.lock();
                match queue.first_key_value() {
                    Some((&(deadline, _), _)) if deadline <= Instant::now() => {
                        queue.pop_first().map(|(_, callback)| callback)
                    }
                    _ => None,
                }
            };
            match due {
                Some(callback) => callback(),
                None => break,
            }
        }
    }
}

/// Handle to a single scheduled callback.
#[derive(Debug)]
pub struct TimerHandle {
    key: TimerKey,
    scheduler: Weak<SchedulerInner>,
}

impl TimerHandle {
    /// Cancel the timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&self) -> bool {
        let Some(inner) = self.scheduler.upgrade() else {
            return false;
        };
        let removed = inner.queue.lock().remove(&self.key);
        removed.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.scheduler
            .upgrade()
            .is_some_and(|inner| inner.queue.lock().contains_key(&self.key))
    }
}
