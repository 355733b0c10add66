//! Bounded log of recently dispatched actions.

use std::collections::VecDeque;

use super::action::CounterAction;

pub const DEFAULT_HISTORY_LIMIT: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Dispatch sequence number, starting at 1.
    pub seq: u64,
    pub action: CounterAction,
    /// Counter value right after the action was reduced.
    pub counter_after: i64,
}

/// Ring buffer keeping the last `limit` entries, oldest first.
#[derive(Debug)]
pub struct ActionHistory {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
    next_seq: u64,
}

impl ActionHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
            next_seq: 1,
        }
    }

    /// Append an entry and return the sequence number it was given.
    pub fn record(&mut self, action: CounterAction, counter_after: i64) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        if self.limit == 0 {
            return seq;
        }
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry {
            seq,
            action,
            counter_after,
        });
        seq
    }

    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }
}
