/*!
 * Scheduler Entry Types
 * Ready-set entries and their orderings
 */

use crate::core::types::Priority;
use std::cmp::Ordering;

/// A process admitted to a ready structure
///
/// `index` points into the run's process slice; `seq` is the admission
/// counter, assigned once when the process leaves the backlog and kept when
/// a preempted process is returned to the ready set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ReadyEntry {
    pub index: usize,
    pub seq: u64,
}

/// Entry for the priority heap (lowest priority value first)
#[derive(Debug, Clone, Copy)]
pub(super) struct PriorityEntry {
    pub priority: Priority,
    pub entry: ReadyEntry,
}

impl PriorityEntry {
    pub fn new(priority: Priority, entry: ReadyEntry) -> Self {
        Self { priority, entry }
    }
}

impl PartialEq for PriorityEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityEntry {}

impl Ord for PriorityEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse both keys so the lowest priority
        // value, then the earliest admission, sits on top
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.entry.seq.cmp(&self.entry.seq))
    }
}

impl PartialOrd for PriorityEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
