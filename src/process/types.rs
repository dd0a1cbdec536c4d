/*!
 * Process Types
 * Process records and the timing data a simulation produces for them
 */

use crate::core::types::{Priority, ProcessId, Ticks};
use serde::{Deserialize, Serialize};

/// One schedulable unit of work
///
/// Records are never mutated by a simulation run; remaining work and
/// completion state live in the run's own bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    pub burst_duration: Ticks,
    pub priority: Priority,
}

impl Process {
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<ProcessId>,
        arrival_time: Ticks,
        burst_duration: Ticks,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_duration,
            priority,
        }
    }

    /// Check whether the process is eligible to run at `now`
    #[inline(always)]
    #[must_use]
    pub const fn has_arrived(&self, now: Ticks) -> bool {
        self.arrival_time <= now
    }
}

/// One contiguous execution interval `[start, stop)` on the CPU
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TimeSlice {
    pub pid: ProcessId,
    pub start: Ticks,
    pub stop: Ticks,
}

impl TimeSlice {
    #[inline]
    pub fn new(pid: ProcessId, start: Ticks, stop: Ticks) -> Self {
        Self { pid, start, stop }
    }

    /// Number of ticks covered by the slice
    #[inline(always)]
    pub const fn len(&self) -> Ticks {
        self.stop - self.start
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.stop <= self.start
    }
}

/// Per-process row of the schedule table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessOutcome {
    pub id: ProcessId,
    pub priority: Priority,
    pub burst_duration: Ticks,
    pub arrival_time: Ticks,
    /// Ticks spent ready before the first dispatch
    pub waiting_time: Ticks,
    /// `completion_time - arrival_time`
    pub turnaround_time: Ticks,
    pub completion_time: Ticks,
}

impl ProcessOutcome {
    pub fn new(process: &Process, waiting_time: Ticks, completion_time: Ticks) -> Self {
        Self {
            id: process.id.clone(),
            priority: process.priority,
            burst_duration: process.burst_duration,
            arrival_time: process.arrival_time,
            waiting_time,
            turnaround_time: completion_time - process.arrival_time,
            completion_time,
        }
    }
}
