/*!
 * Gantt Trace Recorder
 * Append-only record of execution intervals
 */

use crate::core::types::{ProcessId, Ticks};
use crate::process::TimeSlice;

/// Ordered sequence of execution slices for one run
#[derive(Debug, Default, Clone)]
pub(super) struct GanttTrace {
    slices: Vec<TimeSlice>,
}

impl GanttTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one execution step
    pub fn record(&mut self, pid: &ProcessId, start: Ticks, stop: Ticks) {
        debug_assert!(start < stop, "empty slice for {pid}: [{start}, {stop})");
        debug_assert!(
            self.slices.last().map_or(true, |last| last.stop <= start),
            "slice for {pid} overlaps the previous one"
        );
        self.slices.push(TimeSlice::new(pid.clone(), start, stop));
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn into_slices(self) -> Vec<TimeSlice> {
        self.slices
    }
}
