/*!
 * Simulation Run State
 * Virtual clock, backlog/ready partition and per-process bookkeeping
 */

use super::entry::ReadyEntry;
use super::stats::ScheduleSummary;
use super::trace::GanttTrace;
use super::Simulation;
use crate::core::types::Ticks;
use crate::process::{Process, ProcessOutcome};
use tracing::{debug, trace};

/// Result of one execution step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Step {
    /// Process still has work left
    Preempted,
    /// Process finished during this step
    Completed,
}

/// State owned by a single simulation run
///
/// Every process is in exactly one place at a time: the backlog (not yet
/// admitted), the policy's ready structure, running, or completed. The run
/// state owns the backlog and the completion bookkeeping; the policy owns the
/// ready structure and hands the running process back after each step.
pub(super) struct RunState<'a> {
    processes: &'a [Process],
    now: Ticks,
    /// Indices not yet admitted, in input order
    backlog: Vec<usize>,
    remaining: Vec<Ticks>,
    waiting: Vec<Option<Ticks>>,
    completion: Vec<Option<Ticks>>,
    completed: usize,
    next_seq: u64,
    trace: GanttTrace,
}

impl<'a> RunState<'a> {
    pub fn new(processes: &'a [Process]) -> Self {
        Self {
            processes,
            now: 0,
            backlog: (0..processes.len()).collect(),
            remaining: processes.iter().map(|p| p.burst_duration).collect(),
            waiting: vec![None; processes.len()],
            completion: vec![None; processes.len()],
            completed: 0,
            next_seq: 0,
            trace: GanttTrace::new(),
        }
    }

    #[inline(always)]
    pub fn now(&self) -> Ticks {
        self.now
    }

    #[inline(always)]
    pub fn process(&self, index: usize) -> &'a Process {
        &self.processes[index]
    }

    #[inline(always)]
    pub fn remaining(&self, index: usize) -> Ticks {
        self.remaining[index]
    }

    /// All processes have completed
    #[inline]
    pub fn is_done(&self) -> bool {
        self.completed == self.processes.len()
    }

    /// Earliest arrival still waiting in the backlog
    pub fn next_arrival(&self) -> Option<Ticks> {
        self.backlog
            .iter()
            .map(|&i| self.processes[i].arrival_time)
            .min()
    }

    /// Idle the CPU until the next backlog arrival
    ///
    /// Nothing can be admitted in the skipped ticks, so this matches
    /// idling one tick at a time.
    pub fn idle_until_next_arrival(&mut self) {
        debug_assert!(!self.backlog.is_empty(), "idling with no pending arrivals");
        if let Some(arrival) = self.next_arrival() {
            self.advance_to(arrival);
        }
    }

    /// Jump the clock forward to `time` if it lies in the future
    pub fn advance_to(&mut self, time: Ticks) {
        if time > self.now {
            trace!(from = self.now, to = time, "CPU idle until arrival");
            self.now = time;
        }
    }

    /// Admit every arrived backlog process accepted by `filter`
    ///
    /// Admitted processes leave the backlog in input order and receive
    /// increasing admission numbers. Rejected and future arrivals stay.
    pub fn admit_arrived<F>(&mut self, mut filter: F) -> Vec<ReadyEntry>
    where
        F: FnMut(&Process) -> bool,
    {
        let now = self.now;
        let processes = self.processes;
        let mut admitted = Vec::new();

        let backlog = std::mem::take(&mut self.backlog);
        let (arrived, pending): (Vec<usize>, Vec<usize>) = backlog
            .into_iter()
            .partition(|&i| processes[i].has_arrived(now) && filter(&processes[i]));
        self.backlog = pending;

        for index in arrived {
            let entry = ReadyEntry {
                index,
                seq: self.next_seq,
            };
            self.next_seq += 1;
            trace!(id = %processes[index].id, now, seq = entry.seq, "Admitted to ready set");
            admitted.push(entry);
        }

        admitted
    }

    /// Admit every arrived backlog process
    pub fn admit_all_arrived(&mut self) -> Vec<ReadyEntry> {
        self.admit_arrived(|_| true)
    }

    /// Run the process at `index` for `length` ticks starting now
    ///
    /// Fixes the waiting time on first dispatch, records the slice, advances
    /// the clock and retires the process once its remaining work hits zero.
    pub fn execute(&mut self, index: usize, length: Ticks) -> Step {
        debug_assert!(length > 0 && length <= self.remaining[index]);
        debug_assert!(self.completion[index].is_none(), "dispatching a completed process");

        let process = &self.processes[index];
        let start = self.now;

        if self.waiting[index].is_none() {
            self.waiting[index] = Some(start - process.arrival_time);
        }

        self.now += length;
        self.remaining[index] -= length;
        self.trace.record(&process.id, start, self.now);

        debug!(
            id = %process.id,
            start,
            stop = self.now,
            remaining = self.remaining[index],
            "Dispatched"
        );

        if self.remaining[index] == 0 {
            self.completion[index] = Some(self.now);
            self.completed += 1;
            debug!(id = %process.id, completion = self.now, "Process completed");
            Step::Completed
        } else {
            Step::Preempted
        }
    }

    /// Consume the run and build per-process outcomes in input order
    pub fn finish(self) -> Simulation {
        debug_assert!(self.is_done(), "finishing an incomplete run");
        debug_assert!(self.trace.len() >= self.processes.len());

        let outcomes: Vec<ProcessOutcome> = self
            .processes
            .iter()
            .enumerate()
            .map(|(i, process)| {
                ProcessOutcome::new(
                    process,
                    self.waiting[i].unwrap_or_default(),
                    self.completion[i].unwrap_or_default(),
                )
            })
            .collect();

        let summary = ScheduleSummary::from_outcomes(&outcomes);

        Simulation {
            gantt: self.trace.into_slices(),
            outcomes,
            summary,
        }
    }
}
