/*!
 * Shortest Job First with Priority
 * Priority-preemptive selection, re-evaluated every tick
 */

use super::entry::PriorityEntry;
use super::state::{RunState, Step};
use super::Simulation;
use crate::core::errors::SchedResult;
use crate::process::{validate_processes, Process};
use std::collections::BinaryHeap;
use tracing::instrument;

/// Dispatch the ready process with the lowest priority value, one tick at a time
///
/// After each unfinished tick, arrivals that outrank the running process are
/// admitted and the running process is pushed back onto the heap, so a
/// higher-priority arrival takes the CPU at the next tick boundary. Equal
/// priorities are served in admission order.
#[instrument(level = "debug", skip_all, fields(processes = processes.len()))]
pub fn schedule(processes: &[Process]) -> SchedResult<Simulation> {
    validate_processes(processes)?;

    let mut state = RunState::new(processes);
    let mut heap: BinaryHeap<PriorityEntry> = BinaryHeap::with_capacity(processes.len());

    while !state.is_done() {
        for entry in state.admit_all_arrived() {
            heap.push(PriorityEntry::new(state.process(entry.index).priority, entry));
        }

        let Some(current) = heap.pop() else {
            state.idle_until_next_arrival();
            continue;
        };

        if state.execute(current.entry.index, 1) == Step::Completed {
            continue;
        }

        let running_priority = current.priority;
        for entry in state.admit_arrived(|p| p.priority < running_priority) {
            heap.push(PriorityEntry::new(state.process(entry.index).priority, entry));
        }
        heap.push(current);
    }

    Ok(state.finish())
}
