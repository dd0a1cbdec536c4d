/*!
 * Round-Robin
 * FIFO ready queue with a fixed time quantum
 */

use super::entry::ReadyEntry;
use super::state::{RunState, Step};
use super::types::TimeQuantum;
use super::Simulation;
use crate::core::errors::SchedResult;
use crate::process::{validate_processes, Process};
use std::collections::VecDeque;
use tracing::instrument;

/// Dispatch the head of the FIFO queue for at most one quantum
///
/// A process that exhausts its quantum re-enters at the tail, behind the
/// processes that arrived while it was running.
#[instrument(level = "debug", skip_all, fields(processes = processes.len(), quantum = quantum.ticks()))]
pub fn schedule(processes: &[Process], quantum: TimeQuantum) -> SchedResult<Simulation> {
    validate_processes(processes)?;

    let mut state = RunState::new(processes);
    let mut queue: VecDeque<ReadyEntry> = VecDeque::with_capacity(processes.len());

    while !state.is_done() {
        queue.extend(state.admit_all_arrived());

        let Some(current) = queue.pop_front() else {
            state.idle_until_next_arrival();
            continue;
        };

        let slice = state.remaining(current.index).min(quantum.ticks());
        if state.execute(current.index, slice) == Step::Completed {
            continue;
        }

        queue.extend(state.admit_all_arrived());
        queue.push_back(current);
    }

    Ok(state.finish())
}
