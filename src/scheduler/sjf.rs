/*!
 * Shortest Job First
 * Shortest-remaining-time selection, re-evaluated every tick
 */

use super::entry::ReadyEntry;
use super::state::{RunState, Step};
use super::Simulation;
use crate::core::errors::SchedResult;
use crate::process::{validate_processes, Process};
use tracing::instrument;

/// Dispatch the ready process with the least remaining work, one tick at a time
///
/// Ties go to the process admitted to the ready set first. A process that
/// does not finish in its tick goes back to the ready set with its original
/// admission order, after any newly arrived job whose whole burst is shorter
/// than its remaining work has been admitted.
#[instrument(level = "debug", skip_all, fields(processes = processes.len()))]
pub fn schedule(processes: &[Process]) -> SchedResult<Simulation> {
    validate_processes(processes)?;

    let mut state = RunState::new(processes);
    let mut ready: Vec<ReadyEntry> = Vec::with_capacity(processes.len());

    while !state.is_done() {
        ready.extend(state.admit_all_arrived());

        if ready.is_empty() {
            state.idle_until_next_arrival();
            continue;
        }

        ready.sort_by_key(|e| (state.remaining(e.index), e.seq));
        let current = ready.remove(0);

        if state.execute(current.index, 1) == Step::Completed {
            continue;
        }

        let remaining = state.remaining(current.index);
        ready.extend(state.admit_arrived(|p| p.burst_duration < remaining));
        ready.push(current);
    }

    Ok(state.finish())
}
