/*!
 * First-Come, First-Serve
 * Non-preemptive, input-ordered execution
 */

use super::state::RunState;
use super::Simulation;
use crate::core::errors::SchedResult;
use crate::process::{validate_arrival_order, validate_processes, Process};
use tracing::instrument;

/// Run every process to completion in input order
///
/// Input must already be sorted by arrival time. A process that arrives
/// after the CPU went idle starts at its arrival, so the waiting time is
/// `max(0, service_time - arrival)` for every process.
#[instrument(level = "debug", skip_all, fields(processes = processes.len()))]
pub fn schedule(processes: &[Process]) -> SchedResult<Simulation> {
    validate_processes(processes)?;
    validate_arrival_order(processes)?;

    let mut state = RunState::new(processes);

    for (index, process) in processes.iter().enumerate() {
        state.advance_to(process.arrival_time);
        state.execute(index, process.burst_duration);
    }

    Ok(state.finish())
}
