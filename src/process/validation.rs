/*!
 * Process Input Validation
 * Boundary checks that keep every scheduling loop terminating
 */

use super::types::Process;
use crate::core::errors::{SchedError, SchedResult};
use crate::core::types::Ticks;
use ahash::RandomState;
use std::collections::HashSet;
use tracing::warn;

/// Validate a process set before any simulation touches it
///
/// Rejects empty input, duplicate ids, negative arrivals and non-positive
/// bursts. A zero burst would never drain in the tick-driven schedulers.
///
/// Also bounds the schedule horizon: the clock never passes the latest
/// arrival plus the total burst, and every per-process wait and turnaround
/// is at most that horizon, so `count * horizon` must fit in `Ticks` for the
/// summary totals to stay exact.
pub fn validate_processes(processes: &[Process]) -> SchedResult<()> {
    if processes.is_empty() {
        warn!("Rejected empty process set");
        return Err(SchedError::EmptyInput);
    }

    let mut seen: HashSet<&str, RandomState> =
        HashSet::with_capacity_and_hasher(processes.len(), RandomState::new());
    let count = Ticks::try_from(processes.len()).unwrap_or(Ticks::MAX);
    let mut total_burst: Ticks = 0;
    let mut latest_arrival: Ticks = 0;

    for process in processes {
        validate_process(process)?;

        if !seen.insert(process.id.as_str()) {
            warn!(id = %process.id, "Rejected duplicate process id");
            return Err(SchedError::DuplicateProcessId(process.id.clone()));
        }

        latest_arrival = latest_arrival.max(process.arrival_time);
        let within_clock = match total_burst.checked_add(process.burst_duration) {
            Some(total) => {
                total_burst = total;
                total
                    .checked_add(latest_arrival)
                    .and_then(|horizon| horizon.checked_mul(count))
                    .is_some()
            }
            None => false,
        };

        if !within_clock {
            warn!(id = %process.id, "Rejected process set overflowing the clock");
            return Err(SchedError::invalid_process(
                &process.id,
                "schedule length overflows the simulation clock",
            ));
        }
    }

    Ok(())
}

/// Validate a single record
pub fn validate_process(process: &Process) -> SchedResult<()> {
    if process.id.is_empty() {
        return Err(SchedError::invalid_process(&process.id, "id cannot be empty"));
    }

    if process.arrival_time < 0 {
        warn!(id = %process.id, arrival = process.arrival_time, "Rejected negative arrival");
        return Err(SchedError::invalid_process(
            &process.id,
            format!("arrival time must be >= 0, got {}", process.arrival_time),
        ));
    }

    if process.burst_duration <= 0 {
        warn!(id = %process.id, burst = process.burst_duration, "Rejected non-positive burst");
        return Err(SchedError::invalid_process(
            &process.id,
            format!("burst duration must be > 0, got {}", process.burst_duration),
        ));
    }

    if process.arrival_time.checked_add(process.burst_duration).is_none() {
        warn!(id = %process.id, "Rejected completion past the clock range");
        return Err(SchedError::invalid_process(
            &process.id,
            "arrival time plus burst duration overflows the simulation clock",
        ));
    }

    Ok(())
}

/// Require non-decreasing arrival times (first-come, first-serve input)
pub fn validate_arrival_order(processes: &[Process]) -> SchedResult<()> {
    for pair in processes.windows(2) {
        let (previous, next) = (&pair[0], &pair[1]);
        if next.arrival_time < previous.arrival_time {
            return Err(SchedError::UnsortedInput {
                id: next.id.clone(),
                arrival: next.arrival_time,
                previous: previous.arrival_time,
            });
        }
    }
    Ok(())
}
