/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use super::types::{ProcessId, Ticks};
use miette::Diagnostic;
use thiserror::Error;

/// Simulator result type
pub type SchedResult<T> = Result<T, SchedError>;

/// Errors raised at the input boundary of a simulation run
///
/// The scheduling loops themselves never fail once their input has been
/// validated; everything here describes input that would make a run
/// meaningless (division by zero) or non-terminating (non-positive bursts).
#[derive(Error, Debug, Diagnostic)]
pub enum SchedError {
    #[error("No processes to schedule")]
    #[diagnostic(
        code(sched::empty_input),
        help("The input must contain at least one process record.")
    )]
    EmptyInput,

    #[error("Invalid process {id}: {reason}")]
    #[diagnostic(
        code(sched::invalid_process),
        help("Arrival times must be >= 0, burst durations must be > 0, and the whole schedule must fit the tick range.")
    )]
    InvalidProcess { id: ProcessId, reason: String },

    #[error("Duplicate process id: {0}")]
    #[diagnostic(
        code(sched::duplicate_id),
        help("Every process record needs a unique id.")
    )]
    DuplicateProcessId(ProcessId),

    #[error("Process {id} arrives at {arrival} but follows a process arriving at {previous}")]
    #[diagnostic(
        code(sched::unsorted_input),
        help("First-come, first-serve expects processes sorted by arrival time.")
    )]
    UnsortedInput {
        id: ProcessId,
        arrival: Ticks,
        previous: Ticks,
    },

    #[error("Invalid time quantum: {0}")]
    #[diagnostic(code(sched::invalid_quantum))]
    InvalidQuantum(String),

    #[error("Line {line}: {reason}")]
    #[diagnostic(
        code(sched::parse),
        help("Expected one record per line: id, arrival, burst, priority")
    )]
    Parse { line: usize, reason: String },

    #[error("Unknown scheduling policy '{0}'")]
    #[diagnostic(
        code(sched::unknown_policy),
        help("Valid policies: fcfs, sjf, priority, rr")
    )]
    UnknownPolicy(String),

    #[error("I/O error: {0}")]
    #[diagnostic(code(sched::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(sched::serialization))]
    Serialization(#[from] serde_json::Error),
}

impl SchedError {
    pub(crate) fn invalid_process(id: &ProcessId, reason: impl Into<String>) -> Self {
        Self::InvalidProcess {
            id: id.clone(),
            reason: reason.into(),
        }
    }
}
