/*!
 * Scheduling Simulator Library
 * CPU scheduling simulation over a fixed process set, with Gantt traces and
 * per-process timing metrics
 */

pub mod core;
pub mod input;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;

// Re-exports
pub use crate::core::{Priority, ProcessId, SchedError, SchedResult, Ticks};
pub use input::{load_processes, parse_processes, parse_str};
pub use monitoring::init_tracing;
pub use process::{Process, ProcessOutcome, TimeSlice};
pub use report::{write_json, write_report};
pub use scheduler::{
    fcfs_schedule, rr_schedule, run, run_titled, schedule_to, simulate, sjf_priority_schedule,
    sjf_schedule, ScheduleReport, ScheduleSummary, SchedulingPolicy, SimConfig, Simulation,
    TimeQuantum,
};
