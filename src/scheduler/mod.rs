/*!
 * CPU Scheduler Simulation
 * Four scheduling policies over a fixed, fully-known process set
 */

use crate::core::errors::SchedResult;
use crate::process::{Process, ProcessOutcome, TimeSlice};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::info;

mod entry;
pub mod fcfs;
pub mod priority;
pub mod round_robin;
pub mod sjf;
mod state;
pub mod stats;
mod trace;
pub mod types;

pub use stats::ScheduleSummary;
pub use types::{SchedulingPolicy, SimConfig, TimeQuantum};

/// Raw output of one simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    /// Execution slices in trace order
    pub gantt: Vec<TimeSlice>,
    /// One outcome per process, in input order
    pub outcomes: Vec<ProcessOutcome>,
    pub summary: ScheduleSummary,
}

/// Titled simulation result handed to the report renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScheduleReport {
    pub title: String,
    pub policy: SchedulingPolicy,
    pub gantt: Vec<TimeSlice>,
    pub outcomes: Vec<ProcessOutcome>,
    pub summary: ScheduleSummary,
}

impl ScheduleReport {
    pub fn new(title: impl Into<String>, policy: SchedulingPolicy, simulation: Simulation) -> Self {
        Self {
            title: title.into(),
            policy,
            gantt: simulation.gantt,
            outcomes: simulation.outcomes,
            summary: simulation.summary,
        }
    }
}

/// Simulate `processes` under `policy`
pub fn simulate(
    policy: SchedulingPolicy,
    processes: &[Process],
    config: &SimConfig,
) -> SchedResult<Simulation> {
    let simulation = match policy {
        SchedulingPolicy::Fcfs => fcfs::schedule(processes)?,
        SchedulingPolicy::Sjf => sjf::schedule(processes)?,
        SchedulingPolicy::SjfPriority => priority::schedule(processes)?,
        SchedulingPolicy::RoundRobin => round_robin::schedule(processes, config.time_quantum)?,
    };

    info!(
        policy = %policy,
        processes = simulation.summary.process_count,
        slices = simulation.gantt.len(),
        average_wait = simulation.summary.average_wait,
        average_turnaround = simulation.summary.average_turnaround,
        throughput = simulation.summary.throughput,
        "Simulation complete"
    );

    Ok(simulation)
}

/// Simulate and wrap the result in a report carrying the policy's title
pub fn run(
    policy: SchedulingPolicy,
    processes: &[Process],
    config: &SimConfig,
) -> SchedResult<ScheduleReport> {
    run_titled(policy, policy.title(), processes, config)
}

/// Simulate and wrap the result in a report with a custom title
pub fn run_titled(
    policy: SchedulingPolicy,
    title: &str,
    processes: &[Process],
    config: &SimConfig,
) -> SchedResult<ScheduleReport> {
    let simulation = simulate(policy, processes, config)?;
    Ok(ScheduleReport::new(title, policy, simulation))
}

/// Simulate under `policy` and write the text report to `w`
pub fn schedule_to<W: Write>(
    w: &mut W,
    policy: SchedulingPolicy,
    title: &str,
    processes: &[Process],
    config: &SimConfig,
) -> SchedResult<()> {
    let report = run_titled(policy, title, processes, config)?;
    crate::report::write_report(w, &report)?;
    Ok(())
}

/// First-come, first-serve schedule written to `w`
pub fn fcfs_schedule<W: Write>(w: &mut W, title: &str, processes: &[Process]) -> SchedResult<()> {
    schedule_to(w, SchedulingPolicy::Fcfs, title, processes, &SimConfig::default())
}

/// Shortest-job-first schedule written to `w`
pub fn sjf_schedule<W: Write>(w: &mut W, title: &str, processes: &[Process]) -> SchedResult<()> {
    schedule_to(w, SchedulingPolicy::Sjf, title, processes, &SimConfig::default())
}

/// Priority schedule written to `w`
pub fn sjf_priority_schedule<W: Write>(
    w: &mut W,
    title: &str,
    processes: &[Process],
) -> SchedResult<()> {
    schedule_to(w, SchedulingPolicy::SjfPriority, title, processes, &SimConfig::default())
}

/// Round-robin schedule (default quantum) written to `w`
pub fn rr_schedule<W: Write>(w: &mut W, title: &str, processes: &[Process]) -> SchedResult<()> {
    schedule_to(w, SchedulingPolicy::RoundRobin, title, processes, &SimConfig::default())
}
