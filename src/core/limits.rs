/*!
 * Simulator Limits and Constants
 *
 * Centralized location for the fixed values the schedulers and the report
 * renderer rely on.
 */

use super::types::Ticks;

// =============================================================================
// SCHEDULING
// =============================================================================

/// Default round-robin time quantum (4 ticks)
pub const DEFAULT_TIME_QUANTUM: Ticks = 4;

/// Largest accepted round-robin quantum
/// Anything longer degenerates into FCFS for realistic inputs
pub const MAX_TIME_QUANTUM: Ticks = 1024;

/// Environment variable overriding the round-robin quantum
pub const TIME_QUANTUM_ENV: &str = "SCHED_TIME_QUANTUM";

// =============================================================================
// REPORT RENDERING
// =============================================================================

/// Width of one process cell in the rendered Gantt chart
pub const GANTT_CELL_WIDTH: usize = 8;

/// Decimal places for averages and throughput in the table footer
pub const SUMMARY_PRECISION: usize = 2;

// =============================================================================
// LOGGING
// =============================================================================

/// Environment variable enabling JSON log output
pub const TRACE_JSON_ENV: &str = "SCHED_TRACE_JSON";
