/*!
 * Schedule Statistics
 * Aggregate waiting, turnaround and throughput metrics
 */

use crate::core::types::Ticks;
use crate::process::ProcessOutcome;
use serde::{Deserialize, Serialize};

/// Aggregate metrics of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScheduleSummary {
    pub process_count: usize,
    pub total_wait: Ticks,
    pub total_turnaround: Ticks,
    pub last_completion: Ticks,
    pub average_wait: f64,
    pub average_turnaround: f64,
    /// Completed processes per tick
    pub throughput: f64,
}

impl ScheduleSummary {
    /// Compute the summary from per-process outcomes
    ///
    /// Outcomes are never empty for a validated run; an empty slice yields
    /// zeroed averages instead of dividing by zero.
    pub fn from_outcomes(outcomes: &[ProcessOutcome]) -> Self {
        let process_count = outcomes.len();
        let total_wait: Ticks = outcomes.iter().map(|o| o.waiting_time).sum();
        let total_turnaround: Ticks = outcomes.iter().map(|o| o.turnaround_time).sum();
        let last_completion = outcomes
            .iter()
            .map(|o| o.completion_time)
            .max()
            .unwrap_or(0);

        let count = process_count as f64;
        let ratio = |numerator: f64, denominator: f64| {
            if denominator > 0.0 {
                numerator / denominator
            } else {
                0.0
            }
        };

        Self {
            process_count,
            total_wait,
            total_turnaround,
            last_completion,
            average_wait: ratio(total_wait as f64, count),
            average_turnaround: ratio(total_turnaround as f64, count),
            throughput: ratio(count, last_completion as f64),
        }
    }
}
