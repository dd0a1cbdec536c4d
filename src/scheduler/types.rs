/*!
 * Scheduler Types
 * Policy selection, time quantum and run configuration
 */

use crate::core::errors::{SchedError, SchedResult};
use crate::core::limits::{DEFAULT_TIME_QUANTUM, MAX_TIME_QUANTUM, TIME_QUANTUM_ENV};
use crate::core::types::Ticks;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulingPolicy {
    /// First-come, first-serve; runs to completion in arrival order
    Fcfs,
    /// Shortest remaining work first, re-evaluated every tick
    Sjf,
    /// Lowest priority value first, re-evaluated every tick
    SjfPriority,
    /// FIFO with a fixed time quantum
    RoundRobin,
}

impl SchedulingPolicy {
    /// All policies in report order
    pub const ALL: [SchedulingPolicy; 4] = [
        SchedulingPolicy::Fcfs,
        SchedulingPolicy::Sjf,
        SchedulingPolicy::SjfPriority,
        SchedulingPolicy::RoundRobin,
    ];

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::SjfPriority => "priority",
            Self::RoundRobin => "round_robin",
        }
    }

    /// Report title for the policy
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-come, first-serve",
            Self::Sjf => "Shortest-job-first",
            Self::SjfPriority => "Priority",
            Self::RoundRobin => "Round-robin",
        }
    }
}

impl FromStr for SchedulingPolicy {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fcfs" | "fifo" | "first_come_first_serve" => Ok(Self::Fcfs),
            "sjf" | "shortest_job_first" => Ok(Self::Sjf),
            "priority" | "prio" | "sjf_priority" => Ok(Self::SjfPriority),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            _ => Err(SchedError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SchedulingPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SchedulingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round-robin time quantum, in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Ticks);

impl TimeQuantum {
    /// Create a quantum within `1..=MAX_TIME_QUANTUM`
    pub fn new(ticks: Ticks) -> SchedResult<Self> {
        if !(1..=MAX_TIME_QUANTUM).contains(&ticks) {
            return Err(SchedError::InvalidQuantum(format!(
                "{} must be between 1 and {} ticks",
                ticks, MAX_TIME_QUANTUM
            )));
        }
        Ok(Self(ticks))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Ticks {
        self.0
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self(DEFAULT_TIME_QUANTUM)
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = Ticks::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// Simulation configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SimConfig {
    pub time_quantum: TimeQuantum,
}

impl SimConfig {
    /// Load configuration from the environment
    ///
    /// `SCHED_TIME_QUANTUM` overrides the default quantum; an unset variable
    /// keeps the default, an unparsable one is an error.
    pub fn from_env() -> SchedResult<Self> {
        match std::env::var(TIME_QUANTUM_ENV) {
            Ok(value) => Self::default().with_quantum_str(&value),
            Err(_) => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn with_quantum(mut self, quantum: TimeQuantum) -> Self {
        self.time_quantum = quantum;
        self
    }

    /// Override the quantum from its textual form
    pub fn with_quantum_str(self, value: &str) -> SchedResult<Self> {
        let ticks: Ticks = value.trim().parse().map_err(|_| {
            SchedError::InvalidQuantum(format!("'{}' is not an integer", value.trim()))
        })?;
        Ok(self.with_quantum(TimeQuantum::new(ticks)?))
    }
}
