//! Process (job) model.
//!
//! A process is the immutable input record of a simulation: when it becomes
//! ready, how much CPU time it needs, and how important it is.

use serde::{Deserialize, Serialize};

/// Simulation time unit. All clocks, arrivals and bursts are whole ticks.
pub type Ticks = i64;

/// Process identifier as given in the input.
pub type ProcessId = i64;

/// A process to be scheduled.
///
/// # Priority Convention
/// **Lower value = higher precedence.** Disciplines that ignore priority
/// (FCFS, SJF, RR) still carry it through to the result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Tick at which the process becomes ready (>= 0).
    pub arrival_time: Ticks,
    /// Total CPU time required (> 0).
    pub burst_duration: Ticks,
    /// Scheduling priority (lower = more important). Defaults to 0.
    #[serde(default)]
    pub priority: i64,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(id: ProcessId, arrival_time: Ticks, burst_duration: Ticks) -> Self {
        Self {
            id,
            arrival_time,
            burst_duration,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: Ticks) -> bool {
        self.arrival_time <= time
    }
}

/// Latest arrival time across a process set (0 when empty).
pub fn last_arrival(processes: &[Process]) -> Ticks {
    processes
        .iter()
        .map(|p| p.arrival_time)
        .max()
        .unwrap_or(0)
}
