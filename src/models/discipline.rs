//! Scheduling discipline selector.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four supported scheduling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    /// First-come, first-served.
    Fcfs,
    /// Shortest job first (non-preemptive, static burst order).
    Sjf,
    /// Preemptive priority scheduling (lower value wins).
    Priority,
    /// Round-robin with a fixed time quantum.
    RoundRobin,
}

impl Discipline {
    /// All disciplines in canonical run order.
    pub const ALL: [Discipline; 4] = [
        Discipline::Fcfs,
        Discipline::Sjf,
        Discipline::Priority,
        Discipline::RoundRobin,
    ];

    /// Report title.
    pub fn title(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "First-come, first-serve",
            Discipline::Sjf => "Shortest-job-first",
            Discipline::Priority => "Priority",
            Discipline::RoundRobin => "Round-robin",
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Discipline::Fcfs => "FCFS",
            Discipline::Sjf => "SJF",
            Discipline::Priority => "PRIORITY",
            Discipline::RoundRobin => "RR",
        };
        f.write_str(name)
    }
}
