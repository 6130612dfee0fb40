//! Simulation run configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::models::{Discipline, Process, Ticks};
use crate::scheduler::{simulate, SimulationOutcome};

/// Default round-robin time quantum.
pub const DEFAULT_TIME_QUANTUM: Ticks = 10;

/// Which disciplines to run and with what parameters.
///
/// # Example
///
/// ```
/// use proc_schedule::config::SimulationConfig;
/// use proc_schedule::models::{Discipline, Process};
///
/// let config = SimulationConfig::new()
///     .with_time_quantum(2)
///     .with_disciplines(vec![Discipline::RoundRobin]);
/// let outcomes = config.run(&[Process::new(1, 0, 5)]).unwrap();
/// assert_eq!(outcomes[0].gantt.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round-robin time quantum (> 0).
    pub time_quantum: Ticks,
    /// Disciplines to run, in order.
    pub disciplines: Vec<Discipline>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_quantum: DEFAULT_TIME_QUANTUM,
            disciplines: Discipline::ALL.to_vec(),
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration: all four disciplines, quantum 10.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the round-robin time quantum.
    pub fn with_time_quantum(mut self, time_quantum: Ticks) -> Self {
        self.time_quantum = time_quantum;
        self
    }

    /// Replaces the list of disciplines to run.
    pub fn with_disciplines(mut self, disciplines: Vec<Discipline>) -> Self {
        self.disciplines = disciplines;
        self
    }

    /// Checks parameters that do not depend on the process set.
    pub fn validate(&self) -> Result<()> {
        if self.disciplines.contains(&Discipline::RoundRobin) && self.time_quantum <= 0 {
            return Err(SimulationError::InvalidQuantum(self.time_quantum));
        }
        Ok(())
    }

    /// Runs every configured discipline against the same process set.
    ///
    /// Stops at the first failing discipline.
    pub fn run(&self, processes: &[Process]) -> Result<Vec<SimulationOutcome>> {
        self.validate()?;
        self.disciplines
            .iter()
            .map(|&discipline| simulate(discipline, processes, self.time_quantum))
            .collect()
    }
}
