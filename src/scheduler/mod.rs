//! Scheduling disciplines and run metrics.
//!
//! Each discipline is an independent function over a read-only process
//! slice. Every call builds its own [`TimingLedger`](crate::models::TimingLedger),
//! so runs are repeatable and may execute in parallel against the same input.
//!
//! # Disciplines
//!
//! | Discipline | Preemptive | Selection |
//! |------------|-----------|-----------|
//! | FCFS | No | Input order |
//! | SJF | No | Burst ascending, fixed up front |
//! | Priority | Per tick | Lowest priority value among arrived |
//! | Round-robin | Per quantum | Input order, repeated scans |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod priority;
mod round_robin;
mod sjf;

pub use fcfs::fcfs;
pub use kpi::SimulationSummary;
pub use priority::priority_preemptive;
pub use round_robin::round_robin;
pub use sjf::sjf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Discipline, Gantt, Process, ProcessId, ProcessResult, Ticks};

/// Everything one discipline run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Report title.
    pub title: String,
    /// Discipline that produced this outcome.
    pub discipline: Discipline,
    /// Execution intervals in dispatch order.
    pub gantt: Gantt,
    /// One row per process, in first-dispatch order.
    pub results: Vec<ProcessResult>,
    /// Aggregates derived from `results`.
    pub summary: SimulationSummary,
}

impl SimulationOutcome {
    pub(crate) fn assemble(
        discipline: Discipline,
        gantt: Gantt,
        results: Vec<ProcessResult>,
    ) -> Result<Self> {
        let summary = SimulationSummary::calculate(&results, &gantt)?;
        log::debug!(
            "{discipline}: {} processes, avg wait {:.2}, avg turnaround {:.2}, throughput {:.4}",
            summary.process_count,
            summary.average_waiting,
            summary.average_turnaround,
            summary.throughput
        );
        Ok(Self {
            title: discipline.title().to_string(),
            discipline,
            gantt,
            results,
            summary,
        })
    }

    /// Finds the result row for a process.
    pub fn result_for(&self, id: ProcessId) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Process IDs in the order they were first dispatched.
    pub fn execution_order(&self) -> Vec<ProcessId> {
        self.results.iter().map(|r| r.id).collect()
    }
}

/// Runs a single discipline.
///
/// `time_quantum` is used by round-robin only.
pub fn simulate(
    discipline: Discipline,
    processes: &[Process],
    time_quantum: Ticks,
) -> Result<SimulationOutcome> {
    match discipline {
        Discipline::Fcfs => fcfs(processes),
        Discipline::Sjf => sjf(processes),
        Discipline::Priority => priority_preemptive(processes),
        Discipline::RoundRobin => round_robin(processes, time_quantum),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulationError;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 8).with_priority(3),
            Process::new(2, 1, 4).with_priority(1),
            Process::new(3, 2, 9).with_priority(4),
            Process::new(4, 3, 5).with_priority(2),
        ]
    }

    #[test]
    fn test_simulate_dispatches_every_discipline() {
        let procs = sample_processes();
        for discipline in Discipline::ALL {
            let outcome = simulate(discipline, &procs, 3).unwrap();
            assert_eq!(outcome.discipline, discipline);
            assert_eq!(outcome.title, discipline.title());
            assert_eq!(outcome.results.len(), procs.len());
            assert!(outcome.gantt.is_well_formed());
        }
    }

    #[test]
    fn test_turnaround_identity_for_every_discipline() {
        let procs = sample_processes();
        for discipline in Discipline::ALL {
            let outcome = simulate(discipline, &procs, 2).unwrap();
            for r in &outcome.results {
                assert_eq!(r.turnaround_time, r.waiting_time + r.burst_duration);
            }
        }
    }

    #[test]
    fn test_input_untouched_across_runs() {
        let procs = sample_processes();
        let before = procs.clone();
        let first = simulate(Discipline::Fcfs, &procs, 2).unwrap();
        simulate(Discipline::Sjf, &procs, 2).unwrap();
        let again = simulate(Discipline::Fcfs, &procs, 2).unwrap();
        assert_eq!(procs, before);
        assert_eq!(first, again);
    }

    #[test]
    fn test_empty_set_for_every_discipline() {
        for discipline in Discipline::ALL {
            let err = simulate(discipline, &[], 4).unwrap_err();
            assert!(matches!(err, SimulationError::EmptyProcessSet));
        }
    }

    #[test]
    fn test_result_lookup() {
        let outcome = simulate(Discipline::Fcfs, &sample_processes(), 1).unwrap();
        assert_eq!(outcome.result_for(3).map(|r| r.burst_duration), Some(9));
        assert!(outcome.result_for(99).is_none());
        assert_eq!(outcome.execution_order(), vec![1, 2, 3, 4]);
    }
}
