//! Simulation metrics.
//!
//! Derives aggregate indicators from the result rows a discipline produced.
//! The summary is never stored independently of those rows; it is always
//! recomputed from them.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average waiting | sum(waiting) / n |
//! | Average turnaround | sum(turnaround) / n |
//! | Average response | sum(first dispatch - arrival) / n |
//! | Throughput | n / last completion |
//! | Makespan | Latest completion time |
//! | CPU utilization | busy ticks / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::models::{Gantt, ProcessResult, Ticks};

/// Aggregate performance indicators for one discipline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Number of processes summarised.
    pub process_count: usize,
    /// Mean waiting time.
    pub average_waiting: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Mean delay from arrival to first dispatch.
    pub average_response: f64,
    /// Completed processes per tick, measured against the last completion.
    pub throughput: f64,
    /// Completion time of the process that finished last.
    pub makespan: Ticks,
    /// Ticks the CPU spent running a process.
    pub cpu_busy_time: Ticks,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
}

impl SimulationSummary {
    /// Computes the summary from result rows and the Gantt trace.
    ///
    /// # Errors
    /// `EmptyProcessSet` when `results` is empty.
    pub fn calculate(results: &[ProcessResult], gantt: &Gantt) -> Result<Self> {
        if results.is_empty() {
            return Err(SimulationError::EmptyProcessSet);
        }

        let count = results.len() as f64;
        // Summed as f64: per-row values fit in Ticks, their totals may not.
        let total_waiting: f64 = results.iter().map(|r| r.waiting_time as f64).sum();
        let total_turnaround: f64 = results.iter().map(|r| r.turnaround_time as f64).sum();
        let total_response: f64 = results.iter().map(|r| r.response_time as f64).sum();
        let makespan = results
            .iter()
            .map(|r| r.completion_time)
            .max()
            .unwrap_or(0);

        // Bursts are validated positive, so a completed run always ends after t=0.
        if makespan <= 0 {
            return Err(SimulationError::EmptyProcessSet);
        }

        let cpu_busy_time = gantt.busy_time();

        Ok(Self {
            process_count: results.len(),
            average_waiting: total_waiting / count,
            average_turnaround: total_turnaround / count,
            average_response: total_response / count,
            throughput: count / makespan as f64,
            makespan,
            cpu_busy_time,
            cpu_utilization: cpu_busy_time as f64 / makespan as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionInterval;

    fn row(id: i64, burst: Ticks, arrival: Ticks, waiting: Ticks, completion: Ticks) -> ProcessResult {
        ProcessResult {
            id,
            priority: 0,
            burst_duration: burst,
            arrival_time: arrival,
            waiting_time: waiting,
            response_time: waiting,
            turnaround_time: waiting + burst,
            completion_time: completion,
        }
    }

    #[test]
    fn test_summary_basic() {
        let results = vec![row(1, 5, 0, 0, 5), row(2, 3, 1, 4, 8), row(3, 2, 2, 6, 10)];
        let mut gantt = Gantt::new();
        gantt.push(ExecutionInterval::new(1, 0, 5));
        gantt.push(ExecutionInterval::new(2, 5, 8));
        gantt.push(ExecutionInterval::new(3, 8, 10));

        let s = SimulationSummary::calculate(&results, &gantt).unwrap();
        assert_eq!(s.process_count, 3);
        assert!((s.average_waiting - 10.0 / 3.0).abs() < 1e-10);
        assert!((s.average_turnaround - 20.0 / 3.0).abs() < 1e-10); // 5 + 7 + 8
        assert!((s.throughput - 0.3).abs() < 1e-10);
        assert_eq!(s.makespan, 10);
        assert!((s.cpu_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_throughput_uses_latest_completion() {
        // Rows out of completion order: the max, not the last row, counts.
        let results = vec![row(1, 2, 0, 0, 8), row(2, 2, 0, 0, 4)];
        let s = SimulationSummary::calculate(&results, &Gantt::new()).unwrap();
        assert!((s.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_utilization_with_idle_gap() {
        let results = vec![row(1, 2, 0, 0, 2), row(2, 2, 6, 0, 8)];
        let mut gantt = Gantt::new();
        gantt.push(ExecutionInterval::new(1, 0, 2));
        gantt.push(ExecutionInterval::new(2, 6, 8));

        let s = SimulationSummary::calculate(&results, &gantt).unwrap();
        assert_eq!(s.cpu_busy_time, 4);
        assert!((s.cpu_utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_empty_results_is_error() {
        let err = SimulationSummary::calculate(&[], &Gantt::new()).unwrap_err();
        assert!(matches!(err, SimulationError::EmptyProcessSet));
    }
}
