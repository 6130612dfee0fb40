//! Round-robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! Repeat until every process is complete:
//!
//! 1. Scan processes in input order. Each arrived process with work left
//!    runs for `min(remaining, quantum)` ticks from the current clock; the
//!    clock advances by that slice before the scan continues, so processes
//!    arriving mid-scan are picked up in the same pass.
//! 2. If the full scan dispatched nothing, jump the clock to the next
//!    arrival.
//!
//! Waiting time is the delay before the first dispatch only; time spent in
//! the ready queue between later rotations is not added. Turnaround is
//! reported as `waiting + burst`, while `completion_time` is the clock value
//! at which the final slice ended.
//!
//! # Complexity
//! O((B / q + n) * n) where B = total burst.

use super::SimulationOutcome;
use crate::error::{Result, SimulationError};
use crate::models::{Discipline, Process, Ticks, TimingLedger, WaitAccounting};
use crate::validation::ensure_valid;

/// Schedules processes round-robin.
///
/// # Errors
/// `InvalidQuantum` when `time_quantum <= 0` (checked first),
/// `EmptyProcessSet` for zero processes, `MalformedInput` for invalid fields.
pub fn round_robin(processes: &[Process], time_quantum: Ticks) -> Result<SimulationOutcome> {
    if time_quantum <= 0 {
        return Err(SimulationError::InvalidQuantum(time_quantum));
    }
    ensure_valid(processes)?;

    let mut ledger = TimingLedger::new(processes);

    while !ledger.all_done() {
        let mut dispatched = false;

        for (index, process) in processes.iter().enumerate() {
            if !ledger.is_ready(index, process) {
                continue;
            }
            log::trace!(
                "rr: t={} run process {} (remaining {})",
                ledger.clock(),
                process.id,
                ledger.remaining(index)
            );
            ledger.run(index, process, time_quantum);
            dispatched = true;
        }

        if !dispatched {
            match ledger.next_arrival(processes) {
                Some(arrival) => ledger.idle_until(arrival),
                None => break,
            }
        }
    }

    let (gantt, results) = ledger.finish(processes, WaitAccounting::FirstDispatch);
    SimulationOutcome::assemble(Discipline::RoundRobin, gantt, results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionInterval;

    #[test]
    fn test_rr_single_process_slices() {
        let procs = vec![Process::new(1, 0, 7)];
        let outcome = round_robin(&procs, 3).unwrap();

        let lengths: Vec<_> = outcome.gantt.intervals.iter().map(|i| i.duration()).collect();
        assert_eq!(lengths, vec![3, 3, 1]);
        assert_eq!(outcome.result_for(1).unwrap().completion_time, 7);
    }

    #[test]
    fn test_rr_rotation() {
        let procs = vec![Process::new(1, 0, 5), Process::new(2, 0, 3)];
        let outcome = round_robin(&procs, 2).unwrap();

        assert_eq!(
            outcome.gantt.intervals,
            vec![
                ExecutionInterval::new(1, 0, 2),
                ExecutionInterval::new(2, 2, 4),
                ExecutionInterval::new(1, 4, 6),
                ExecutionInterval::new(2, 6, 7),
                ExecutionInterval::new(1, 7, 8),
            ]
        );
        assert_eq!(outcome.result_for(2).unwrap().completion_time, 7);
        assert_eq!(outcome.result_for(1).unwrap().completion_time, 8);
    }

    #[test]
    fn test_rr_waiting_is_first_dispatch_only() {
        let procs = vec![Process::new(1, 0, 5), Process::new(2, 0, 3)];
        let outcome = round_robin(&procs, 2).unwrap();

        let p1 = outcome.result_for(1).unwrap();
        assert_eq!(p1.waiting_time, 0); // re-queued twice, still 0
        assert_eq!(p1.turnaround_time, 5);

        let p2 = outcome.result_for(2).unwrap();
        assert_eq!(p2.waiting_time, 2);
        assert_eq!(p2.turnaround_time, 5);
    }

    #[test]
    fn test_rr_mid_scan_arrival_joins_same_pass() {
        let procs = vec![Process::new(1, 0, 4), Process::new(2, 3, 1)];
        let outcome = round_robin(&procs, 4).unwrap();
        assert_eq!(
            outcome.gantt.intervals,
            vec![
                ExecutionInterval::new(1, 0, 4),
                ExecutionInterval::new(2, 4, 5),
            ]
        );
        assert_eq!(outcome.result_for(2).unwrap().waiting_time, 1);
    }

    #[test]
    fn test_rr_idle_until_arrival() {
        let procs = vec![Process::new(1, 4, 2)];
        let outcome = round_robin(&procs, 10).unwrap();
        assert_eq!(outcome.gantt.intervals, vec![ExecutionInterval::new(1, 4, 6)]);
        assert_eq!(outcome.result_for(1).unwrap().waiting_time, 0);
    }

    #[test]
    fn test_rr_long_idle_gap_is_skipped() {
        let procs = vec![Process::new(1, 2_000_000_000, 1)];
        let outcome = round_robin(&procs, 10).unwrap();
        assert_eq!(
            outcome.gantt.intervals,
            vec![ExecutionInterval::new(1, 2_000_000_000, 2_000_000_001)]
        );
        assert_eq!(outcome.result_for(1).unwrap().completion_time, 2_000_000_001);
    }

    #[test]
    fn test_rr_quantum_larger_than_bursts_matches_fcfs_order() {
        let procs = vec![
            Process::new(1, 0, 3),
            Process::new(2, 1, 2),
            Process::new(3, 2, 1),
        ];
        let rr = round_robin(&procs, 100).unwrap();
        let fcfs = super::super::fcfs(&procs).unwrap();
        assert_eq!(rr.gantt, fcfs.gantt);
        assert_eq!(rr.results, fcfs.results);
    }

    #[test]
    fn test_rr_invalid_quantum() {
        let procs = vec![Process::new(1, 0, 2)];
        assert!(matches!(
            round_robin(&procs, 0),
            Err(SimulationError::InvalidQuantum(0))
        ));
        assert!(matches!(
            round_robin(&procs, -5),
            Err(SimulationError::InvalidQuantum(-5))
        ));
    }

    #[test]
    fn test_rr_empty() {
        assert!(matches!(
            round_robin(&[], 3),
            Err(SimulationError::EmptyProcessSet)
        ));
    }
}
