//! First-come, first-served.
//!
//! # Algorithm
//!
//! Processes are served in slice order, which is taken to be arrival order
//! (the input is not re-sorted). Each process starts at
//! `max(clock, arrival)` and runs its whole burst.
//!
//! # Complexity
//! O(n)

use super::SimulationOutcome;
use crate::error::Result;
use crate::models::{Discipline, Process, TimingLedger, WaitAccounting};
use crate::validation::ensure_valid;

/// Schedules processes first-come, first-served.
///
/// # Errors
/// `EmptyProcessSet` for zero processes, `MalformedInput` for invalid fields.
///
/// # Example
///
/// ```
/// use proc_schedule::models::Process;
/// use proc_schedule::scheduler::fcfs;
///
/// let procs = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
/// let outcome = fcfs(&procs).unwrap();
/// assert_eq!(outcome.results[1].waiting_time, 4);
/// ```
pub fn fcfs(processes: &[Process]) -> Result<SimulationOutcome> {
    ensure_valid(processes)?;
    serve_in_order(Discipline::Fcfs, processes)
}

/// Runs every process to completion in slice order.
///
/// Shared by FCFS and SJF, which differ only in the order they pass in.
pub(super) fn serve_in_order(
    discipline: Discipline,
    processes: &[Process],
) -> Result<SimulationOutcome> {
    let mut ledger = TimingLedger::new(processes);

    for (index, process) in processes.iter().enumerate() {
        ledger.idle_until(process.arrival_time);
        log::trace!(
            "{discipline}: dispatch process {} at {}",
            process.id,
            ledger.clock()
        );
        ledger.run(index, process, process.burst_duration);
    }

    let (gantt, results) = ledger.finish(processes, WaitAccounting::Accumulated);
    SimulationOutcome::assemble(discipline, gantt, results)
}
