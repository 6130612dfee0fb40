//! Preemptive priority scheduling.
//!
//! # Algorithm
//!
//! Unit-tick simulation from t=0. At every tick:
//!
//! 1. Among arrived processes with work left, pick the numerically smallest
//!    priority. A left-to-right scan keeps the first minimum, so only a
//!    strictly smaller value displaces an earlier candidate.
//! 2. Run it for one tick (one interval per busy tick). If nothing is
//!    eligible, jump the clock to the next arrival.
//!
//! A newly arrived process therefore preempts the running one at the next
//! tick boundary only if its priority value is strictly lower. Selection
//! is by priority, never by remaining burst.
//!
//! Final waiting time accumulates across all preemptions:
//! `completion - arrival - burst`. The first-dispatch delay is kept as
//! `response_time`.
//!
//! # Complexity
//! O(B * n) where B = total burst in ticks.

use super::SimulationOutcome;
use crate::error::Result;
use crate::models::{Discipline, Process, TimingLedger, WaitAccounting};
use crate::validation::ensure_valid;

/// Schedules processes by preemptive priority (lower value wins).
pub fn priority_preemptive(processes: &[Process]) -> Result<SimulationOutcome> {
    ensure_valid(processes)?;

    let mut ledger = TimingLedger::new(processes);

    while !ledger.all_done() {
        match select_highest_priority(&ledger, processes) {
            Some(index) => {
                log::trace!(
                    "priority: t={} run process {} (priority {})",
                    ledger.clock(),
                    processes[index].id,
                    processes[index].priority
                );
                ledger.run(index, &processes[index], 1);
            }
            None => match ledger.next_arrival(processes) {
                Some(arrival) => ledger.idle_until(arrival),
                None => break,
            },
        }
    }

    let (gantt, results) = ledger.finish(processes, WaitAccounting::Accumulated);
    SimulationOutcome::assemble(Discipline::Priority, gantt, results)
}

/// Index of the ready process with the smallest priority value, first wins ties.
fn select_highest_priority(ledger: &TimingLedger, processes: &[Process]) -> Option<usize> {
    let mut selected: Option<(usize, i64)> = None;

    for (index, process) in processes.iter().enumerate() {
        if !ledger.is_ready(index, process) {
            continue;
        }
        let better = match selected {
            None => true,
            Some((_, best)) => process.priority < best,
        };
        if better {
            selected = Some((index, process.priority));
        }
    }

    selected.map(|(index, _)| index)
}
