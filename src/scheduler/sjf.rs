//! Shortest job first (non-preemptive).
//!
//! # Algorithm
//!
//! 1. Stable-sort a private copy of the processes by ascending burst; equal
//!    bursts keep their input order.
//! 2. Serve the sorted sequence exactly like FCFS.
//!
//! The order is fixed before the clock starts. A short job that arrives
//! later is not reconsidered against jobs already ahead of it, and a job
//! sorted first waits for its own arrival even if others are ready.
//!
//! # Complexity
//! O(n log n)
//!
//! # Reference
//! Smith (1956), "Various optimizers for single-stage production"

use super::fcfs::serve_in_order;
use super::SimulationOutcome;
use crate::error::Result;
use crate::models::{Discipline, Process};
use crate::validation::ensure_valid;

/// Schedules processes shortest burst first.
///
/// The caller's slice is left in its original order.
pub fn sjf(processes: &[Process]) -> Result<SimulationOutcome> {
    ensure_valid(processes)?;

    let mut ordered = processes.to_vec();
    ordered.sort_by_key(|p| p.burst_duration);

    serve_in_order(Discipline::Sjf, &ordered)
}
