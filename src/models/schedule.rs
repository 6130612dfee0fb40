//! Schedule (solution) model.
//!
//! A schedule is the Gantt trace of execution intervals produced by one
//! discipline, together with one result row per process.

use serde::{Deserialize, Serialize};

use super::{ProcessId, Ticks};

/// One contiguous span during which a single process holds the CPU.
///
/// Covers `[start, stop)`; `stop > start` always holds for intervals emitted
/// by a discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Process occupying the CPU.
    pub process_id: ProcessId,
    /// First tick of the span.
    pub start: Ticks,
    /// Tick at which the span ends (exclusive).
    pub stop: Ticks,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(process_id: ProcessId, start: Ticks, stop: Ticks) -> Self {
        Self {
            process_id,
            start,
            stop,
        }
    }

    /// Length of the span in ticks.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.stop - self.start
    }

    /// Whether two spans share at least one tick.
    #[inline]
    pub fn overlaps(&self, other: &ExecutionInterval) -> bool {
        self.start < other.stop && other.start < self.stop
    }
}

/// Ordered sequence of execution intervals ("Gantt trace").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gantt {
    /// Intervals in dispatch order.
    pub intervals: Vec<ExecutionInterval>,
}

impl Gantt {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval.
    pub fn push(&mut self, interval: ExecutionInterval) {
        self.intervals.push(interval);
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the trace is empty.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Latest stop time across all intervals (0 when empty).
    pub fn makespan(&self) -> Ticks {
        self.intervals.iter().map(|i| i.stop).max().unwrap_or(0)
    }

    /// Total ticks the CPU was busy.
    pub fn busy_time(&self) -> Ticks {
        self.intervals.iter().map(|i| i.duration()).sum()
    }

    /// Returns all intervals for a given process.
    pub fn intervals_for(&self, process_id: ProcessId) -> Vec<&ExecutionInterval> {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .collect()
    }

    /// Merges adjacent intervals of the same process that touch end-to-start.
    ///
    /// Tick-level disciplines emit one interval per busy tick; renderers
    /// call this before drawing.
    pub fn coalesced(&self) -> Gantt {
        let mut merged: Vec<ExecutionInterval> = Vec::with_capacity(self.intervals.len());
        for &interval in &self.intervals {
            if let Some(last) = merged.last_mut() {
                if last.process_id == interval.process_id && last.stop == interval.start {
                    last.stop = interval.stop;
                    continue;
                }
            }
            merged.push(interval);
        }
        Gantt { intervals: merged }
    }

    /// Checks the trace shape: every interval non-empty, starts
    /// non-decreasing, and no two intervals overlap.
    pub fn is_well_formed(&self) -> bool {
        self.intervals.iter().all(|i| i.stop > i.start)
            && self
                .intervals
                .windows(2)
                .all(|w| w[0].start <= w[1].start && !w[0].overlaps(&w[1]))
    }
}

/// Timing row for one process after a discipline has run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub id: ProcessId,
    /// Priority carried from the input.
    pub priority: i64,
    /// Total CPU time required.
    pub burst_duration: Ticks,
    /// Arrival tick.
    pub arrival_time: Ticks,
    /// Time spent ready but not running.
    pub waiting_time: Ticks,
    /// Delay from arrival to first dispatch.
    pub response_time: Ticks,
    /// Always `waiting_time + burst_duration`.
    pub turnaround_time: Ticks,
    /// Tick at which the last slice of the process ended.
    pub completion_time: Ticks,
}
