//! Per-invocation timing ledger.
//!
//! Holds the mutable simulation state of one discipline run: the clock,
//! remaining burst per process, first-dispatch and completion times, and the
//! Gantt trace built so far. Entries are indexed like the process slice the
//! ledger was created from.
//!
//! A ledger is created fresh for every run and consumed by [`TimingLedger::finish`],
//! so nothing leaks between disciplines.

use super::{ExecutionInterval, Gantt, Process, ProcessResult, Ticks};

/// How the final waiting time of a process is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitAccounting {
    /// All ready-but-not-running time between arrival and completion.
    Accumulated,
    /// Only the delay before the first dispatch (round-robin convention).
    FirstDispatch,
}

#[derive(Debug, Clone)]
struct Entry {
    remaining: Ticks,
    first_dispatch: Option<Ticks>,
    completion: Option<Ticks>,
}

/// Mutable timing state for a single discipline run.
#[derive(Debug, Clone)]
pub struct TimingLedger {
    entries: Vec<Entry>,
    clock: Ticks,
    completed: usize,
    gantt: Gantt,
    // Process indices in the order they were first dispatched.
    dispatch_order: Vec<usize>,
}

impl TimingLedger {
    /// Creates a ledger with every process holding its full burst.
    pub fn new(processes: &[Process]) -> Self {
        Self {
            entries: processes
                .iter()
                .map(|p| Entry {
                    remaining: p.burst_duration,
                    first_dispatch: None,
                    completion: None,
                })
                .collect(),
            clock: 0,
            completed: 0,
            gantt: Gantt::new(),
            dispatch_order: Vec::with_capacity(processes.len()),
        }
    }

    /// Current simulation time.
    #[inline]
    pub fn clock(&self) -> Ticks {
        self.clock
    }

    /// Remaining CPU time of the process at `index`.
    #[inline]
    pub fn remaining(&self, index: usize) -> Ticks {
        self.entries[index].remaining
    }

    /// Whether the process has arrived and still needs CPU time.
    #[inline]
    pub fn is_ready(&self, index: usize, process: &Process) -> bool {
        process.has_arrived(self.clock) && self.entries[index].remaining > 0
    }

    /// Whether every process has completed.
    #[inline]
    pub fn all_done(&self) -> bool {
        self.completed == self.entries.len()
    }

    /// Earliest arrival after the current clock among processes with work left.
    pub fn next_arrival(&self, processes: &[Process]) -> Option<Ticks> {
        processes
            .iter()
            .zip(&self.entries)
            .filter(|(p, e)| e.remaining > 0 && p.arrival_time > self.clock)
            .map(|(p, _)| p.arrival_time)
            .min()
    }

    /// Moves the clock forward to `time` without running anything.
    ///
    /// Does nothing if `time` is not in the future.
    pub fn idle_until(&mut self, time: Ticks) {
        if time > self.clock {
            log::trace!("idle from {} to {}", self.clock, time);
            self.clock = time;
        }
    }

    /// Runs the process at `index` for up to `max_slice` ticks from the
    /// current clock.
    ///
    /// Records the first dispatch, appends the interval, advances the clock
    /// and returns `true` when the process completed during this slice.
    pub fn run(&mut self, index: usize, process: &Process, max_slice: Ticks) -> bool {
        let clock = self.clock;
        let entry = &mut self.entries[index];
        let slice = entry.remaining.min(max_slice);
        if slice <= 0 {
            return false;
        }

        if entry.first_dispatch.is_none() {
            entry.first_dispatch = Some(clock);
            self.dispatch_order.push(index);
        }

        entry.remaining -= slice;
        self.clock = clock + slice;
        self.gantt
            .push(ExecutionInterval::new(process.id, clock, self.clock));

        if entry.remaining == 0 {
            entry.completion = Some(self.clock);
            self.completed += 1;
            log::debug!("process {} completed at {}", process.id, self.clock);
            true
        } else {
            false
        }
    }

    /// Consumes the ledger and produces the Gantt trace and result rows.
    ///
    /// Rows appear in first-dispatch order. Processes that never completed
    /// are omitted.
    pub fn finish(
        self,
        processes: &[Process],
        accounting: WaitAccounting,
    ) -> (Gantt, Vec<ProcessResult>) {
        let mut results = Vec::with_capacity(self.dispatch_order.len());

        for &index in &self.dispatch_order {
            let entry = &self.entries[index];
            let (Some(first_dispatch), Some(completion)) = (entry.first_dispatch, entry.completion)
            else {
                continue;
            };
            let process = &processes[index];
            let response_time = first_dispatch - process.arrival_time;
            let waiting_time = match accounting {
                WaitAccounting::Accumulated => {
                    completion - process.arrival_time - process.burst_duration
                }
                WaitAccounting::FirstDispatch => response_time,
            };

            results.push(ProcessResult {
                id: process.id,
                priority: process.priority,
                burst_duration: process.burst_duration,
                arrival_time: process.arrival_time,
                waiting_time,
                response_time,
                turnaround_time: waiting_time + process.burst_duration,
                completion_time: completion,
            });
        }

        (self.gantt, results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_processes() -> Vec<Process> {
        vec![Process::new(1, 0, 3), Process::new(2, 2, 2)]
    }

    #[test]
    fn test_run_partial_and_complete() {
        let procs = two_processes();
        let mut ledger = TimingLedger::new(&procs);

        assert!(!ledger.run(0, &procs[0], 2));
        assert_eq!(ledger.remaining(0), 1);
        assert_eq!(ledger.clock(), 2);

        assert!(ledger.run(0, &procs[0], 2)); // only 1 tick left
        assert_eq!(ledger.clock(), 3);
        assert!(!ledger.all_done());
    }

    #[test]
    fn test_is_ready() {
        let procs = two_processes();
        let ledger = TimingLedger::new(&procs);
        assert!(ledger.is_ready(0, &procs[0]));
        assert!(!ledger.is_ready(1, &procs[1])); // arrives at 2
    }

    #[test]
    fn test_idle_until() {
        let procs = two_processes();
        let mut ledger = TimingLedger::new(&procs);
        ledger.idle_until(4);
        ledger.idle_until(1); // no-op in the past
        assert_eq!(ledger.clock(), 4);
    }

    #[test]
    fn test_next_arrival_skips_arrived_and_finished() {
        let procs = vec![
            Process::new(1, 0, 1),
            Process::new(2, 5, 1),
            Process::new(3, 9, 1),
        ];
        let mut ledger = TimingLedger::new(&procs);
        assert_eq!(ledger.next_arrival(&procs), Some(5));

        ledger.run(0, &procs[0], 1);
        ledger.idle_until(5);
        assert_eq!(ledger.next_arrival(&procs), Some(9));

        ledger.run(1, &procs[1], 1);
        ledger.idle_until(9);
        ledger.run(2, &procs[2], 1);
        assert_eq!(ledger.next_arrival(&procs), None);
    }

    #[test]
    fn test_finish_accumulated_vs_first_dispatch() {
        let procs = two_processes();

        let run = |accounting| {
            let mut ledger = TimingLedger::new(&procs);
            ledger.run(0, &procs[0], 1); // P1 [0,1)
            ledger.idle_until(2); // [1,2) idle
            ledger.run(1, &procs[1], 2); // P2 [2,4)
            ledger.run(0, &procs[0], 2); // P1 [4,6)
            assert!(ledger.all_done());
            ledger.finish(&procs, accounting)
        };

        let (gantt, acc) = run(WaitAccounting::Accumulated);
        assert_eq!(gantt.len(), 3);
        assert_eq!(acc[0].id, 1);
        assert_eq!(acc[0].completion_time, 6);
        assert_eq!(acc[0].response_time, 0);
        assert_eq!(acc[0].waiting_time, 3); // 6 - 0 - 3
        assert_eq!(acc[0].turnaround_time, 6);

        let (_, first) = run(WaitAccounting::FirstDispatch);
        assert_eq!(first[0].waiting_time, 0);
        assert_eq!(first[0].turnaround_time, 3);
        assert_eq!(first[0].completion_time, 6);
    }

    #[test]
    fn test_finish_orders_by_first_dispatch() {
        let procs = two_processes();
        let mut ledger = TimingLedger::new(&procs);
        ledger.idle_until(2);
        ledger.run(1, &procs[1], 2);
        ledger.run(0, &procs[0], 3);
        let (_, results) = ledger.finish(&procs, WaitAccounting::Accumulated);
        let ids: Vec<_> = results.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
