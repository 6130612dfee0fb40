//! CPU process scheduling simulator.
//!
//! Given a fixed set of processes (arrival, burst, optional priority), runs
//! four classic single-CPU disciplines and reports, for each, the Gantt
//! trace, per-process waiting/turnaround/completion times and aggregate
//! metrics (average wait, average turnaround, throughput).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ExecutionInterval`, `Gantt`,
//!   `ProcessResult`, `Discipline`, `TimingLedger`
//! - **`scheduler`**: FCFS, SJF, preemptive priority, round-robin, and the
//!   `SimulationSummary` metrics
//! - **`validation`**: Input integrity checks (positive bursts, duplicate IDs)
//! - **`config`**: Which disciplines to run and the round-robin quantum
//! - **`input`**: CSV process record loading
//! - **`report`**: Plain-text title, Gantt chart and schedule table
//! - **`workload`**: Seeded synthetic process sets
//!
//! # Example
//!
//! ```
//! use proc_schedule::models::Process;
//! use proc_schedule::scheduler::priority_preemptive;
//!
//! let procs = vec![
//!     Process::new(1, 0, 5).with_priority(2),
//!     Process::new(2, 1, 3).with_priority(1),
//! ];
//! let outcome = priority_preemptive(&procs).unwrap();
//! assert_eq!(outcome.result_for(2).unwrap().completion_time, 4);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, SimulationError};
