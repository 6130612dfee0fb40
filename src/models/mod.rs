//! Process scheduling domain models.
//!
//! Provides the data types shared by every discipline: the immutable
//! process record, the Gantt trace and result rows a run produces, and the
//! per-run timing ledger.
//!
//! # Domain Mappings
//!
//! | proc-schedule | Operating system | Batch queue |
//! |---------------|------------------|-------------|
//! | Process | Task/thread | Job |
//! | ExecutionInterval | Time slice on the CPU | Run window |
//! | ProcessResult | Per-task accounting | Job report |
//! | Gantt | Dispatch log | Timeline |

mod discipline;
mod ledger;
mod process;
mod schedule;

pub use discipline::Discipline;
pub use ledger::{TimingLedger, WaitAccounting};
pub use process::{last_arrival, Process, ProcessId, Ticks};
pub use schedule::{ExecutionInterval, Gantt, ProcessResult};
