//! Process record loading.
//!
//! Parses comma-separated rows of the form `id,burst,arrival[,priority]`.
//! Note the column order: burst precedes arrival. Priority defaults to 0
//! when the fourth column is absent.
//!
//! Blank lines are skipped and fields are trimmed. Any field that is not an
//! integer, or a row with fewer than three fields, is a `MalformedInput`
//! error carrying the 1-based line number.

use std::fs;
use std::path::Path;

use crate::error::{Result, SimulationError};
use crate::models::Process;

/// Parses process records from CSV text.
///
/// # Example
///
/// ```
/// use proc_schedule::input::parse_processes;
///
/// let procs = parse_processes("1,5,0\n2,3,1,2\n").unwrap();
/// assert_eq!(procs[1].burst_duration, 3);
/// assert_eq!(procs[1].priority, 2);
/// ```
pub fn parse_processes(text: &str) -> Result<Vec<Process>> {
    let mut processes = Vec::new();

    for (offset, raw) in text.lines().enumerate() {
        let line = offset + 1;
        let row = raw.trim();
        if row.is_empty() {
            continue;
        }
        processes.push(parse_row(row, line)?);
    }

    log::debug!("parsed {} process records", processes.len());
    Ok(processes)
}

/// Reads and parses a process file.
pub fn load_processes(path: impl AsRef<Path>) -> Result<Vec<Process>> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_processes(&text)
}

fn parse_row(row: &str, line: usize) -> Result<Process> {
    let fields: Vec<&str> = row.split(',').map(str::trim).collect();
    if fields.len() < 3 {
        return Err(SimulationError::malformed_at(
            line,
            format!("expected at least 3 fields, found {}", fields.len()),
        ));
    }

    let id = parse_field(fields[0], "id", line)?;
    let burst = parse_field(fields[1], "burst", line)?;
    let arrival = parse_field(fields[2], "arrival", line)?;
    let priority = match fields.get(3) {
        Some(field) => parse_field(field, "priority", line)?,
        None => 0,
    };

    Ok(Process::new(id, arrival, burst).with_priority(priority))
}

fn parse_field(field: &str, name: &str, line: usize) -> Result<i64> {
    field.parse::<i64>().map_err(|_| {
        SimulationError::malformed_at(line, format!("{name} '{field}' is not an integer"))
    })
}
