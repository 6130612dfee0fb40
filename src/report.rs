//! Plain-text rendering of simulation outcomes.
//!
//! Produces a title banner, a one-line Gantt chart with its time axis, and
//! the per-process schedule table with averages in the footer.

use std::fmt::Write;

use crate::models::{Gantt, ProcessResult};
use crate::scheduler::{SimulationOutcome, SimulationSummary};

const GANTT_CELL_WIDTH: usize = 8;
const TABLE_HEADER: [&str; 7] = [
    "ID",
    "Priority",
    "Burst",
    "Arrival",
    "Wait",
    "Turnaround",
    "Exit",
];

/// Renders title, Gantt chart and schedule table.
pub fn render_outcome(outcome: &SimulationOutcome) -> String {
    let mut out = render_title(&outcome.title);
    out.push_str(&render_gantt(&outcome.gantt));
    out.push_str(&render_table(&outcome.results, &outcome.summary));
    out
}

/// Renders the title between two dashed rules twice its length.
pub fn render_title(title: &str) -> String {
    let rule = "-".repeat(title.len() * 2);
    let indent = " ".repeat(title.len() / 2);
    format!("{rule}\n{indent} {title}\n{rule}\n")
}

/// Renders the Gantt chart after merging touching same-process intervals.
///
/// ```text
/// Gantt schedule
/// |   1   |   2   |
/// 0       5       8
/// ```
pub fn render_gantt(gantt: &Gantt) -> String {
    let gantt = gantt.coalesced();
    let mut out = String::from("Gantt schedule\n|");

    for interval in &gantt.intervals {
        let pid = interval.process_id.to_string();
        let padding = " ".repeat(GANTT_CELL_WIDTH.saturating_sub(pid.len()) / 2);
        let _ = write!(out, "{padding}{pid}{padding}|");
    }
    out.push('\n');

    for (i, interval) in gantt.intervals.iter().enumerate() {
        let _ = write!(out, "{}\t", interval.start);
        if i + 1 == gantt.intervals.len() {
            let _ = write!(out, "{}", interval.stop);
        }
    }
    out.push_str("\n\n");
    out
}

/// Renders the schedule table with averages and throughput in the footer.
///
/// Turnaround is always `Wait + Burst`. For round-robin, Wait counts only the
/// delay to first dispatch, so Turnaround can be smaller than `Exit - Arrival`
/// when a process was re-queued; Exit is the real completion tick.
pub fn render_table(results: &[ProcessResult], summary: &SimulationSummary) -> String {
    let rows: Vec<[String; 7]> = results
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.priority.to_string(),
                r.burst_duration.to_string(),
                r.arrival_time.to_string(),
                r.waiting_time.to_string(),
                r.turnaround_time.to_string(),
                r.completion_time.to_string(),
            ]
        })
        .collect();

    let footer_labels = ["", "", "", "", "Average", "Average", "Throughput"];
    let footer_values = [
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format!("{:.2}", summary.average_waiting),
        format!("{:.2}", summary.average_turnaround),
        format!("{:.2}/t", summary.throughput),
    ];

    let mut widths: [usize; 7] = TABLE_HEADER.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }
    for (w, (label, value)) in widths
        .iter_mut()
        .zip(footer_labels.iter().zip(&footer_values))
    {
        *w = (*w).max(label.len()).max(value.len());
    }

    let separator = {
        let mut s = String::from("+");
        for w in &widths {
            s.push_str(&"-".repeat(w + 2));
            s.push('+');
        }
        s.push('\n');
        s
    };

    let mut out = String::from("Schedule table\n");
    out.push_str(&separator);
    out.push_str(&table_line(&TABLE_HEADER, &widths));
    out.push_str(&separator);
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&table_line(&cells, &widths));
    }
    out.push_str(&separator);
    out.push_str(&table_line(&footer_labels, &widths));
    let values: Vec<&str> = footer_values.iter().map(String::as_str).collect();
    out.push_str(&table_line(&values, &widths));
    out.push_str(&separator);
    out
}

fn table_line(cells: &[&str], widths: &[usize]) -> String {
    let mut s = String::from("|");
    for (cell, &w) in cells.iter().zip(widths) {
        let _ = write!(s, " {cell:>w$} |");
    }
    s.push('\n');
    s
}
