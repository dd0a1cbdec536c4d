/*!
 * Report Rendering
 * Text and JSON output for schedule reports
 */

mod table;

pub use table::Table;

use crate::core::errors::SchedResult;
use crate::core::limits::{GANTT_CELL_WIDTH, SUMMARY_PRECISION};
use crate::process::TimeSlice;
use crate::scheduler::ScheduleReport;
use std::io::{self, Write};

/// Write the full text report: title, Gantt chart and schedule table
pub fn write_report<W: Write>(w: &mut W, report: &ScheduleReport) -> io::Result<()> {
    write_title(w, &report.title)?;
    write_gantt(w, &report.gantt)?;
    write_schedule(w, report)
}

/// Write the report as pretty-printed JSON
pub fn write_json<W: Write>(w: &mut W, report: &ScheduleReport) -> SchedResult<()> {
    serde_json::to_writer_pretty(&mut *w, report)?;
    writeln!(w)?;
    Ok(())
}

/// Title framed by dashed rules twice its length
pub fn write_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let len = title.chars().count();
    let rule = "-".repeat(len * 2);
    writeln!(w, "{}", rule)?;
    writeln!(w, "{}{}", " ".repeat(len / 2), title)?;
    writeln!(w, "{}", rule)
}

/// Gantt chart: one centred cell per slice, then the slice boundaries
pub fn write_gantt<W: Write>(w: &mut W, gantt: &[TimeSlice]) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;

    write!(w, "|")?;
    for slice in gantt {
        write!(w, "{:^width$}|", slice.pid.as_str(), width = GANTT_CELL_WIDTH)?;
    }
    writeln!(w)?;

    for (i, slice) in gantt.iter().enumerate() {
        write!(w, "{}\t", slice.start)?;
        if i + 1 == gantt.len() {
            write!(w, "{}", slice.stop)?;
        }
    }
    write!(w, "\n\n")
}

/// Schedule table with averages and throughput in the footer
pub fn write_schedule<W: Write>(w: &mut W, report: &ScheduleReport) -> io::Result<()> {
    writeln!(w, "Schedule table")?;

    let mut table = Table::new([
        "ID",
        "Priority",
        "Burst",
        "Arrival",
        "Wait",
        "Turnaround",
        "Exit",
    ]);

    for outcome in &report.outcomes {
        table.push_row(vec![
            outcome.id.to_string(),
            outcome.priority.to_string(),
            outcome.burst_duration.to_string(),
            outcome.arrival_time.to_string(),
            outcome.waiting_time.to_string(),
            outcome.turnaround_time.to_string(),
            outcome.completion_time.to_string(),
        ]);
    }

    let summary = &report.summary;
    table.set_footer(vec![
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format!("Average {:.*}", SUMMARY_PRECISION, summary.average_wait),
        format!("Average {:.*}", SUMMARY_PRECISION, summary.average_turnaround),
        format!("Throughput {:.*}/t", SUMMARY_PRECISION, summary.throughput),
    ]);

    table.render(w)
}
