//! Fixed-width schedule report.
//!
//! ```text
//! ID    Name      Burst   Priority  Waiting   Turnaround
//! --------------------------------------------------------------
//! 2     shell     3       1         0         3
//!
//! Average Waiting Time: 0
//! Average Turnaround Time: 3
//! ```
//!
//! Columns are left-justified and padded to their width; longer values
//! overflow rather than being cut. The average lines are written only
//! when at least one entry ran.

use std::io::{self, Write};

use super::ScheduleKpi;
use crate::models::{Schedule, ScheduleEntry};

/// Column widths: ID, Name, Burst, Priority, Waiting, Turnaround.
pub const COLUMN_WIDTHS: [usize; 6] = [6, 10, 8, 10, 10, 12];

/// Column titles, in order.
pub const COLUMN_TITLES: [&str; 6] = ["ID", "Name", "Burst", "Priority", "Waiting", "Turnaround"];

const SEPARATOR_WIDTH: usize = 62;

/// Significant digits used for the averages.
const AVERAGE_PRECISION: usize = 6;

/// Writes the full report for `schedule` to `out`.
pub fn write_report<W: Write>(schedule: &Schedule, out: &mut W) -> io::Result<()> {
    write_row(out, COLUMN_TITLES.map(str::to_owned))?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;

    for entry in &schedule.entries {
        write_row(out, entry_cells(entry))?;
    }

    let kpi = ScheduleKpi::calculate(schedule);
    if let (Some(waiting), Some(turnaround)) = (kpi.average_waiting, kpi.average_turnaround) {
        writeln!(out)?;
        writeln!(out, "Average Waiting Time: {}", format_general(waiting))?;
        writeln!(out, "Average Turnaround Time: {}", format_general(turnaround))?;
    }

    Ok(())
}

/// Renders the report into a string.
pub fn render_report(schedule: &Schedule) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_report(schedule, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

fn entry_cells(entry: &ScheduleEntry) -> [String; 6] {
    [
        entry.record.id.to_string(),
        entry.record.name.clone(),
        entry.record.burst.to_string(),
        entry.record.priority.to_string(),
        entry.waiting_time.to_string(),
        entry.turnaround_time.to_string(),
    ]
}

fn write_row<W: Write>(out: &mut W, cells: [String; 6]) -> io::Result<()> {
    for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
        write!(out, "{cell:<width$}")?;
    }
    writeln!(out)
}

/// Formats a float with six significant digits in general notation.
///
/// Fixed notation is used for decimal exponents in `-4..6`, scientific
/// otherwise; trailing zeros are dropped in both.
///
/// ```
/// use u_procsched::scheduler::format_general;
///
/// assert_eq!(format_general(13.0 / 3.0), "4.33333");
/// assert_eq!(format_general(5.0), "5");
/// assert_eq!(format_general(2.5e7), "2.5e+07");
/// ```
pub fn format_general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let scientific = format!("{:.*e}", AVERAGE_PRECISION - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= AVERAGE_PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (AVERAGE_PRECISION as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
