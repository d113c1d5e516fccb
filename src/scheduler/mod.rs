//! Priority scheduler, KPI evaluation and report output.
//!
//! # Algorithm
//!
//! `PriorityScheduler` runs a snapshot of process records to completion
//! on a single CPU in ascending priority order. It is non-preemptive and
//! deterministic: the same snapshot always yields the same schedule.
//!
//! # KPI
//!
//! `ScheduleKpi` computes total and average waiting and turnaround times.
//!
//! # Report
//!
//! `write_report` renders a fixed-width table followed by the averages.
//! `PriorityScheduler::run_to_file` opens the destination before running,
//! so an unopenable destination leaves no partial output.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod kpi;
mod report;
mod simple;

pub use kpi::ScheduleKpi;
pub use report::{format_general, render_report, write_report, COLUMN_TITLES, COLUMN_WIDTHS};
pub use simple::PriorityScheduler;
