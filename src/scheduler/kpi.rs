//! Schedule quality metrics (KPIs).
//!
//! Computes the aggregate timings of one scheduling run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Waiting | Sum of waiting times |
//! | Total Turnaround | Sum of turnaround times |
//! | Avg Waiting | Total Waiting / count |
//! | Avg Turnaround | Total Turnaround / count |
//! | Makespan | Completion time of the last entry |
//!
//! Averages are `None` for an empty run rather than zero.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use crate::models::Schedule;

/// Schedule performance indicators.
///
/// All time values are in CPU time units.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Number of entries that ran.
    pub count: usize,
    /// Sum of waiting times.
    pub total_waiting: u64,
    /// Sum of turnaround times.
    pub total_turnaround: u64,
    /// Completion time of the last entry.
    pub makespan: u64,
    /// Mean waiting time. `None` if nothing ran.
    pub average_waiting: Option<f64>,
    /// Mean turnaround time. `None` if nothing ran.
    pub average_turnaround: Option<f64>,
}

impl ScheduleKpi {
    /// Computes KPIs from a completed schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let mut total_waiting: u64 = 0;
        let mut total_turnaround: u64 = 0;
        let mut count: usize = 0;

        for entry in &schedule.entries {
            total_waiting += entry.waiting_time;
            total_turnaround += entry.turnaround_time;
            count += 1;
        }

        let average = |total: u64| {
            if count == 0 {
                None
            } else {
                Some(total as f64 / count as f64)
            }
        };

        Self {
            count,
            total_waiting,
            total_turnaround,
            makespan: schedule.makespan(),
            average_waiting: average(total_waiting),
            average_turnaround: average(total_turnaround),
        }
    }

    /// Whether any entry ran.
    pub fn has_averages(&self) -> bool {
        self.count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProcessRecord, ScheduleEntry};

    fn make_schedule(bursts: &[u32]) -> Schedule {
        let mut schedule = Schedule::new();
        let mut time = 0;
        for (i, &burst) in bursts.iter().enumerate() {
            let record = ProcessRecord::with_fields(i as i32, format!("p{i}"), burst, 0);
            schedule.add_entry(ScheduleEntry::dispatched_at(record, time));
            time += u64::from(burst);
        }
        schedule
    }

    #[test]
    fn test_kpi_basic() {
        let kpi = ScheduleKpi::calculate(&make_schedule(&[5, 3, 2]));

        assert_eq!(kpi.count, 3);
        assert_eq!(kpi.total_waiting, 13);
        assert_eq!(kpi.total_turnaround, 23);
        assert_eq!(kpi.makespan, 10);
        assert!((kpi.average_waiting.unwrap() - 13.0 / 3.0).abs() < 1e-10);
        assert!((kpi.average_turnaround.unwrap() - 23.0 / 3.0).abs() < 1e-10);
        assert!(kpi.has_averages());
    }

    #[test]
    fn test_kpi_single_entry() {
        let kpi = ScheduleKpi::calculate(&make_schedule(&[4]));
        assert_eq!(kpi.average_waiting, Some(0.0));
        assert_eq!(kpi.average_turnaround, Some(4.0));
    }

    #[test]
    fn test_kpi_empty_omits_averages() {
        let kpi = ScheduleKpi::calculate(&Schedule::new());
        assert_eq!(kpi.count, 0);
        assert_eq!(kpi.total_waiting, 0);
        assert_eq!(kpi.makespan, 0);
        assert!(kpi.average_waiting.is_none());
        assert!(kpi.average_turnaround.is_none());
        assert!(!kpi.has_averages());
    }
}
