//! Non-preemptive priority scheduler.
//!
//! # Algorithm
//!
//! 1. Rank the snapshot by ascending priority (ties in arrival order).
//! 2. Start a single CPU clock at t=0.
//! 3. For each ranked record: it waits until the clock, runs its whole
//!    burst, and the clock advances by that burst.
//!
//! No preemption and no context switch cost. All records are ready at t=0.
//!
//! # Complexity
//! O(n log n) for ranking, O(n) for the timeline.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4: Priority Scheduling

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use super::write_report;
use crate::dispatching::PriorityRanking;
use crate::error::{Error, Result};
use crate::models::{ProcessRecord, Schedule, ScheduleEntry};

/// Single-run, non-preemptive priority scheduler.
///
/// Reads a snapshot of records and never mutates it.
///
/// # Example
///
/// ```
/// use u_procsched::models::ProcessRecord;
/// use u_procsched::scheduler::PriorityScheduler;
///
/// let records = vec![
///     ProcessRecord::with_fields(1, "a", 5, 1),
///     ProcessRecord::with_fields(2, "b", 3, 2),
/// ];
/// let schedule = PriorityScheduler::new().schedule(&records);
/// assert_eq!(schedule.entries[1].waiting_time, 5);
/// assert_eq!(schedule.entries[1].turnaround_time, 8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PriorityScheduler {
    ranking: PriorityRanking,
}

impl PriorityScheduler {
    /// Creates a scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ranks `records` and runs them on one CPU.
    pub fn schedule(&self, records: &[ProcessRecord]) -> Schedule {
        let ranked = self.ranking.rank(records);
        self.schedule_ranked(ranked)
    }

    /// Runs records in the given order without re-ranking.
    pub fn schedule_ranked(&self, ranked: impl IntoIterator<Item = ProcessRecord>) -> Schedule {
        let mut schedule = Schedule::new();
        let mut time: u64 = 0;

        for record in ranked {
            let burst = u64::from(record.burst);
            let entry = ScheduleEntry::dispatched_at(record, time);
            debug!(
                id = entry.record.id,
                waiting = entry.waiting_time,
                turnaround = entry.turnaround_time,
                "dispatched"
            );
            schedule.add_entry(entry);
            time += burst;
        }

        schedule
    }

    /// Schedules `records` and writes the report to `path`.
    ///
    /// The file is created before the timeline runs; if that fails nothing
    /// is scheduled and nothing is written.
    pub fn run_to_file(
        &self,
        records: &[ProcessRecord],
        path: impl AsRef<Path>,
    ) -> Result<Schedule> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "cannot open report file");
            Error::open(path, e)
        })?;

        let schedule = self.schedule(records);
        let mut out = BufWriter::new(file);
        write_report(&schedule, &mut out)?;
        out.flush()?;

        info!(
            path = %path.display(),
            entries = schedule.entry_count(),
            makespan = schedule.makespan(),
            "wrote schedule report"
        );
        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn make_record(id: i32, burst: u32, priority: i32) -> ProcessRecord {
        ProcessRecord::with_fields(id, format!("p{id}"), burst, priority)
    }

    #[test]
    fn test_timeline_in_given_order() {
        let ranked = vec![make_record(1, 5, 0), make_record(2, 3, 0), make_record(3, 2, 0)];
        let schedule = PriorityScheduler::new().schedule_ranked(ranked);

        let waiting: Vec<u64> = schedule.entries.iter().map(|e| e.waiting_time).collect();
        let turnaround: Vec<u64> = schedule.entries.iter().map(|e| e.turnaround_time).collect();
        assert_eq!(waiting, vec![0, 5, 8]);
        assert_eq!(turnaround, vec![5, 8, 10]);
        assert_eq!(schedule.makespan(), 10);
    }

    #[test]
    fn test_schedule_ranks_first() {
        let records = vec![make_record(1, 4, 5), make_record(2, 2, 3), make_record(3, 6, 3)];
        let schedule = PriorityScheduler::new().schedule(&records);

        assert_eq!(schedule.execution_order(), vec![2, 3, 1]);
        assert_eq!(schedule.entry_for_process(2).unwrap().waiting_time, 0);
        assert_eq!(schedule.entry_for_process(3).unwrap().waiting_time, 2);
        assert_eq!(schedule.entry_for_process(1).unwrap().waiting_time, 8);
        assert_eq!(schedule.entry_for_process(1).unwrap().turnaround_time, 12);
    }

    #[test]
    fn test_empty_snapshot() {
        let schedule = PriorityScheduler::new().schedule(&[]);
        assert!(schedule.is_empty());
        assert_eq!(schedule.makespan(), 0);
    }

    #[test]
    fn test_zero_burst_does_not_advance_clock() {
        let schedule = PriorityScheduler::new()
            .schedule_ranked(vec![make_record(1, 0, 0), make_record(2, 4, 0)]);
        assert_eq!(schedule.entries[1].waiting_time, 0);
        assert_eq!(schedule.entries[1].turnaround_time, 4);
    }

    #[test]
    fn test_snapshot_not_mutated() {
        let records = vec![make_record(1, 4, 2), make_record(2, 1, 1)];
        let before = records.clone();
        let _ = PriorityScheduler::new().schedule(&records);
        assert_eq!(records, before);
    }

    #[test]
    fn test_large_bursts_do_not_overflow() {
        let records: Vec<_> = (0..4).map(|id| make_record(id, u32::MAX, 0)).collect();
        let schedule = PriorityScheduler::new().schedule(&records);
        assert_eq!(schedule.makespan(), 4 * u64::from(u32::MAX));
    }

    #[test]
    fn test_run_to_file_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("priority_output.txt");
        let records = vec![make_record(1, 5, 0), make_record(2, 3, 1), make_record(3, 2, 2)];

        let schedule = PriorityScheduler::new().run_to_file(&records, &path).unwrap();
        assert_eq!(schedule.execution_order(), vec![1, 2, 3]);

        let report = std::fs::read_to_string(&path).unwrap();
        assert!(report.starts_with("ID    Name"));
        assert!(report.contains("Average Waiting Time: 4.33333\n"));
        assert!(report.ends_with("Average Turnaround Time: 7.66667\n"));
    }

    #[test]
    fn test_run_to_file_empty_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("priority_output.txt");

        let schedule = PriorityScheduler::new().run_to_file(&[], &path).unwrap();
        assert!(schedule.is_empty());

        let report = std::fs::read_to_string(&path).unwrap();
        assert_eq!(report.lines().count(), 2);
        assert!(!report.contains("Average"));
    }

    #[test]
    fn test_run_to_file_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("priority_output.txt");

        let err = PriorityScheduler::new()
            .run_to_file(&[make_record(1, 1, 1)], &path)
            .unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_randomized_timeline_invariants() {
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..50 {
            let n = rng.random_range(1..100);
            let records: Vec<_> = (0..n)
                .map(|id| make_record(id, rng.random_range(1..50), rng.random_range(0..5)))
                .collect();
            let schedule = PriorityScheduler::new().schedule(&records);

            assert_eq!(schedule.entry_count(), records.len());
            assert_eq!(schedule.entries[0].waiting_time, 0);
            for pair in schedule.entries.windows(2) {
                // back-to-back, no idle gaps
                assert_eq!(pair[1].waiting_time, pair[0].turnaround_time);
            }
            let total_burst: u64 = records.iter().map(|r| u64::from(r.burst)).sum();
            assert_eq!(schedule.makespan(), total_burst);
        }
    }
}
