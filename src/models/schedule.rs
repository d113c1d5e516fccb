//! Schedule (solution) model.
//!
//! A schedule is the result of one scheduling run: every record of the
//! snapshot, in execution order, paired with its computed waiting and
//! turnaround times. Schedules are transient and never written back
//! into the record store.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use super::ProcessRecord;

/// A complete schedule for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Entries in execution order.
    pub entries: Vec<ScheduleEntry>,
}

/// A process record with its computed timings.
///
/// All times are in CPU time units relative to the start of the run (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// The scheduled record (a copy of the store snapshot).
    pub record: ProcessRecord,
    /// Time spent ready before first (and only) dispatch.
    pub waiting_time: u64,
    /// Time from t=0 to completion.
    pub turnaround_time: u64,
}

impl ScheduleEntry {
    /// Creates an entry for a record dispatched at `start`.
    pub fn dispatched_at(record: ProcessRecord, start: u64) -> Self {
        let turnaround_time = start + u64::from(record.burst);
        Self {
            record,
            waiting_time: start,
            turnaround_time,
        }
    }

    /// Start time of the burst.
    #[inline]
    pub fn start(&self) -> u64 {
        self.waiting_time
    }

    /// Completion time of the burst.
    #[inline]
    pub fn completion(&self) -> u64 {
        self.turnaround_time
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Makespan: completion time of the last entry.
    pub fn makespan(&self) -> u64 {
        self.entries
            .iter()
            .map(|e| e.completion())
            .max()
            .unwrap_or(0)
    }

    /// Finds the first entry for a given process id.
    pub fn entry_for_process(&self, id: i32) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.record.id == id)
    }

    /// Process ids in execution order.
    pub fn execution_order(&self) -> Vec<i32> {
        self.entries.iter().map(|e| e.record.id).collect()
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
