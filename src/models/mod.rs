//! Scheduling domain models.
//!
//! Provides the data types for the stored process list and for the
//! result of one scheduling run.
//!
//! # Lifetimes
//!
//! | Type | Owned by | Persisted |
//! |------|----------|-----------|
//! | ProcessRecord | RecordStore | yes, record file |
//! | ScheduleEntry | Schedule | no (report only) |
//! | Schedule | caller of a run | no (report only) |

mod process;
mod schedule;

pub use process::ProcessRecord;
pub use schedule::{Schedule, ScheduleEntry};
