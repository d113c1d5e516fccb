//! Priority ranking for dispatch order.
//!
//! Turns a snapshot of the record store into the order in which the
//! scheduler runs it.
//!
//! # Score Convention
//! **Lower priority value = dispatched earlier.** Records with equal
//! priority keep their store order; ids play no part in ranking.
//!
//! # Usage
//!
//! ```
//! use u_procsched::dispatching::{rank, PriorityRanking};
//! use u_procsched::models::ProcessRecord;
//!
//! let records = vec![
//!     ProcessRecord::with_fields(1, "a", 2, 1),
//!     ProcessRecord::with_fields(2, "b", 2, 0),
//! ];
//! assert_eq!(rank(&records)[0].id, 2);
//!
//! assert_eq!(PriorityRanking::new().sort_indices(&records), vec![1, 0]);
//! ```

mod engine;

pub use engine::PriorityRanking;

use crate::models::ProcessRecord;

/// Ranks `records` by ascending priority, ties in arrival order.
pub fn rank(records: &[ProcessRecord]) -> Vec<ProcessRecord> {
    PriorityRanking::new().rank(records)
}
