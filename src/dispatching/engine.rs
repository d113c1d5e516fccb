//! Priority ranking engine.
//!
//! Orders a snapshot of process records for dispatch: ascending
//! priority value, equal priorities in arrival order.
//!
//! # Reference
//! Knuth (1998), "The Art of Computer Programming", Vol. 3, Ch. 5 (stable sorting)

use crate::models::ProcessRecord;

/// Ranks records by ascending priority.
///
/// The sort is stable, so records sharing a priority come out in the
/// order they were given.
///
/// # Example
/// ```
/// use u_procsched::dispatching::PriorityRanking;
/// use u_procsched::models::ProcessRecord;
///
/// let records = vec![
///     ProcessRecord::with_fields(1, "a", 4, 5),
///     ProcessRecord::with_fields(2, "b", 4, 3),
///     ProcessRecord::with_fields(3, "c", 4, 3),
/// ];
/// let ranked = PriorityRanking::new().rank(&records);
/// let ids: Vec<i32> = ranked.iter().map(|r| r.id).collect();
/// assert_eq!(ids, vec![2, 3, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityRanking;

impl PriorityRanking {
    /// Creates the ranking.
    pub fn new() -> Self {
        Self
    }

    /// Returns indices into `records`, highest precedence first.
    pub fn sort_indices(&self, records: &[ProcessRecord]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..records.len()).collect();
        indices.sort_by_key(|&i| records[i].priority);
        indices
    }

    /// Returns a ranked copy of `records`.
    pub fn rank(&self, records: &[ProcessRecord]) -> Vec<ProcessRecord> {
        self.sort_indices(records)
            .into_iter()
            .map(|i| records[i].clone())
            .collect()
    }
}
