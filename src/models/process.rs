//! Process record model.
//!
//! A process record is the unit stored by the record store and consumed
//! by the scheduler: an identifier, a short label, the CPU burst it needs
//! and its static priority.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A process to be scheduled.
///
/// # Priority Convention
/// **Lower value = higher precedence.** A record with priority 1 runs
/// before a record with priority 5.
///
/// # Identity
/// `id` is a lookup key but is not guaranteed unique within a store.
/// Store operations that take an id act on the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Process identifier.
    pub id: i32,
    /// Short label. A single token without whitespace.
    pub name: String,
    /// CPU time units required.
    pub burst: u32,
    /// Static scheduling priority (lower = runs earlier).
    pub priority: i32,
}

impl ProcessRecord {
    /// Creates a record with the given ID, an empty name, zero burst and priority 0.
    pub fn new(id: i32) -> Self {
        Self {
            id,
            name: String::new(),
            burst: 0,
            priority: 0,
        }
    }

    /// Creates a fully populated record.
    pub fn with_fields(id: i32, name: impl Into<String>, burst: u32, priority: i32) -> Self {
        Self {
            id,
            name: name.into(),
            burst,
            priority,
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the CPU burst.
    pub fn with_burst(mut self, burst: u32) -> Self {
        self.burst = burst;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Overwrites everything except the id.
    pub fn update(&mut self, name: impl Into<String>, burst: u32, priority: i32) {
        self.name = name.into();
        self.burst = burst;
        self.priority = priority;
    }
}

/// Formats as the persisted line shape: `id name burst priority`.
impl fmt::Display for ProcessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.id, self.name, self.burst, self.priority)
    }
}
