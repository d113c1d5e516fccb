//! Process record manager with non-preemptive priority scheduling.
//!
//! Keeps an ordered list of process records (id, name, CPU burst,
//! priority) persisted to a plain text file, and computes one-shot
//! priority-order schedules with waiting and turnaround times written
//! to a fixed-width report.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessRecord`, `Schedule`, `ScheduleEntry`
//! - **`store`**: Insertion-ordered `RecordStore` with file load/save
//! - **`dispatching`**: Priority ranking (stable, ties in arrival order)
//! - **`scheduler`**: `PriorityScheduler`, `ScheduleKpi`, report output
//! - **`validation`**: Input checks (zero burst, bad names, duplicate IDs)
//! - **`session`**: The single owner of the store; the operations a front end calls
//! - **`shell`**: Numbered menu loop over any reader/writer pair
//! - **`config`**, **`logging`**, **`error`**: Ambient plumbing
//!
//! # Data Flow
//!
//! ```text
//! RecordStore ──snapshot──▶ PriorityRanking ──▶ PriorityScheduler ──▶ report file
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod logging;
pub mod models;
pub mod scheduler;
pub mod session;
pub mod shell;
pub mod store;
pub mod validation;

pub use config::Config;
pub use error::{Error, Result};
pub use session::Session;
