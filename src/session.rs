//! Session: the single owner of the record store.
//!
//! A session bundles the store with its configured file locations and
//! exposes the operations a front end drives: add, edit, remove, list,
//! load, save and schedule. Values are expected to be validated already;
//! see [`crate::validation`].

use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::models::{ProcessRecord, Schedule};
use crate::scheduler::PriorityScheduler;
use crate::store::{LoadReport, RecordStore};

/// An interactive session over one record store.
#[derive(Debug, Clone, Default)]
pub struct Session {
    store: RecordStore,
    config: Config,
    scheduler: PriorityScheduler,
}

impl Session {
    /// Creates a session with an empty store.
    pub fn new(config: Config) -> Self {
        Self {
            store: RecordStore::new(),
            config,
            scheduler: PriorityScheduler::new(),
        }
    }

    /// File locations this session loads from and writes to.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read-only view of the records, for auditing or display.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Appends a record.
    pub fn add(&mut self, record: ProcessRecord) {
        self.store.add(record);
    }

    /// Edits the first record with `id`.
    pub fn edit(
        &mut self,
        id: i32,
        name: impl Into<String>,
        burst: u32,
        priority: i32,
    ) -> Result<()> {
        self.store.edit(id, name, burst, priority)
    }

    /// Removes the first record with `id`.
    pub fn remove(&mut self, id: i32) -> Result<ProcessRecord> {
        self.store.remove(id)
    }

    /// Records in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &ProcessRecord> + '_ {
        self.store.list()
    }

    /// Appends records from the configured record file.
    pub fn load(&mut self) -> Result<LoadReport> {
        self.store.load(&self.config.records_path)
    }

    /// Appends records from `path`.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<LoadReport> {
        self.store.load(path)
    }

    /// Writes the store to the configured record file.
    pub fn save(&self) -> Result<usize> {
        self.store.save(&self.config.records_path)
    }

    /// Writes the store to `path`.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<usize> {
        self.store.save(path)
    }

    /// Schedules a snapshot of the store and writes the report file.
    ///
    /// The store is not modified.
    pub fn schedule(&self) -> Result<Schedule> {
        info!(records = self.store.len(), "scheduling snapshot");
        self.scheduler
            .run_to_file(self.store.records(), &self.config.report_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn temp_config(dir: &tempfile::TempDir) -> Config {
        Config::new()
            .with_records_path(dir.path().join("processes.txt"))
            .with_report_path(dir.path().join("priority_output.txt"))
    }

    #[test]
    fn test_missing_record_file_is_non_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new(temp_config(&dir));

        assert!(matches!(session.load(), Err(Error::Open { .. })));
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_mutations_then_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let config = temp_config(&dir);

        let mut session = Session::new(config.clone());
        session.add(ProcessRecord::with_fields(1, "init", 5, 3));
        session.add(ProcessRecord::with_fields(2, "shell", 3, 1));
        session.add(ProcessRecord::with_fields(3, "cron", 2, 2));
        session.edit(3, "crond", 4, 0).unwrap();
        session.remove(1).unwrap();
        assert!(session.remove(1).unwrap_err().is_not_found());
        assert_eq!(session.save().unwrap(), 2);

        let mut reloaded = Session::new(config);
        assert_eq!(reloaded.load().unwrap().loaded, 2);
        let records: Vec<_> = reloaded.list().cloned().collect();
        assert_eq!(
            records,
            vec![
                ProcessRecord::with_fields(2, "shell", 3, 1),
                ProcessRecord::with_fields(3, "crond", 4, 0),
            ]
        );
    }

    #[test]
    fn test_repeated_load_appends() {
        let dir = tempfile::tempdir().unwrap();
        let config = temp_config(&dir);
        std::fs::write(config.records_path(), "1 a 1 1\n").unwrap();

        let mut session = Session::new(config);
        session.load().unwrap();
        session.load().unwrap();
        assert_eq!(session.store().len(), 2);
    }

    #[test]
    fn test_schedule_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let config = temp_config(&dir);

        let mut session = Session::new(config.clone());
        session.add(ProcessRecord::with_fields(1, "a", 4, 9));
        session.add(ProcessRecord::with_fields(2, "b", 2, 1));
        let before = session.store().clone();

        let schedule = session.schedule().unwrap();
        assert_eq!(schedule.execution_order(), vec![2, 1]);
        assert_eq!(session.store(), &before);
        assert!(config.report_path().exists());
    }

    #[test]
    fn test_explicit_paths_and_arrival_ties() {
        let dir = tempfile::tempdir().unwrap();
        let other = dir.path().join("backup.txt");

        let mut session = Session::new(temp_config(&dir));
        session.add(ProcessRecord::with_fields(9, "z", 1, 0));
        session.add(ProcessRecord::with_fields(4, "y", 1, 0));
        assert_eq!(session.save_to(&other).unwrap(), 2);
        // equal priority: store order, not id order
        assert_eq!(session.schedule().unwrap().execution_order(), vec![9, 4]);

        let mut copy = Session::new(temp_config(&dir));
        assert_eq!(copy.load_from(&other).unwrap().loaded, 2);
        assert_eq!(copy.store(), session.store());
    }

    #[test]
    fn test_schedule_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = temp_config(&dir);
        let session = Session::new(config.clone());

        assert!(session.schedule().unwrap().is_empty());
        let report = std::fs::read_to_string(config.report_path()).unwrap();
        assert!(!report.contains("Average"));
    }
}
