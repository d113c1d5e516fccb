//! Input validation for process records.
//!
//! The record store accepts any record; these checks are applied by
//! callers (the interactive shell) before handing values to the store.
//! Detects:
//! - Zero CPU burst
//! - Empty names or names containing whitespace (they would break the
//!   one-record-per-line file format)
//! - Duplicate IDs across a snapshot

use crate::error::{Error, Result};
use crate::models::ProcessRecord;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two records share the same ID.
    DuplicateId,
    /// Burst must be at least one time unit.
    ZeroBurst,
    /// Name is empty or not a single token.
    InvalidName,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the fields of a single record.
///
/// Checks:
/// 1. Burst is positive
/// 2. Name is non-empty and contains no whitespace
pub fn validate_record(record: &ProcessRecord) -> ValidationResult {
    let mut errors = Vec::new();

    if record.burst == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroBurst,
            format!("Process {} has zero burst", record.id),
        ));
    }

    if record.name.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidName,
            format!("Process {} has an empty name", record.id),
        ));
    } else if record.name.chars().any(char::is_whitespace) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidName,
            format!("Process {} name '{}' contains whitespace", record.id, record.name),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates every record and the uniqueness of their IDs.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_records(records: &[ProcessRecord]) -> ValidationResult {
    let mut errors = Vec::new();

    for record in records {
        if let Err(mut record_errors) = validate_record(record) {
            errors.append(&mut record_errors);
        }
    }

    for id in duplicate_ids(records) {
        errors.push(ValidationError::new(
            ValidationErrorKind::DuplicateId,
            format!("Duplicate process ID: {id}"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// IDs that appear more than once, in order of their second occurrence.
pub fn duplicate_ids(records: &[ProcessRecord]) -> Vec<i32> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for record in records {
        if !seen.insert(record.id) && reported.insert(record.id) {
            duplicates.push(record.id);
        }
    }

    duplicates
}

/// [`validate_record`] folded into the crate error type.
pub fn check_record(record: &ProcessRecord) -> Result<()> {
    validate_record(record).map_err(|errors| {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        Error::invalid_record(messages.join("; "))
    })
}
