//! Line codec for the persisted record file.
//!
//! One record per line, four whitespace-separated tokens:
//!
//! ```text
//! id name burst priority
//! ```
//!
//! `id` and `priority` are signed integers, `burst` is unsigned, `name`
//! is a single token.

use crate::models::ProcessRecord;

/// Number of tokens in a record line.
pub const FIELD_COUNT: usize = 4;

/// Parses one line.
///
/// Returns `Ok(None)` for a blank line and `Err(reason)` for a line that
/// is not four well-typed tokens.
pub fn parse_line(line: &str) -> Result<Option<ProcessRecord>, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(None);
    }
    if tokens.len() != FIELD_COUNT {
        return Err(format!(
            "expected {FIELD_COUNT} fields, found {}",
            tokens.len()
        ));
    }

    let id = tokens[0]
        .parse::<i32>()
        .map_err(|_| format!("invalid id '{}'", tokens[0]))?;
    let name = tokens[1];
    let burst = tokens[2]
        .parse::<u32>()
        .map_err(|_| format!("invalid burst '{}'", tokens[2]))?;
    let priority = tokens[3]
        .parse::<i32>()
        .map_err(|_| format!("invalid priority '{}'", tokens[3]))?;

    Ok(Some(ProcessRecord::with_fields(id, name, burst, priority)))
}

/// Formats one record as a line, without the trailing newline.
pub fn format_line(record: &ProcessRecord) -> String {
    record.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_line() {
        let record = parse_line("3 daemon 12 -1").unwrap().unwrap();
        assert_eq!(record, ProcessRecord::with_fields(3, "daemon", 12, -1));
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let record = parse_line("  1\tinit   5 0  ").unwrap().unwrap();
        assert_eq!(record, ProcessRecord::with_fields(1, "init", 5, 0));
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   \t "), Ok(None));
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let err = parse_line("1 init 5").unwrap_err();
        assert_eq!(err, "expected 4 fields, found 3");

        let err = parse_line("1 init 5 0 extra").unwrap_err();
        assert_eq!(err, "expected 4 fields, found 5");
    }

    #[test]
    fn test_parse_bad_numbers() {
        assert_eq!(parse_line("x init 5 0").unwrap_err(), "invalid id 'x'");
        assert_eq!(parse_line("1 init -5 0").unwrap_err(), "invalid burst '-5'");
        assert_eq!(
            parse_line("1 init 5 high").unwrap_err(),
            "invalid priority 'high'"
        );
    }

    #[test]
    fn test_format_line() {
        let record = ProcessRecord::with_fields(9, "worker", 8, 2);
        let line = format_line(&record);
        assert_eq!(line, "9 worker 8 2");
        assert_eq!(parse_line(&line).unwrap(), Some(record));
    }
}
