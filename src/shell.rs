//! Interactive menu shell.
//!
//! Reads whitespace-separated tokens from any `BufRead` and writes
//! prompts and results to any `Write`, so the whole menu loop runs
//! against in-memory buffers in tests. End of input ends the session
//! without saving.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use crate::error::Error;
use crate::models::ProcessRecord;
use crate::scheduler::ScheduleKpi;
use crate::session::Session;
use crate::validation::{check_record, validate_records};

const MENU: &str = "\n=== CPU Manager ===\n\
                    1. Add\n\
                    2. Edit\n\
                    3. Delete\n\
                    4. Print\n\
                    5. Schedule\n\
                    6. Save\n\
                    7. Exit\n\
                    Choose: ";

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Edit,
    Delete,
    Print,
    Schedule,
    Save,
    Exit,
}

impl MenuChoice {
    /// Maps a menu number to its entry.
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::Add),
            2 => Some(Self::Edit),
            3 => Some(Self::Delete),
            4 => Some(Self::Print),
            5 => Some(Self::Schedule),
            6 => Some(Self::Save),
            7 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The menu loop driving a [`Session`].
pub struct Shell<R, W> {
    session: Session,
    input: R,
    output: W,
    pending: VecDeque<String>,
    closed: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell over `session`, reading commands from `input`.
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
            pending: VecDeque::new(),
            closed: false,
        }
    }

    /// The session being driven.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the shell, returning the session.
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Loads the configured record file and reports the outcome.
    ///
    /// Loaded records are kept as-is; duplicate ids and records the menu
    /// would reject are listed as warnings.
    pub fn startup(&mut self) -> io::Result<()> {
        match self.session.load() {
            Ok(report) => {
                writeln!(
                    self.output,
                    "Loaded from {}",
                    self.session.config().records_path().display()
                )?;
                if let Some(stop) = report.stopped_at {
                    writeln!(
                        self.output,
                        "Stopped at line {} ({}); {} record(s) loaded",
                        stop.line, stop.reason, report.loaded
                    )?;
                }
                if let Err(errors) = validate_records(self.session.store().records()) {
                    for error in errors {
                        writeln!(self.output, "Warning: {}", error.message)?;
                    }
                }
            }
            Err(Error::Open { .. }) => writeln!(self.output, "Cannot open file.")?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    /// Runs the menu until Exit or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            let Some(number) = self.read_value::<i64>()? else {
                if self.closed {
                    break;
                }
                continue;
            };

            let Some(choice) = MenuChoice::from_number(number) else {
                writeln!(self.output, "Invalid!")?;
                continue;
            };
            debug!(?choice, "menu selection");

            match choice {
                MenuChoice::Add => self.add()?,
                MenuChoice::Edit => self.edit()?,
                MenuChoice::Delete => self.delete()?,
                MenuChoice::Print => self.print()?,
                MenuChoice::Schedule => self.schedule()?,
                MenuChoice::Save => self.save()?,
                MenuChoice::Exit => break,
            }

            if self.closed {
                break;
            }
        }
        self.output.flush()
    }

    fn add(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt::<i32>("ID: ")? else {
            return Ok(());
        };
        let Some((name, burst, priority)) = self.prompt_fields("")? else {
            return Ok(());
        };

        let record = ProcessRecord::with_fields(id, name, burst, priority);
        if let Err(e) = check_record(&record) {
            return writeln!(self.output, "{e}");
        }
        if self.session.store().contains(id) {
            writeln!(
                self.output,
                "Warning: id {id} already exists; edit and delete act on the first match"
            )?;
        }
        self.session.add(record);
        Ok(())
    }

    fn edit(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt::<i32>("ID: ")? else {
            return Ok(());
        };
        let Some((name, burst, priority)) = self.prompt_fields("New ")? else {
            return Ok(());
        };

        let replacement = ProcessRecord::with_fields(id, name, burst, priority);
        if let Err(e) = check_record(&replacement) {
            return writeln!(self.output, "{e}");
        }
        match self
            .session
            .edit(id, replacement.name, replacement.burst, replacement.priority)
        {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => writeln!(self.output, "Not found"),
            Err(e) => writeln!(self.output, "{e}"),
        }
    }

    fn delete(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt::<i32>("ID: ")? else {
            return Ok(());
        };
        match self.session.remove(id) {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => writeln!(self.output, "Not found"),
            Err(e) => writeln!(self.output, "{e}"),
        }
    }

    fn print(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nID   Name   Burst   Priority")?;
        writeln!(self.output, "-----------------------------")?;

        if self.session.store().is_empty() {
            return writeln!(self.output, "No processes.");
        }
        for record in self.session.list() {
            writeln!(
                self.output,
                "{:<5}{:<7}{:<8}{}",
                record.id, record.name, record.burst, record.priority
            )?;
        }
        Ok(())
    }

    fn schedule(&mut self) -> io::Result<()> {
        match self.session.schedule() {
            Ok(schedule) => {
                let kpi = ScheduleKpi::calculate(&schedule);
                debug!(count = kpi.count, makespan = kpi.makespan, "schedule complete");
                writeln!(
                    self.output,
                    "Scheduling done -> {}",
                    self.session.config().report_path().display()
                )
            }
            Err(Error::Open { .. }) => writeln!(self.output, "Cannot open output file."),
            Err(e) => writeln!(self.output, "{e}"),
        }
    }

    fn save(&mut self) -> io::Result<()> {
        match self.session.save() {
            Ok(_) => writeln!(
                self.output,
                "Saved to {}",
                self.session.config().records_path().display()
            ),
            Err(e) => writeln!(self.output, "{e}"),
        }
    }

    /// Prompts for name, burst and priority, each label prefixed with `prefix`.
    fn prompt_fields(&mut self, prefix: &str) -> io::Result<Option<(String, u32, i32)>> {
        let Some(name) = self.prompt::<String>(&format!("{prefix}Name: "))? else {
            return Ok(None);
        };
        let Some(burst) = self.prompt::<u32>(&format!("{prefix}Burst: "))? else {
            return Ok(None);
        };
        let Some(priority) = self.prompt::<i32>(&format!("{prefix}Priority: "))? else {
            return Ok(None);
        };
        Ok(Some((name, burst, priority)))
    }

    fn prompt<T: FromStr>(&mut self, label: &str) -> io::Result<Option<T>> {
        write!(self.output, "{label}")?;
        self.read_value()
    }

    /// Reads one token and parses it.
    ///
    /// Returns `None` on end of input (setting `closed`) or on a parse
    /// failure (after reporting it).
    fn read_value<T: FromStr>(&mut self) -> io::Result<Option<T>> {
        self.output.flush()?;
        let Some(token) = self.next_token()? else {
            self.closed = true;
            return Ok(None);
        };
        match token.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.output, "Invalid input '{token}'")?;
                // Drop the rest of the line so the menu starts clean.
                self.pending.clear();
                Ok(None)
            }
        }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }
}
