//! `procsched`: interactive process manager.
//!
//! Loads `processes.txt` (or `$PROCSCHED_RECORDS`) at start-up, then runs
//! the numbered menu on stdin/stdout. Nothing is saved unless Save is
//! chosen.

use std::io;

use anyhow::Context;
use tracing::info;

use u_procsched::logging::init_tracing;
use u_procsched::shell::Shell;
use u_procsched::{Config, Session};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env();
    info!(
        records = %config.records_path().display(),
        report = %config.report_path().display(),
        "starting session"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(Session::new(config), stdin.lock(), stdout.lock());

    shell.startup().context("failed to write start-up message")?;
    shell.run().context("interactive session failed")?;

    info!(records = shell.session().store().len(), "session ended");
    Ok(())
}
