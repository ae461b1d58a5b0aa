//! Dual-mode reporter.
//!
//! Every user-visible event the pipeline produces goes through a
//! [`Reporter`]. Two backends exist:
//!
//! - [`ActionsReporter`] renders GitHub workflow commands (`::error::`,
//!   `::group::`, …) and writes step outputs to the `GITHUB_OUTPUT` file.
//! - [`ConsoleReporter`] renders an indented, human-readable transcript for
//!   local runs; step outputs are collected in a temp file that is dumped
//!   and removed when the run finishes.
//!
//! Both backends see the identical sequence of semantic events; only the
//! rendering differs. The backend is chosen once at startup.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;

/// Uniform logging/grouping surface used by the pipeline.
pub trait Reporter {
    /// Open a collapsible/indented section.
    fn group_start(&mut self, title: &str);
    /// Close the innermost section.
    fn group_end(&mut self);

    /// Plain progress line.
    fn log(&mut self, msg: &str);
    /// Notable but non-warning information.
    fn info(&mut self, msg: &str);
    fn warn(&mut self, msg: &str);
    fn error(&mut self, msg: &str);
    /// Verbose diagnostics; hidden unless debug rendering is enabled.
    fn debug(&mut self, msg: &str);

    /// Record a step output (`key=value`).
    fn set_output(&mut self, key: &str, value: &str) -> io::Result<()>;

    /// Flush any deferred rendering. Called on both success and failure.
    fn finish(&mut self) -> io::Result<()>;
}

// ---------------------------------------------------------------------------
// ActionsReporter — platform mode
// ---------------------------------------------------------------------------

/// Renders GitHub Actions workflow commands on stdout.
pub struct ActionsReporter {
    output_file: Option<PathBuf>,
}

impl ActionsReporter {
    /// `output_file` is the path from `GITHUB_OUTPUT`; when absent, step
    /// outputs fall back to plain stdout lines.
    pub fn new(output_file: Option<PathBuf>) -> Self {
        ActionsReporter { output_file }
    }
}

/// Escape a workflow-command data payload per the Actions toolkit rules.
fn escape_data(msg: &str) -> String {
    msg.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

impl Reporter for ActionsReporter {
    fn group_start(&mut self, title: &str) {
        println!("::group::{}", escape_data(title));
    }

    fn group_end(&mut self) {
        println!("::endgroup::");
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn info(&mut self, msg: &str) {
        println!("::notice::{}", escape_data(msg));
    }

    fn warn(&mut self, msg: &str) {
        println!("::warning::{}", escape_data(msg));
    }

    fn error(&mut self, msg: &str) {
        println!("::error::{}", escape_data(msg));
    }

    fn debug(&mut self, msg: &str) {
        println!("::debug::{}", escape_data(msg));
    }

    fn set_output(&mut self, key: &str, value: &str) -> io::Result<()> {
        match &self.output_file {
            Some(path) => {
                let mut f = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(f, "{key}={value}")
            }
            None => {
                println!("{key}={value}");
                Ok(())
            }
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ConsoleReporter — local mode
// ---------------------------------------------------------------------------

/// Spaces added per nesting level in the local transcript.
const INDENT_STEP: usize = 2;

/// Renders an indented transcript for local runs.
///
/// Step outputs are appended to `outcome_path`; [`Reporter::finish`] dumps
/// the collected outputs to stdout and removes the file. `Drop` performs a
/// best-effort `finish` so the file never outlives the process.
pub struct ConsoleReporter {
    indent: usize,
    debug: bool,
    outcome_path: PathBuf,
    finished: bool,
}

impl ConsoleReporter {
    pub fn new(debug: bool) -> Self {
        let outcome_path =
            std::env::temp_dir().join(format!("upsync-outputs-{}", std::process::id()));
        Self::at(outcome_path, debug)
    }

    /// Explicit outcome-file path; used in tests with `TempDir`.
    pub fn at(outcome_path: impl Into<PathBuf>, debug: bool) -> Self {
        ConsoleReporter {
            indent: 0,
            debug,
            outcome_path: outcome_path.into(),
            finished: false,
        }
    }

    pub fn outcome_path(&self) -> &Path {
        &self.outcome_path
    }

    fn prefix(&self) -> String {
        " ".repeat(self.indent)
    }
}

impl Reporter for ConsoleReporter {
    fn group_start(&mut self, title: &str) {
        println!("{}{}", self.prefix(), title.bold());
        self.indent += INDENT_STEP;
    }

    fn group_end(&mut self) {
        self.indent = self.indent.saturating_sub(INDENT_STEP);
    }

    fn log(&mut self, msg: &str) {
        println!("{}{msg}", self.prefix());
    }

    fn info(&mut self, msg: &str) {
        println!("{}{msg}", self.prefix());
    }

    fn warn(&mut self, msg: &str) {
        println!("{}{} {msg}", self.prefix(), "warning:".yellow());
    }

    fn error(&mut self, msg: &str) {
        println!("{}{} {msg}", self.prefix(), "error:".red());
    }

    fn debug(&mut self, msg: &str) {
        if self.debug {
            println!("{}{}", self.prefix(), msg.dimmed());
        }
    }

    fn set_output(&mut self, key: &str, value: &str) -> io::Result<()> {
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.outcome_path)?;
        writeln!(f, "{key}={value}")
    }

    fn finish(&mut self) -> io::Result<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        if self.outcome_path.exists() {
            let contents = std::fs::read_to_string(&self.outcome_path)?;
            println!("outputs:");
            for line in contents.lines() {
                println!("{:width$}{line}", "", width = INDENT_STEP);
            }
            std::fs::remove_file(&self.outcome_path)?;
        }
        Ok(())
    }
}

impl Drop for ConsoleReporter {
    fn drop(&mut self) {
        let _ = self.finish();
    }
}
