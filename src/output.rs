//! Per-file outcome reporting for batch runs
//!
//! Batch invocations (`--write`/`--check` over many files) collect one
//! [`FileReport`] per file and render them either as a colored console
//! listing or as JSON.

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "kebab-case")]
pub enum FileOutcome {
    /// New text was produced (and written, unless checking).
    Sorted,
    /// The file is already in sorted order; it was not rewritten.
    Unchanged,
    /// The file's language is outside the supported set.
    Unsupported,
    /// No function definitions matched; the file was left alone.
    NoFunctions,
    /// The file is over the configured size cap and was not read.
    Skipped,
    /// Reading, sorting, or writing failed.
    Failed(String),
}

impl FileOutcome {
    /// Whether this outcome should fail the run.
    pub fn is_failure(&self) -> bool {
        matches!(self, FileOutcome::Failed(_))
    }

    /// Whether this outcome means the file's content differs from sorted
    /// order (relevant for `--check`).
    pub fn would_change(&self) -> bool {
        matches!(self, FileOutcome::Sorted)
    }

    fn label(&self, check: bool) -> &'static str {
        match self {
            FileOutcome::Sorted if check => "needs sorting",
            FileOutcome::Sorted => "sorted",
            FileOutcome::Unchanged => "unchanged",
            FileOutcome::Unsupported => "unsupported",
            FileOutcome::NoFunctions => "no functions",
            FileOutcome::Skipped => "skipped",
            FileOutcome::Failed(_) => "failed",
        }
    }

    fn color(&self) -> Option<Color> {
        match self {
            FileOutcome::Sorted => Some(Color::Green),
            FileOutcome::Unchanged => None,
            FileOutcome::Unsupported | FileOutcome::NoFunctions | FileOutcome::Skipped => {
                Some(Color::Yellow)
            }
            FileOutcome::Failed(_) => Some(Color::Red),
        }
    }
}

/// Outcome for a single processed file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn new(path: impl Into<PathBuf>, outcome: FileOutcome) -> Self {
        Self {
            path: path.into(),
            outcome,
        }
    }
}

/// Print one line per report, colored by outcome, plus a summary line.
pub fn print_reports(reports: &[FileReport], use_color: bool, check: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    for report in reports {
        if let Some(color) = report.outcome.color() {
            stdout.set_color(ColorSpec::new().set_fg(Some(color)))?;
        }
        write!(stdout, "{:>13}", report.outcome.label(check))?;
        stdout.reset()?;
        write!(stdout, "  {}", report.path.display())?;
        if let FileOutcome::Failed(detail) = &report.outcome {
            write!(stdout, ": {}", detail)?;
        }
        writeln!(stdout)?;
    }

    let changed = reports.iter().filter(|r| r.outcome.would_change()).count();
    let failed = reports.iter().filter(|r| r.outcome.is_failure()).count();
    writeln!(
        stdout,
        "{} file{} processed, {} {}, {} failed",
        reports.len(),
        if reports.len() == 1 { "" } else { "s" },
        changed,
        if check { "would change" } else { "sorted" },
        failed
    )?;

    Ok(())
}

/// Print the reports as pretty JSON.
pub fn print_json(reports: &[FileReport]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(reports).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
