//! User-facing output for every command.
//!
//! # Two reporters
//!
//! Commands talk to a [`Reporter`] and never print directly. The CLI picks
//! one of two implementations with `--output`:
//!
//! - **`chalk`** ([`TextReporter`]): prints each message as it happens, color
//!   coded by severity. Errors and warnings go to stderr, everything else to
//!   stdout.
//!
//!   ```text
//!   Account Card: Not documented          (plain)
//!   plain.tsx: No metadata found          (yellow)
//!   Documentation generated for 1 component(s).   (green)
//!   ```
//!
//! - **`json`** ([`JsonReporter`]): prints nothing while the command runs and
//!   collects messages into severity buckets. The command surface prints the
//!   buckets as a single JSON line when the command finishes, whether it
//!   succeeded or not:
//!
//!   ```json
//!   {"logs":["Account Card: Not documented"],"errors":[],"successes":[],"warnings":["plain.tsx: No metadata found"],"infos":[]}
//!   ```
//!
//! # Architecture
//!
//! Message text is built by pure `format_*` functions so it can be tested
//! without capturing the terminal. Reporters only decide where text goes.

use crate::types::ComponentInfo;
use colored::Colorize;
use serde::Serialize;

/// Selects the reporter for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored human-readable lines
    #[default]
    #[value(name = "chalk", alias = "text")]
    Chalk,
    /// One JSON document at the end of the run
    Json,
}

impl OutputFormat {
    pub fn reporter(self) -> Box<dyn Reporter> {
        match self {
            Self::Chalk => Box::new(TextReporter::default()),
            Self::Json => Box::new(JsonReporter::default()),
        }
    }
}

/// Message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Log,
    Info,
    Warn,
    Error,
    Success,
}

/// Sink for user-facing messages. Calls never fail.
pub trait Reporter {
    fn report(&mut self, level: Level, message: &str);

    /// Final combined output of the run.
    fn format_output(&self) -> String;

    fn log(&mut self, message: &str) {
        self.report(Level::Log, message);
    }

    fn info(&mut self, message: &str) {
        self.report(Level::Info, message);
    }

    fn warn(&mut self, message: &str) {
        self.report(Level::Warn, message);
    }

    fn error(&mut self, message: &str) {
        self.report(Level::Error, message);
    }

    fn success(&mut self, message: &str) {
        self.report(Level::Success, message);
    }
}

// ============================================================================
// Text reporter
// ============================================================================

/// Prints colored lines immediately and keeps a plain-text record.
#[derive(Debug, Default)]
pub struct TextReporter {
    lines: Vec<String>,
}

impl Reporter for TextReporter {
    fn report(&mut self, level: Level, message: &str) {
        match level {
            Level::Log => println!("{}", message),
            Level::Info => println!("{}", message.blue()),
            Level::Success => println!("{}", message.green()),
            Level::Warn => eprintln!("{}", message.yellow()),
            Level::Error => eprintln!("{}", message.red()),
        }
        self.lines.push(format_record_line(level, message));
    }

    fn format_output(&self) -> String {
        self.lines.join("\n")
    }
}

/// Plain-text record line: severity prefix for everything but plain logs.
fn format_record_line(level: Level, message: &str) -> String {
    match level {
        Level::Log => message.to_string(),
        Level::Info => format!("INFO: {}", message),
        Level::Warn => format!("WARNING: {}", message),
        Level::Error => format!("ERROR: {}", message),
        Level::Success => format!("SUCCESS: {}", message),
    }
}

// ============================================================================
// JSON reporter
// ============================================================================

/// Messages bucketed by severity, in the order they were reported.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub logs: Vec<String>,
    pub errors: Vec<String>,
    pub successes: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

/// Silent reporter that serializes everything at the end.
#[derive(Debug, Default)]
pub struct JsonReporter {
    report: RunReport,
}

impl JsonReporter {
    pub fn run_report(&self) -> &RunReport {
        &self.report
    }
}

impl Reporter for JsonReporter {
    fn report(&mut self, level: Level, message: &str) {
        let bucket = match level {
            Level::Log => &mut self.report.logs,
            Level::Info => &mut self.report.infos,
            Level::Warn => &mut self.report.warnings,
            Level::Error => &mut self.report.errors,
            Level::Success => &mut self.report.successes,
        };
        bucket.push(message.to_string());
    }

    fn format_output(&self) -> String {
        // Only string vectors: serialization cannot fail.
        serde_json::to_string(&self.report).unwrap_or_default()
    }
}

// ============================================================================
// Message formatting
// ============================================================================

/// Inventory line for `docs list`.
///
/// Components with metadata are listed by display name with their
/// documentation state; components without metadata are a warning keyed by
/// filename.
pub fn format_inventory_entry(info: &ComponentInfo) -> (Level, String) {
    match &info.metadata {
        Some(meta) => {
            let state = if info.has_documentation {
                "Documented"
            } else {
                "Not documented"
            };
            (Level::Log, format!("{}: {}", meta.display_name, state))
        }
        None => (
            Level::Warn,
            format!("{}: No metadata found", info.file.filename),
        ),
    }
}

/// Send the whole inventory to a reporter.
pub fn report_inventory(inventory: &[ComponentInfo], reporter: &mut dyn Reporter) {
    for info in inventory {
        let (level, line) = format_inventory_entry(info);
        reporter.report(level, &line);
    }
}

// ============================================================================
// Tests
// ============================================================================
