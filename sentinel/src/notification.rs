//! Append-only notification log.
//!
//! One tab-separated record per tick, plus a marker block when a
//! breach latches. Every write opens and closes the file so records
//! survive an abrupt stop; no handle is held across ticks.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Column header written by [`NotificationLog::reset_with_header`].
const HEADER: &str = "Radial\tLinear";
/// Width of the separator row under the header, in dashes.
const SEPARATOR_WIDTH: usize = 15;

/// Record writer for the concussion notification file.
#[derive(Debug, Clone)]
pub struct NotificationLog {
    path: PathBuf,
}

impl NotificationLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncates the file and writes the header and separator rows.
    pub fn reset_with_header(&self) -> std::io::Result<()> {
        let mut file = File::create(&self.path)?;
        writeln!(file, "{HEADER}")?;
        writeln!(file, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        Ok(())
    }

    /// Appends one record.
    ///
    /// Values are rendered to two decimal places; a missing value
    /// renders as `N/A`. When `concussed` is set, the record carries
    /// the `Concussed` marker block after it.
    pub fn record(
        &self,
        radial: Option<f64>,
        linear: Option<f64>,
        concussed: bool,
    ) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        writeln!(file, "{}\t{}", format_value(radial), format_value(linear))?;
        if concussed {
            writeln!(file, "\nConcussed\n")?;
        }
        Ok(())
    }
}

fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "N/A".to_string(),
    }
}
