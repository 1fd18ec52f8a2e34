use std::io;

use thiserror::Error;

/// Everything that can abort a cleaning run.
///
/// An empty result is not an error: the run still writes a header-only file.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("input is missing required column '{column}'")]
    MissingColumn { column: &'static str },

    /// `row` is the 1-based data row, header excluded.
    #[error("row {row}: '{value}' is not a YYYY-MM reference date")]
    InvalidDate { row: usize, value: String },

    #[error("row {row}: '{value}' is not a numeric VALUE")]
    InvalidValue { row: usize, value: String },

    #[error("failed to write report: {0}")]
    Report(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CleanError>;
