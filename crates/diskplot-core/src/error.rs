// File: crates/diskplot-core/src/error.rs
// Summary: Error taxonomy shared by the loader, the renderer and the display.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a run. None of these are retried.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("input not found: cannot read {}", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `row` is the zero-based data row (header excluded), `line` the 1-based file line.
    #[error("malformed row {row} (line {line}): {defect}: {raw:?}")]
    MalformedRow {
        row: usize,
        line: u64,
        raw: String,
        defect: RowDefect,
    },

    #[error("empty series: dataset has no data rows, nothing to plot")]
    EmptySeries,

    #[error("write failure: cannot write {}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("render failure: {0}")]
    Render(String),

    #[error("display failure: {0}")]
    Display(String),
}

/// What exactly is wrong with a malformed data row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowDefect {
    #[error("expected {expected} fields, found {found}")]
    WrongFieldCount { expected: usize, found: usize },
    #[error("field {column} is not a number")]
    NotNumeric { column: usize },
    #[error("field {column} is not valid UTF-8")]
    Encoding { column: usize },
    #[error("row could not be parsed as CSV")]
    Unreadable,
    /// The header line itself could not be read; `row` carries no meaning.
    #[error("header line could not be parsed as CSV")]
    Header,
}

impl ChartError {
    /// Short name of the error kind, as used in run summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            ChartError::InputNotFound { .. } => "InputNotFound",
            ChartError::MalformedRow { .. } => "MalformedRow",
            ChartError::EmptySeries => "EmptySeries",
            ChartError::WriteFailure { .. } => "WriteFailure",
            ChartError::Render(_) => "Render",
            ChartError::Display(_) => "Display",
        }
    }
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
