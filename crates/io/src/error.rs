//! Error types for naiad-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the naiad-io crate.
///
/// This enum covers missing files, CSV parse failures, malformed cells and
/// dates, validation problems, and data-model mismatches encountered when
/// reading series or curve files and writing index output.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an I/O error from the operating system.
    #[error("io error: {reason}")]
    Io {
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps an error originating from the naiad-curve crate.
    #[error("curve error: {reason}")]
    Curve {
        /// Description of the underlying curve construction failure.
        reason: String,
    },

    /// Returned when a required column is not present in a file's header.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a cell cannot be parsed as a finite number.
    #[error("invalid number in column '{column}' at line {line}: '{value}'")]
    InvalidNumber {
        /// Column the cell belongs to.
        column: String,
        /// 1-based line number in the file, counting the header as line 1.
        line: usize,
        /// The raw cell contents.
        value: String,
    },

    /// Returned when a date cell cannot be parsed.
    #[error("invalid date '{value}': {reason}")]
    InvalidDate {
        /// The raw cell contents.
        value: String,
        /// Description of the date parsing issue.
        reason: String,
    },

    /// Returned when a curve column yields no control points after
    /// blank rows are dropped.
    #[error("curve column '{column}' in {} has no usable rows", path.display())]
    EmptyCurve {
        /// Name of the empty curve column.
        column: String,
        /// Path to the file that was read.
        path: PathBuf,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Io {
            reason: e.to_string(),
        }
    }
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<naiad_curve::CurveError> for IoError {
    fn from(e: naiad_curve::CurveError) -> Self {
        IoError::Curve {
            reason: e.to_string(),
        }
    }
}
