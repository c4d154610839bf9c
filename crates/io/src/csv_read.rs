//! Low-level CSV extraction helpers.
//!
//! Shared plumbing for the series and curve readers: opening files, locating
//! header columns, and parsing numeric cells with positional error context.

use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use crate::error::IoError;

/// Opens a CSV reader over `path`, checking existence first so missing
/// files surface as [`IoError::FileNotFound`] rather than a bare I/O error.
pub(crate) fn open_reader(path: &Path) -> Result<csv::Reader<File>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(csv::Reader::from_path(path)?)
}

/// Returns the index of the column named `name` in `header`.
///
/// Header cells are trimmed before comparison, so stray whitespace in the
/// file does not hide a column.
pub(crate) fn find_column(
    header: &StringRecord,
    name: &str,
    path: &Path,
) -> Result<usize, IoError> {
    header
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| IoError::MissingColumn {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
}

/// Parses the cell at `idx` in `record` as a finite `f64`.
///
/// `line` is the 1-based line number in the file (header = line 1) and is
/// carried into the error for reporting. NaN and infinity parse as numbers
/// but are rejected here.
pub(crate) fn parse_cell(
    record: &StringRecord,
    idx: usize,
    column: &str,
    line: usize,
) -> Result<f64, IoError> {
    let raw = record.get(idx).unwrap_or("").trim();
    let value: f64 = raw.parse().map_err(|_| IoError::InvalidNumber {
        column: column.to_string(),
        line,
        value: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(IoError::InvalidNumber {
            column: column.to_string(),
            line,
            value: raw.to_string(),
        });
    }
    Ok(value)
}
