//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering multiple validation errors
//! into a single [`IoError::Validation`], plus standalone helpers that check
//! common invariants on river series arrays.

use chrono::NaiveDate;

use crate::error::IoError;

// ---------------------------------------------------------------------------
// ValidationCollector
// ---------------------------------------------------------------------------

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
///
/// Create a collector, push zero or more error messages, then call
/// [`finish`](Self::finish) to obtain `Ok(())` when everything is valid or a
/// single `Err` that summarises every violation.
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Returns `true` when no errors have been recorded.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Standalone validation helpers
// ---------------------------------------------------------------------------

/// Check that the groundwater and date array lengths match `flow_len`.
pub(crate) fn validate_series_lengths(
    flow_len: usize,
    gw_len: usize,
    dates_len: usize,
) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    if gw_len != flow_len {
        c.push(format!("gw_level length {gw_len} != flow length {flow_len}"));
    }

    if dates_len != flow_len {
        c.push(format!("dates length {dates_len} != flow length {flow_len}"));
    }

    c
}

/// Check that every value in `values` is finite.
///
/// Records one message per offending index, labelled with `name`.
pub(crate) fn validate_finite(name: &'static str, values: &[f64]) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for (i, &val) in values.iter().enumerate() {
        if !val.is_finite() {
            c.push(format!("non-finite {name} at index {i}: {val}"));
        }
    }

    c
}

/// Check that dates increase strictly from one day to the next.
///
/// Records one message per violating pair.
pub(crate) fn validate_dates_strictly_increasing(dates: &[NaiveDate]) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for (i, pair) in dates.windows(2).enumerate() {
        let (prev, next) = (pair[0], pair[1]);
        if prev >= next {
            c.push(format!(
                "dates not strictly increasing at index {i}: {prev} >= {next}"
            ));
        }
    }

    c
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
