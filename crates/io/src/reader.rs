//! High-level CSV reader configuration and orchestration.

use std::path::Path;

use chrono::NaiveDate;
use naiad_curve::Curve;
use tracing::{debug, info};

use crate::csv_read;
use crate::error::IoError;
use crate::series::RiverSeries;

// ---------------------------------------------------------------------------
// StorageFit
// ---------------------------------------------------------------------------

/// Linear fit converting reservoir storage to groundwater level.
///
/// Some gauges report reservoir storage instead of a groundwater level.
/// Applying the fit, `level = storage * slope + intercept`, maps the stored
/// column onto the level scale the response curves expect.
#[derive(Debug, Clone, Copy)]
pub struct StorageFit {
    slope: f64,
    intercept: f64,
}

impl StorageFit {
    /// Creates a fit with the given slope and intercept.
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Returns the slope of the fit.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Returns the intercept of the fit.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Converts one storage value to a groundwater level.
    pub fn apply(&self, storage: f64) -> f64 {
        storage * self.slope + self.intercept
    }
}

// ---------------------------------------------------------------------------
// SeriesReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading a daily river series from a CSV file.
///
/// Use the builder methods (`with_*`) to customise column names, the date
/// format, and storage-to-level conversion. The [`Default`] implementation
/// supplies the column names used by gauge exports.
#[derive(Debug, Clone)]
pub struct SeriesReaderConfig {
    /// Column holding the date of each row.
    date_col: String,
    /// chrono format string for parsing the date column.
    date_format: String,
    /// Column holding daily flow.
    flow_col: String,
    /// Column holding groundwater level.
    gwlevel_col: String,
    /// Optional storage column and fit; when set, the named column is read
    /// instead of `gwlevel_col` and converted through the fit.
    storage: Option<(String, StorageFit)>,
}

impl Default for SeriesReaderConfig {
    fn default() -> Self {
        Self {
            date_col: "Date".into(),
            date_format: "%Y-%m-%d".into(),
            flow_col: "Flow".into(),
            gwlevel_col: "Gwlevel".into(),
            storage: None,
        }
    }
}

impl SeriesReaderConfig {
    /// Set the date column name.
    pub fn with_date_col(mut self, name: impl Into<String>) -> Self {
        self.date_col = name.into();
        self
    }

    /// Set the chrono format string for the date column.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Set the flow column name.
    pub fn with_flow_col(mut self, name: impl Into<String>) -> Self {
        self.flow_col = name.into();
        self
    }

    /// Set the groundwater level column name.
    pub fn with_gwlevel_col(mut self, name: impl Into<String>) -> Self {
        self.gwlevel_col = name.into();
        self
    }

    /// Read the named storage column in place of the groundwater level
    /// column, converting values through `fit`.
    pub fn with_storage(mut self, column: impl Into<String>, fit: StorageFit) -> Self {
        self.storage = Some((column.into(), fit));
        self
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if a storage fit is set with a
    /// non-finite slope or intercept.
    pub fn validate(&self) -> Result<(), IoError> {
        if let Some((_, fit)) = &self.storage
            && (!fit.slope().is_finite() || !fit.intercept().is_finite())
        {
            return Err(IoError::Validation {
                count: 1,
                details: format!(
                    "storage fit must be finite, got slope {} intercept {}",
                    fit.slope(),
                    fit.intercept()
                ),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// read_series
// ---------------------------------------------------------------------------

/// Read a daily river series from a CSV file.
///
/// The file must carry a header naming the date, flow, and groundwater
/// level (or storage) columns. Rows are read in file order; the resulting
/// [`RiverSeries`] validates lengths, finiteness, and date ordering.
///
/// # Errors
///
/// Returns [`IoError`] on missing files or columns, malformed cells or
/// dates, or validation problems in the assembled series.
pub fn read_series(path: &Path, config: &SeriesReaderConfig) -> Result<RiverSeries, IoError> {
    config.validate()?;

    let mut reader = csv_read::open_reader(path)?;
    let header = reader.headers()?.clone();

    // -- Locate columns -----------------------------------------------------

    let date_idx = csv_read::find_column(&header, &config.date_col, path)?;
    let flow_idx = csv_read::find_column(&header, &config.flow_col, path)?;
    let value_col: &str = match &config.storage {
        Some((col, _)) => col,
        None => &config.gwlevel_col,
    };
    let value_idx = csv_read::find_column(&header, value_col, path)?;

    // -- Parse rows ---------------------------------------------------------

    let mut dates = Vec::new();
    let mut flow = Vec::new();
    let mut gw_level = Vec::new();

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        // 1-based line number, counting the header as line 1.
        let line = row + 2;

        let raw_date = record.get(date_idx).unwrap_or("").trim();
        let date =
            NaiveDate::parse_from_str(raw_date, &config.date_format).map_err(|e| {
                IoError::InvalidDate {
                    value: raw_date.to_string(),
                    reason: e.to_string(),
                }
            })?;
        dates.push(date);

        flow.push(csv_read::parse_cell(
            &record,
            flow_idx,
            &config.flow_col,
            line,
        )?);
        gw_level.push(csv_read::parse_cell(&record, value_idx, value_col, line)?);
    }

    // -- Storage-to-level conversion ----------------------------------------

    if let Some((col, fit)) = &config.storage {
        for v in &mut gw_level {
            *v = fit.apply(*v);
        }
        debug!(
            column = %col,
            slope = fit.slope(),
            intercept = fit.intercept(),
            "converted storage to groundwater level"
        );
    }

    let series = RiverSeries::new(flow, gw_level, dates)?;
    info!(
        path = %path.display(),
        n_days = series.len(),
        "river series loaded"
    );
    Ok(series)
}

// ---------------------------------------------------------------------------
// load_curve
// ---------------------------------------------------------------------------

/// Load one response curve from a CSV file.
///
/// Curve files hold a shared x column and one response column per named
/// curve; rows where the selected response cell is blank carry no control
/// point for that curve and are skipped. Control points are sorted by
/// ascending x before the [`Curve`] is built.
///
/// # Errors
///
/// Returns [`IoError`] on missing files or columns, malformed cells on
/// kept rows, or when the selected column has no usable rows.
pub fn load_curve(path: &Path, x_col: &str, y_col: &str) -> Result<Curve, IoError> {
    let mut reader = csv_read::open_reader(path)?;
    let header = reader.headers()?.clone();

    let x_idx = csv_read::find_column(&header, x_col, path)?;
    let y_idx = csv_read::find_column(&header, y_col, path)?;

    let mut points: Vec<(f64, f64)> = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let line = row + 2;

        if record.get(y_idx).unwrap_or("").trim().is_empty() {
            continue;
        }

        let x = csv_read::parse_cell(&record, x_idx, x_col, line)?;
        let y = csv_read::parse_cell(&record, y_idx, y_col, line)?;
        points.push((x, y));
    }

    if points.is_empty() {
        return Err(IoError::EmptyCurve {
            column: y_col.to_string(),
            path: path.to_path_buf(),
        });
    }

    // Finite by parse_cell, so total_cmp gives a plain numeric order.
    points.sort_by(|a, b| a.0.total_cmp(&b.0));
    let (x, y): (Vec<f64>, Vec<f64>) = points.into_iter().unzip();

    debug!(
        path = %path.display(),
        column = y_col,
        n_points = x.len(),
        "curve loaded"
    );
    Ok(Curve::new(x, y)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
