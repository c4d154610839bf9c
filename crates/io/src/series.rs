//! River series data container.

use chrono::{Datelike, NaiveDate};

use crate::error::IoError;
use crate::validate;

/// Container for a daily river series at a single gauge.
///
/// Holds flow and groundwater level (both required), the date of each day,
/// and pre-computed calendar months derived from the date sequence. Flow
/// values may be negative: extraction-adjusted series routinely dip below
/// zero.
#[derive(Debug, Clone)]
pub struct RiverSeries {
    /// Daily flow time series.
    flow: Vec<f64>,
    /// Daily groundwater level time series.
    gw_level: Vec<f64>,
    /// Date for each day.
    dates: Vec<NaiveDate>,
    /// Month of each day (1..=12).
    months: Vec<u8>,
}

impl RiverSeries {
    /// Creates a new `RiverSeries` after validating inputs.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if any of the following checks fail:
    /// - Array lengths do not match
    /// - Flow or groundwater level contains non-finite values
    /// - Dates are not strictly increasing
    pub fn new(
        flow: Vec<f64>,
        gw_level: Vec<f64>,
        dates: Vec<NaiveDate>,
    ) -> Result<Self, IoError> {
        // Validate lengths.
        validate::validate_series_lengths(flow.len(), gw_level.len(), dates.len()).finish()?;

        // Validate values are finite.
        validate::validate_finite("flow", &flow).finish()?;
        validate::validate_finite("gw_level", &gw_level).finish()?;

        // Validate date ordering.
        validate::validate_dates_strictly_increasing(&dates).finish()?;

        // Compute calendar metadata.
        let months: Vec<u8> = dates.iter().map(|d| d.month() as u8).collect();

        Ok(Self {
            flow,
            gw_level,
            dates,
            months,
        })
    }

    /// Returns the daily flow time series.
    pub fn flow(&self) -> &[f64] {
        &self.flow
    }

    /// Returns the daily groundwater level time series.
    pub fn gw_level(&self) -> &[f64] {
        &self.gw_level
    }

    /// Returns the date sequence.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Returns the month of each day.
    pub fn months(&self) -> &[u8] {
        &self.months
    }

    /// Returns the number of days.
    pub fn len(&self) -> usize {
        self.flow.len()
    }

    /// Returns `true` if the series contains no days.
    pub fn is_empty(&self) -> bool {
        self.flow.is_empty()
    }

    /// Consumes self and returns the flow vector.
    pub fn into_flow(self) -> Vec<f64> {
        self.flow
    }

    /// Consumes self and returns the groundwater level vector.
    pub fn into_gw_level(self) -> Vec<f64> {
        self.gw_level
    }

    /// Consumes self and returns the date vector.
    pub fn into_dates(self) -> Vec<NaiveDate> {
        self.dates
    }
}
