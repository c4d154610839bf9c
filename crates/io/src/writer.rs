//! Index series CSV output.

use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::error::IoError;
use crate::validate::ValidationCollector;

/// Write scored index series to a CSV file.
///
/// Emits one row per day with columns `date`, `surface_index`, and
/// `gwlevel_index`, plus a trailing `water_index` column when a blended
/// series is supplied. Dates are formatted as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [`IoError::Validation`] if any index series length differs from
/// the date sequence, or [`IoError::Csv`] / [`IoError::Io`] if writing
/// fails.
pub fn write_indices(
    path: &Path,
    dates: &[NaiveDate],
    surface: &[f64],
    gwlevel: &[f64],
    water_index: Option<&[f64]>,
) -> Result<(), IoError> {
    // -- Length checks ------------------------------------------------------

    let mut c = ValidationCollector::new();
    if surface.len() != dates.len() {
        c.push(format!(
            "surface_index length {} != dates length {}",
            surface.len(),
            dates.len()
        ));
    }
    if gwlevel.len() != dates.len() {
        c.push(format!(
            "gwlevel_index length {} != dates length {}",
            gwlevel.len(),
            dates.len()
        ));
    }
    if let Some(blended) = water_index
        && blended.len() != dates.len()
    {
        c.push(format!(
            "water_index length {} != dates length {}",
            blended.len(),
            dates.len()
        ));
    }
    c.finish()?;

    // -- Header and rows ----------------------------------------------------

    let mut writer = csv::Writer::from_path(path)?;

    match water_index {
        Some(_) => {
            writer.write_record(["date", "surface_index", "gwlevel_index", "water_index"])?;
        }
        None => writer.write_record(["date", "surface_index", "gwlevel_index"])?,
    }

    for (i, date) in dates.iter().enumerate() {
        let date_cell = date.format("%Y-%m-%d").to_string();
        match water_index {
            Some(blended) => writer.write_record([
                date_cell,
                surface[i].to_string(),
                gwlevel[i].to_string(),
                blended[i].to_string(),
            ])?,
            None => writer.write_record([
                date_cell,
                surface[i].to_string(),
                gwlevel[i].to_string(),
            ])?,
        }
    }

    writer.flush()?;
    info!(
        path = %path.display(),
        n_days = dates.len(),
        blended = water_index.is_some(),
        "index series written"
    );
    Ok(())
}
