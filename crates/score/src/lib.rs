//! Water index scoring: turn a daily river series into ecological indices.
//!
//! Flood events detected in the flow series are expanded into per-day
//! timing, duration, and dry-spell signals; each signal is pushed through a
//! response curve and the three responses are combined into a surface water
//! index with configurable weights. The groundwater level series is scored
//! through its own curve. Weighting follows the scheme of Fu et al. (2013).

mod config;
mod curves;
mod error;
mod profile;
mod result;

use naiad_events::{detect_events, expand_events};
use naiad_io::RiverSeries;
use tracing::debug;

pub use config::ScoreConfig;
pub use curves::ScoreCurves;
pub use error::ScoreError;
pub use profile::{ParameterBand, WeightProfile};
pub use result::WaterIndexResult;

/// Score a daily river series against a set of response curves.
///
/// Detects flood events in the flow series, expands them into per-day
/// timing, duration, and dry-spell signals, pushes each signal through its
/// response curve, and combines the three responses into a per-day surface
/// index using the configured weights. The groundwater level series is
/// scored through its own curve independently. The two indices are returned
/// unblended; call [`WaterIndexResult::blended`] to combine them.
///
/// # Errors
///
/// Returns [`ScoreError`] if the configuration fails validation or event
/// detection rejects the series.
#[tracing::instrument(skip(series, curves, config), fields(n_days = series.len()))]
pub fn score(
    series: &RiverSeries,
    curves: &ScoreCurves,
    config: &ScoreConfig,
) -> Result<WaterIndexResult, ScoreError> {
    // Step 1: Validate configuration
    config.validate()?;

    // Step 2: Detect flood events in the flow series
    let events = detect_events(series.flow(), config.events())?;
    debug!(n_events = events.len(), "flood events detected");

    // Step 3: Expand events into per-day signals
    let signal = expand_events(&events, series.months())?;

    // Step 4: Push each signal through its response curve
    let timing_idx = curves.timing().values_at(signal.timing());
    let duration_idx = curves.duration().values_at(signal.duration());
    let dry_idx = curves.dry().values_at(signal.dry());

    // Step 5: Combine the responses into the surface index
    let surface_index: Vec<f64> = duration_idx
        .iter()
        .zip(timing_idx.iter())
        .zip(dry_idx.iter())
        .map(|((&dur, &tim), &dry)| {
            config.duration_weight() * dur + config.timing_weight() * tim + config.dry_weight() * dry
        })
        .collect();

    // Step 6: Score the groundwater level through its curve
    let gwlevel_index = curves.gwlevel().values_at(series.gw_level());

    Ok(WaterIndexResult::new(surface_index, gwlevel_index))
}
