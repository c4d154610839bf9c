//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use crate::config::*;

// Import crate types
use naiad_events::EventConfig;
use naiad_io::{SeriesReaderConfig, StorageFit};
use naiad_score::{ParameterBand, ScoreConfig, WeightProfile};

/// Parses a weight profile name string into the corresponding preset.
pub fn parse_weight_profile(s: &str) -> Result<WeightProfile> {
    match s.to_lowercase().replace('_', "-").as_str() {
        "standard" | "default" => Ok(WeightProfile::Standard),
        "favour-duration" => Ok(WeightProfile::FavourDuration),
        "favour-dry" => Ok(WeightProfile::FavourDry),
        "favour-timing" => Ok(WeightProfile::FavourTiming),
        other => bail!("unknown weight profile: {other:?}"),
    }
}

/// Parses a detection parameter band name string into the corresponding preset.
pub fn parse_parameter_band(s: &str) -> Result<ParameterBand> {
    match s.to_lowercase().as_str() {
        "min" => Ok(ParameterBand::Min),
        "med" => Ok(ParameterBand::Med),
        "max" => Ok(ParameterBand::Max),
        other => bail!("unknown parameter band: {other:?}"),
    }
}

/// Builds an [`EventConfig`] from the TOML events configuration.
pub fn build_event_config(events: &EventsToml) -> EventConfig {
    EventConfig::new()
        .with_threshold(events.threshold)
        .with_min_separation(events.min_separation)
        .with_min_duration(events.min_duration)
}

/// Builds a [`ScoreConfig`] from the TOML weights and events configuration.
///
/// A profile passed on the command line wins over the `[weights]` profile
/// entry, which in turn wins over the explicit weight fields.
pub fn build_score_config(
    weights: &WeightsToml,
    events: &EventsToml,
    cli_profile: Option<&str>,
) -> Result<ScoreConfig> {
    let profile = match cli_profile {
        Some(name) => Some(parse_weight_profile(name)?),
        None => weights
            .profile
            .as_deref()
            .map(parse_weight_profile)
            .transpose()?,
    };

    let cfg = match profile {
        Some(p) => p.apply(ScoreConfig::new()),
        None => {
            ScoreConfig::new().with_surface_weights(weights.duration, weights.timing, weights.dry)
        }
    };

    Ok(cfg
        .with_blend_weights(weights.surface, weights.gwlevel)
        .with_events(build_event_config(events)))
}

/// Builds a [`SeriesReaderConfig`] from the TOML I/O configuration.
///
/// The storage column and its fit must be set together.
pub fn build_series_reader_config(io: &IoToml) -> Result<SeriesReaderConfig> {
    let mut cfg = SeriesReaderConfig::default()
        .with_date_col(&io.date_col)
        .with_date_format(&io.date_format)
        .with_flow_col(&io.flow_col)
        .with_gwlevel_col(&io.gwlevel_col);
    match (&io.gwstorage_col, &io.storage_fit) {
        (Some(col), Some(fit)) => {
            cfg = cfg.with_storage(col, StorageFit::new(fit.slope, fit.intercept));
        }
        (Some(_), None) => bail!("gwstorage_col is set but [io].storage_fit is missing"),
        (None, Some(_)) => bail!("[io].storage_fit is set but gwstorage_col is missing"),
        (None, None) => {}
    }
    Ok(cfg)
}
