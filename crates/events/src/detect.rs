//! Flood event detection.
//!
//! Scans a daily flow series for flood events: runs of at-or-above-threshold
//! days preceded by a dry spell. Detection runs in two linear passes over the
//! series, so cost is O(n) regardless of how many events occur.

use serde::Serialize;
use tracing::debug;

use crate::config::EventConfig;
use crate::error::EventError;

/// A flood event detected in a daily flow series.
///
/// An event starts on the first day at or above the threshold after at least
/// one below-threshold day, lasts for the full run of at-or-above days, and
/// records the dry spell that preceded it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FloodEvent {
    /// Day index of the event start within the source series.
    pub index: usize,
    /// Number of consecutive at-or-above-threshold days from `index`.
    pub duration: usize,
    /// Number of consecutive below-threshold days immediately before `index`.
    pub preceding_dry: usize,
}

/// Detects flood events in a daily flow series.
///
/// A day counts towards a flood when its flow is at or above the configured
/// threshold; a flow exactly equal to the threshold is treated as above. An
/// event is kept only if it lasts at least `min_duration` days and follows a
/// dry spell of at least `min_separation` days. The first day of the series
/// can never start an event because no dry spell precedes it.
///
/// # Arguments
///
/// * `flow` - Daily flow values, one per day.
/// * `config` - Detection parameters (threshold and floors).
///
/// # Errors
///
/// Returns [`EventError`] if the configuration fails validation or any flow
/// value is NaN or infinite.
pub fn detect_events(flow: &[f64], config: &EventConfig) -> Result<Vec<FloodEvent>, EventError> {
    // --- Validation ---
    config.validate()?;
    if let Some(index) = flow.iter().position(|v| !v.is_finite()) {
        return Err(EventError::NonFiniteFlow { index });
    }

    let n = flow.len();
    let threshold = config.threshold();

    // --- Forward pass: candidate starts and preceding dry spells ---
    // A candidate is the first at-or-above day after one or more below days.
    let mut pre_below = vec![0usize; n];
    let mut candidates: Vec<usize> = Vec::new();
    let mut below_count = 0usize;
    for i in 0..n {
        pre_below[i] = below_count;
        if flow[i] < threshold {
            below_count += 1;
        } else if below_count > 0 {
            candidates.push(i);
            below_count = 0;
        }
    }

    // --- Backward pass: run length of at-or-above days from each day ---
    let mut post_above = vec![0usize; n];
    let mut above_count = 0usize;
    for i in (0..n).rev() {
        above_count = if flow[i] >= threshold {
            above_count + 1
        } else {
            0
        };
        post_above[i] = above_count;
    }

    // --- Filter candidates against the configured floors ---
    let events: Vec<FloodEvent> = candidates
        .into_iter()
        .filter(|&e| {
            post_above[e] >= config.min_duration() && pre_below[e] >= config.min_separation()
        })
        .map(|e| FloodEvent {
            index: e,
            duration: post_above[e],
            preceding_dry: pre_below[e],
        })
        .collect();

    debug!(
        n_days = n,
        n_events = events.len(),
        threshold,
        "detected flood events"
    );

    Ok(events)
}
