//! Scored index series container.

use crate::config::ScoreConfig;

/// The per-day index series produced by scoring.
///
/// Holds the surface index (event signals pushed through their response
/// curves and weighted) and the groundwater index. The two are kept
/// separate so callers can blend them with any weights, or not at all.
#[derive(Debug, Clone)]
pub struct WaterIndexResult {
    surface_index: Vec<f64>,
    gwlevel_index: Vec<f64>,
}

impl WaterIndexResult {
    pub(crate) fn new(surface_index: Vec<f64>, gwlevel_index: Vec<f64>) -> Self {
        Self {
            surface_index,
            gwlevel_index,
        }
    }

    /// Returns the per-day surface water index.
    pub fn surface_index(&self) -> &[f64] {
        &self.surface_index
    }

    /// Returns the per-day groundwater index.
    pub fn gwlevel_index(&self) -> &[f64] {
        &self.gwlevel_index
    }

    /// Returns the number of scored days.
    pub fn len(&self) -> usize {
        self.surface_index.len()
    }

    /// Returns `true` if no days were scored.
    pub fn is_empty(&self) -> bool {
        self.surface_index.is_empty()
    }

    /// Blends the surface and groundwater indices per day using the blend
    /// weights in `config`.
    pub fn blended(&self, config: &ScoreConfig) -> Vec<f64> {
        self.surface_index
            .iter()
            .zip(self.gwlevel_index.iter())
            .map(|(&s, &g)| config.surface_weight() * s + config.gwlevel_weight() * g)
            .collect()
    }

    /// Consumes the result, returning `(surface_index, gwlevel_index)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.surface_index, self.gwlevel_index)
    }
}
