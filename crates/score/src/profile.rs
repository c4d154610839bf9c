//! Named presets for weights and event detection parameters.

use naiad_events::EventConfig;

use crate::config::ScoreConfig;

/// Named surface weight profiles.
///
/// Each profile fixes the `(duration, timing, dry)` weights applied to the
/// event signals, following Section 4.5 of Fu et al. (2013).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightProfile {
    /// Balanced weighting: `(0.5, 0.2, 0.3)`.
    Standard,
    /// Emphasises event duration: `(0.9, 0.05, 0.05)`.
    FavourDuration,
    /// Emphasises the preceding dry spell: `(0.4, 0.1, 0.5)`.
    FavourDry,
    /// Emphasises event timing: `(0.3, 0.5, 0.2)`.
    FavourTiming,
}

impl WeightProfile {
    /// Returns the `(duration, timing, dry)` weights for this profile.
    pub fn surface_weights(self) -> (f64, f64, f64) {
        match self {
            Self::Standard => (0.5, 0.2, 0.3),
            Self::FavourDuration => (0.9, 0.05, 0.05),
            Self::FavourDry => (0.4, 0.1, 0.5),
            Self::FavourTiming => (0.3, 0.5, 0.2),
        }
    }

    /// Applies this profile's surface weights to `config`.
    pub fn apply(self, config: ScoreConfig) -> ScoreConfig {
        let (duration, timing, dry) = self.surface_weights();
        config.with_surface_weights(duration, timing, dry)
    }
}

/// Named event-parameter bands.
///
/// Bands bundle a flood threshold with separation and duration floors, from
/// permissive (`Min`) to strict (`Max`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterBand {
    /// Low threshold and floors: catches most pulses.
    Min,
    /// Middle-of-the-road parameters, matching the detection defaults.
    Med,
    /// High threshold and floors: keeps only large, well-separated floods.
    Max,
}

impl ParameterBand {
    /// Returns the flood threshold for this band.
    pub fn threshold(self) -> f64 {
        match self {
            Self::Min => 110.0,
            Self::Med => 300.0,
            Self::Max => 800.0,
        }
    }

    /// Returns the minimum preceding dry spell for this band.
    pub fn min_separation(self) -> usize {
        match self {
            Self::Min => 1,
            Self::Med => 2,
            Self::Max => 5,
        }
    }

    /// Returns the minimum event duration for this band.
    pub fn min_duration(self) -> usize {
        match self {
            Self::Min => 1,
            Self::Med => 3,
            Self::Max => 5,
        }
    }

    /// Returns an [`EventConfig`] carrying this band's parameters.
    pub fn event_config(self) -> EventConfig {
        EventConfig::new()
            .with_threshold(self.threshold())
            .with_min_separation(self.min_separation())
            .with_min_duration(self.min_duration())
    }
}
