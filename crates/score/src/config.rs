//! Configuration for water index scoring.

use naiad_events::EventConfig;

use crate::error::ScoreError;

/// Tolerance when checking that a weight group sums to one.
const WEIGHT_SUM_TOL: f64 = 1e-9;

/// Configuration for water index scoring.
///
/// Holds the surface weights applied to the three event signals, the blend
/// weights applied when surface and groundwater indices are combined, and
/// the event detection parameters.
///
/// # Example
///
/// ```
/// use naiad_score::ScoreConfig;
///
/// let config = ScoreConfig::new()
///     .with_surface_weights(0.9, 0.05, 0.05);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct ScoreConfig {
    duration_weight: f64,
    timing_weight: f64,
    dry_weight: f64,
    surface_weight: f64,
    gwlevel_weight: f64,
    events: EventConfig,
}

impl ScoreConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: surface weights `(duration, timing, dry) = (0.5, 0.2, 0.3)`,
    /// blend weights `(surface, gwlevel) = (0.5, 0.5)`, and default event
    /// detection parameters.
    pub fn new() -> Self {
        Self {
            duration_weight: 0.5,
            timing_weight: 0.2,
            dry_weight: 0.3,
            surface_weight: 0.5,
            gwlevel_weight: 0.5,
            events: EventConfig::new(),
        }
    }

    /// Sets the weights applied to the duration, timing, and dry signals.
    pub fn with_surface_weights(mut self, duration: f64, timing: f64, dry: f64) -> Self {
        self.duration_weight = duration;
        self.timing_weight = timing;
        self.dry_weight = dry;
        self
    }

    /// Sets the weights applied when blending surface and groundwater indices.
    pub fn with_blend_weights(mut self, surface: f64, gwlevel: f64) -> Self {
        self.surface_weight = surface;
        self.gwlevel_weight = gwlevel;
        self
    }

    /// Sets the event detection configuration.
    pub fn with_events(mut self, events: EventConfig) -> Self {
        self.events = events;
        self
    }

    // --- Accessors ---

    /// Returns the duration signal weight.
    pub fn duration_weight(&self) -> f64 {
        self.duration_weight
    }

    /// Returns the timing signal weight.
    pub fn timing_weight(&self) -> f64 {
        self.timing_weight
    }

    /// Returns the dry-spell signal weight.
    pub fn dry_weight(&self) -> f64 {
        self.dry_weight
    }

    /// Returns the surface index blend weight.
    pub fn surface_weight(&self) -> f64 {
        self.surface_weight
    }

    /// Returns the groundwater index blend weight.
    pub fn gwlevel_weight(&self) -> f64 {
        self.gwlevel_weight
    }

    /// Returns the event detection configuration.
    pub fn events(&self) -> &EventConfig {
        &self.events
    }

    /// Validates this configuration.
    ///
    /// Checks that every weight is finite and in 0..=1, that the surface
    /// weights and the blend weights each sum to one, and that the event
    /// detection configuration is valid.
    pub fn validate(&self) -> Result<(), ScoreError> {
        // Individual weights
        for (group, value) in [
            ("duration", self.duration_weight),
            ("timing", self.timing_weight),
            ("dry", self.dry_weight),
            ("surface", self.surface_weight),
            ("gwlevel", self.gwlevel_weight),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ScoreError::InvalidWeight {
                    weights: group,
                    value,
                });
            }
        }

        // Surface group
        let surface_sum = self.duration_weight + self.timing_weight + self.dry_weight;
        if (surface_sum - 1.0).abs() > WEIGHT_SUM_TOL {
            return Err(ScoreError::WeightSum {
                weights: "surface",
                sum: surface_sum,
            });
        }

        // Blend group
        let blend_sum = self.surface_weight + self.gwlevel_weight;
        if (blend_sum - 1.0).abs() > WEIGHT_SUM_TOL {
            return Err(ScoreError::WeightSum {
                weights: "blend",
                sum: blend_sum,
            });
        }

        self.events.validate()?;
        Ok(())
    }
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ScoreConfig::new();
        assert!((cfg.duration_weight() - 0.5).abs() < f64::EPSILON);
        assert!((cfg.timing_weight() - 0.2).abs() < f64::EPSILON);
        assert!((cfg.dry_weight() - 0.3).abs() < f64::EPSILON);
        assert!((cfg.surface_weight() - 0.5).abs() < f64::EPSILON);
        assert!((cfg.gwlevel_weight() - 0.5).abs() < f64::EPSILON);
        assert!((cfg.events().threshold() - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn builder_chaining() {
        let cfg = ScoreConfig::new()
            .with_surface_weights(0.4, 0.1, 0.5)
            .with_blend_weights(0.7, 0.3)
            .with_events(EventConfig::new().with_threshold(800.0));

        assert!((cfg.duration_weight() - 0.4).abs() < f64::EPSILON);
        assert!((cfg.timing_weight() - 0.1).abs() < f64::EPSILON);
        assert!((cfg.dry_weight() - 0.5).abs() < f64::EPSILON);
        assert!((cfg.surface_weight() - 0.7).abs() < f64::EPSILON);
        assert!((cfg.gwlevel_weight() - 0.3).abs() < f64::EPSILON);
        assert!((cfg.events().threshold() - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_ok() {
        assert!(ScoreConfig::new().validate().is_ok());
    }

    #[test]
    fn validate_tolerates_rounding_drift() {
        // Thirds do not sum to exactly 1.0 in floating point.
        let w = 1.0 / 3.0;
        let cfg = ScoreConfig::new().with_surface_weights(w, w, w);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_bad_weight() {
        // Above one (checked before the group sum)
        let cfg = ScoreConfig::new().with_surface_weights(1.5, -0.25, -0.25);
        assert!(matches!(
            cfg.validate(),
            Err(ScoreError::InvalidWeight {
                weights: "duration",
                value,
            }) if value == 1.5
        ));
        // Negative
        let cfg = ScoreConfig::new().with_blend_weights(-0.1, 1.1);
        assert!(matches!(
            cfg.validate(),
            Err(ScoreError::InvalidWeight {
                weights: "surface",
                ..
            })
        ));
        // NaN
        let cfg = ScoreConfig::new().with_surface_weights(f64::NAN, 0.5, 0.5);
        assert!(cfg.validate().is_err());
        // Infinity
        let cfg = ScoreConfig::new().with_blend_weights(f64::INFINITY, 0.0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_bad_surface_sum() {
        let cfg = ScoreConfig::new().with_surface_weights(0.5, 0.2, 0.2);
        assert!(matches!(
            cfg.validate(),
            Err(ScoreError::WeightSum {
                weights: "surface",
                sum,
            }) if (sum - 0.9).abs() < 1e-12
        ));
    }

    #[test]
    fn validate_bad_blend_sum() {
        let cfg = ScoreConfig::new().with_blend_weights(0.6, 0.6);
        assert!(matches!(
            cfg.validate(),
            Err(ScoreError::WeightSum {
                weights: "blend",
                sum,
            }) if (sum - 1.2).abs() < 1e-12
        ));
    }

    #[test]
    fn validate_bad_events() {
        let cfg = ScoreConfig::new().with_events(EventConfig::new().with_threshold(f64::NAN));
        assert!(matches!(cfg.validate(), Err(ScoreError::Event(_))));
    }
}
