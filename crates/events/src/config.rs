//! Configuration for flood event detection.

use crate::error::EventError;

/// Configuration for flood event detection.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use naiad_events::EventConfig;
///
/// let config = EventConfig::new()
///     .with_threshold(450.0)
///     .with_min_duration(5);
/// ```
#[derive(Clone, Debug)]
pub struct EventConfig {
    threshold: f64,
    min_separation: usize,
    min_duration: usize,
}

impl EventConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `threshold = 300.0`, `min_separation = 2`,
    /// `min_duration = 3`.
    pub fn new() -> Self {
        Self {
            threshold: 300.0,
            min_separation: 2,
            min_duration: 3,
        }
    }

    /// Sets the flow threshold above which a day counts towards a flood.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the minimum number of below-threshold days before an event starts.
    pub fn with_min_separation(mut self, min_separation: usize) -> Self {
        self.min_separation = min_separation;
        self
    }

    /// Sets the minimum number of at-or-above-threshold days an event must last.
    pub fn with_min_duration(mut self, min_duration: usize) -> Self {
        self.min_duration = min_duration;
        self
    }

    // --- Accessors ---

    /// Returns the flow threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the minimum preceding dry spell in days.
    pub fn min_separation(&self) -> usize {
        self.min_separation
    }

    /// Returns the minimum event duration in days.
    pub fn min_duration(&self) -> usize {
        self.min_duration
    }

    /// Validates this configuration.
    ///
    /// Checks that the threshold is finite and non-negative.
    pub fn validate(&self) -> Result<(), EventError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(EventError::InvalidThreshold {
                value: self.threshold,
            });
        }
        Ok(())
    }
}

impl Default for EventConfig {
    fn default() -> Self {
        Self::new()
    }
}
