//! Error types for the naiad-score crate.

/// Error type for all fallible operations in the naiad-score crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ScoreError {
    /// Returned when a single weight is NaN, infinite, or outside 0..=1.
    #[error("invalid {weights} weight: {value} (must be in 0..=1)")]
    InvalidWeight {
        /// Which weight group the value belongs to.
        weights: &'static str,
        /// The rejected weight value.
        value: f64,
    },

    /// Returned when a weight group does not sum to one.
    #[error("{weights} weights must sum to 1, got {sum}")]
    WeightSum {
        /// Which weight group failed the check.
        weights: &'static str,
        /// The actual sum of the group.
        sum: f64,
    },

    /// Returned when a response curve's x axis is not sorted ascending.
    #[error("curve '{curve}' is not sorted by ascending x")]
    UnsortedCurve {
        /// Which curve failed the check.
        curve: &'static str,
    },

    /// Event detection error.
    #[error(transparent)]
    Event(#[from] naiad_events::EventError),

    /// Curve construction error.
    #[error(transparent)]
    Curve(#[from] naiad_curve::CurveError),
}
