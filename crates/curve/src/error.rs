//! Error types for the naiad-curve crate.

/// Error type for all fallible operations in the naiad-curve crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CurveError {
    /// Returned when the x and y arrays have different lengths.
    #[error("curve axes differ in length: {x_len} x values, {y_len} y values")]
    LengthMismatch {
        /// Number of x values supplied.
        x_len: usize,
        /// Number of y values supplied.
        y_len: usize,
    },

    /// Returned when a curve is constructed with no control points.
    #[error("curve has no control points")]
    Empty,
}
