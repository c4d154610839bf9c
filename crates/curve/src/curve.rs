//! Piecewise-linear lookup curve.
//!
//! A [`Curve`] pairs an x axis with response values and answers point queries
//! by clamped linear interpolation. Queries left of the first control point
//! return the first response value, queries right of the last return the
//! last; everything in between is interpolated linearly from the bracketing
//! pair.

use crate::error::CurveError;

/// A lookup curve defined by paired control points.
///
/// Construction checks shape only: the two arrays must be non-empty and of
/// equal length. Lookup assumes the x axis ascends; callers feeding unsorted
/// data get unspecified results, so gatekeep with [`is_sorted`](Self::is_sorted)
/// where the source is untrusted.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Curve {
    /// Creates a new curve from paired control points.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::LengthMismatch`] if the arrays differ in length,
    /// or [`CurveError::Empty`] if they contain no points.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, CurveError> {
        if x.len() != y.len() {
            return Err(CurveError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.is_empty() {
            return Err(CurveError::Empty);
        }
        Ok(Self { x, y })
    }

    /// Returns the x axis values.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Returns the response values.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Returns the number of control points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns `true` if the curve has no control points.
    ///
    /// Always `false` for curves built through [`new`](Self::new), which
    /// rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Returns `true` when the x axis is in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        self.x.windows(2).all(|w| w[0] <= w[1])
    }

    /// Returns the smallest response value.
    pub fn min_y(&self) -> f64 {
        self.y.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Returns the largest response value.
    pub fn max_y(&self) -> f64 {
        self.y.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Interpolates the response at `q`.
    ///
    /// Clamps to the first and last response values outside the x range,
    /// and interpolates linearly between the bracketing control points
    /// inside it. A NaN query yields NaN.
    pub fn value_at(&self, q: f64) -> f64 {
        if q.is_nan() {
            return f64::NAN;
        }
        let n = self.x.len();
        if q <= self.x[0] {
            return self.y[0];
        }
        if q >= self.x[n - 1] {
            return self.y[n - 1];
        }

        // First index with x >= q. The clamp guards above leave hi in
        // 1..n, and x[hi - 1] < q <= x[hi], so the interval has width > 0.
        let hi = self.x.partition_point(|&v| v < q);
        let lo = hi - 1;
        let (x0, x1) = (self.x[lo], self.x[hi]);
        let (y0, y1) = (self.y[lo], self.y[hi]);
        y0 + (y1 - y0) * (q - x0) / (x1 - x0)
    }

    /// Interpolates the response at each query point.
    pub fn values_at(&self, qs: &[f64]) -> Vec<f64> {
        qs.iter().map(|&q| self.value_at(q)).collect()
    }

    /// Consumes self and returns the underlying `(x, y)` arrays.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.x, self.y)
    }
}
