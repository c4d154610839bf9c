//! Piecewise-linear lookup curves for response scoring.
//!
//! Ecological response curves map a physical quantity (a month, a spell
//! length in days, a groundwater level in metres) onto a dimensionless index.
//! This crate holds the curve type and its clamped linear interpolation;
//! loading curves from files lives in `naiad-io`.
//!
//! # Quick start
//!
//! ```rust
//! use naiad_curve::Curve;
//!
//! let curve = Curve::new(vec![0.0, 10.0], vec![0.0, 1.0]).unwrap();
//! assert_eq!(curve.value_at(5.0), 0.5);
//! assert_eq!(curve.value_at(-3.0), 0.0); // clamped left
//! assert_eq!(curve.value_at(25.0), 1.0); // clamped right
//! ```

pub mod curve;
pub mod error;

pub use curve::Curve;
pub use error::CurveError;
