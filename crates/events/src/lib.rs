//! Flood event detection for daily river flow series.
//!
//! This crate finds flood events (runs of at-or-above-threshold flow days
//! preceded by a dry spell) and expands them into day-aligned attribute
//! signals ready for curve lookups.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐
//!  │   detect      │────▶│    expand      │
//!  │  (find runs)  │     │  (per-day sig) │
//!  └──────────────┘     └────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use naiad_events::{EventConfig, detect_events};
//!
//! let flow = vec![1.0, 2.0, 5.0, 6.0, 2.0, 3.0, 3.0, 7.0, 7.0, 8.0, 9.0, 0.0];
//! let config = EventConfig::new()
//!     .with_threshold(4.0)
//!     .with_min_separation(0)
//!     .with_min_duration(2);
//!
//! let events = detect_events(&flow, &config)?;
//! assert_eq!(events.len(), 2);
//! # Ok::<(), naiad_events::EventError>(())
//! ```

pub mod config;
pub mod detect;
pub mod error;
pub mod expand;
pub mod signal;

pub use config::EventConfig;
pub use detect::{FloodEvent, detect_events};
pub use error::EventError;
pub use expand::expand_events;
pub use signal::DenseSignal;
