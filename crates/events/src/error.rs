//! Error types for the naiad-events crate.

/// Errors that can occur during event detection or signal expansion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EventError {
    /// The flood threshold is NaN, infinite, or negative.
    #[error("invalid threshold: {value} (must be finite and non-negative)")]
    InvalidThreshold {
        /// The rejected threshold value.
        value: f64,
    },

    /// A flow value in the input series is NaN or infinite.
    #[error("non-finite flow value at index {index}")]
    NonFiniteFlow {
        /// Position of the offending value in the flow series.
        index: usize,
    },

    /// A month value lies outside the calendar range.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The rejected month value.
        month: u8,
    },

    /// An event's covered days extend past the end of the series.
    #[error("event at index {index} with duration {duration} exceeds series length {len}")]
    EventOutOfRange {
        /// Start index of the offending event.
        index: usize,
        /// Duration of the offending event in days.
        duration: usize,
        /// Length of the series the event was expanded against.
        len: usize,
    },
}
