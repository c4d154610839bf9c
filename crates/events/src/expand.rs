//! Expansion of sparse event lists into day-aligned signals.

use tracing::debug;

use crate::detect::FloodEvent;
use crate::error::EventError;
use crate::signal::DenseSignal;

/// Expands a sparse event list into per-day attribute signals.
///
/// Produces three signals aligned with `months`, one entry per day. For
/// every day covered by an event, the timing signal holds that day's own
/// calendar month, while the duration and dry-spell signals hold the
/// covering event's attributes. Days covered by no event hold zero. When
/// events overlap, the later event in the list wins.
///
/// # Arguments
///
/// * `events` - Detected flood events, typically from [`detect_events`].
/// * `months` - 1-indexed calendar month of each day in the source series.
///
/// # Errors
///
/// Returns [`EventError::InvalidMonth`] if any month lies outside 1..=12,
/// or [`EventError::EventOutOfRange`] if an event's covered days extend
/// past the end of `months`.
///
/// [`detect_events`]: crate::detect::detect_events
pub fn expand_events(events: &[FloodEvent], months: &[u8]) -> Result<DenseSignal, EventError> {
    // --- Validation ---
    for &m in months {
        if !(1..=12).contains(&m) {
            return Err(EventError::InvalidMonth { month: m });
        }
    }

    let n = months.len();
    let mut timing = vec![0.0; n];
    let mut duration = vec![0.0; n];
    let mut dry = vec![0.0; n];

    for event in events {
        let end = event.index.saturating_add(event.duration);
        if end > n {
            return Err(EventError::EventOutOfRange {
                index: event.index,
                duration: event.duration,
                len: n,
            });
        }
        for day in event.index..end {
            timing[day] = months[day] as f64;
            duration[day] = event.duration as f64;
            dry[day] = event.preceding_dry as f64;
        }
    }

    debug!(n_days = n, n_events = events.len(), "expanded event signals");

    Ok(DenseSignal::new(timing, duration, dry))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_events_yield_zero_signals() {
        let signal = expand_events(&[], &[1, 1, 2]).unwrap();
        assert_eq!(signal.timing(), &[0.0, 0.0, 0.0]);
        assert_eq!(signal.duration(), &[0.0, 0.0, 0.0]);
        assert_eq!(signal.dry(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn timing_tracks_each_covered_day() {
        // Event spans a month boundary: covered days keep their own month.
        let months = vec![1u8, 1, 2, 2, 3];
        let events = vec![FloodEvent {
            index: 1,
            duration: 3,
            preceding_dry: 2,
        }];
        let signal = expand_events(&events, &months).unwrap();
        assert_eq!(signal.timing(), &[0.0, 1.0, 2.0, 2.0, 0.0]);
        assert_eq!(signal.duration(), &[0.0, 3.0, 3.0, 3.0, 0.0]);
        assert_eq!(signal.dry(), &[0.0, 2.0, 2.0, 2.0, 0.0]);
    }

    #[test]
    fn later_events_overwrite_overlap() {
        let months = vec![1u8; 6];
        let events = vec![
            FloodEvent {
                index: 1,
                duration: 4,
                preceding_dry: 2,
            },
            FloodEvent {
                index: 3,
                duration: 2,
                preceding_dry: 1,
            },
        ];
        let signal = expand_events(&events, &months).unwrap();
        assert_eq!(signal.duration(), &[0.0, 4.0, 4.0, 2.0, 2.0, 0.0]);
        assert_eq!(signal.dry(), &[0.0, 2.0, 2.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn invalid_month_error() {
        // Month 0
        let result = expand_events(&[], &[1, 0, 2]);
        assert!(matches!(result, Err(EventError::InvalidMonth { month: 0 })));
        // Month 13
        let result = expand_events(&[], &[13]);
        assert!(matches!(result, Err(EventError::InvalidMonth { month: 13 })));
    }

    #[test]
    fn event_out_of_range_error() {
        let months = vec![1u8, 1, 1, 1];
        let events = vec![FloodEvent {
            index: 3,
            duration: 5,
            preceding_dry: 1,
        }];
        let result = expand_events(&events, &months);
        assert!(matches!(
            result,
            Err(EventError::EventOutOfRange {
                index: 3,
                duration: 5,
                len: 4,
            })
        ));
    }

    #[test]
    fn empty_series_and_events() {
        let signal = expand_events(&[], &[]).unwrap();
        assert!(signal.is_empty());
    }
}
