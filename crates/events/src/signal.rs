//! Day-aligned event attribute signals.

/// Per-day event attributes expanded from a set of flood events.
///
/// Each vector has one entry per day of the source flow series. Days not
/// covered by any event hold zero; days covered by an event hold that
/// event's attributes.
#[derive(Debug, Clone)]
pub struct DenseSignal {
    /// Calendar month (1-12) of each covered day, 0.0 elsewhere.
    timing: Vec<f64>,
    /// Duration in days of the covering event, 0.0 elsewhere.
    duration: Vec<f64>,
    /// Dry spell in days preceding the covering event, 0.0 elsewhere.
    dry: Vec<f64>,
}

impl DenseSignal {
    pub(crate) fn new(timing: Vec<f64>, duration: Vec<f64>, dry: Vec<f64>) -> Self {
        Self {
            timing,
            duration,
            dry,
        }
    }

    /// Returns the per-day event timing signal.
    pub fn timing(&self) -> &[f64] {
        &self.timing
    }

    /// Returns the per-day event duration signal.
    pub fn duration(&self) -> &[f64] {
        &self.duration
    }

    /// Returns the per-day preceding dry spell signal.
    pub fn dry(&self) -> &[f64] {
        &self.dry
    }

    /// Returns the number of days covered by the signals.
    pub fn len(&self) -> usize {
        self.timing.len()
    }

    /// Returns `true` if the signals cover no days.
    pub fn is_empty(&self) -> bool {
        self.timing.is_empty()
    }

    /// Consumes the signal, returning `(timing, duration, dry)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.timing, self.duration, self.dry)
    }
}
