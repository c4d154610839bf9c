//! Response curve set for scoring.

use naiad_curve::Curve;

use crate::error::ScoreError;

/// The four response curves consumed by the scoring pipeline.
///
/// Interpolation requires each curve's x axis to ascend, so construction
/// checks sortedness up front and names the offending curve on failure.
#[derive(Debug, Clone)]
pub struct ScoreCurves {
    timing: Curve,
    duration: Curve,
    dry: Curve,
    gwlevel: Curve,
}

impl ScoreCurves {
    /// Creates a curve set after checking each curve is sorted by ascending x.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::UnsortedCurve`] naming the first curve whose
    /// x axis is out of order.
    pub fn new(
        timing: Curve,
        duration: Curve,
        dry: Curve,
        gwlevel: Curve,
    ) -> Result<Self, ScoreError> {
        for (name, curve) in [
            ("timing", &timing),
            ("duration", &duration),
            ("dry", &dry),
            ("gwlevel", &gwlevel),
        ] {
            if !curve.is_sorted() {
                return Err(ScoreError::UnsortedCurve { curve: name });
            }
        }
        Ok(Self {
            timing,
            duration,
            dry,
            gwlevel,
        })
    }

    /// Returns the event timing response curve.
    pub fn timing(&self) -> &Curve {
        &self.timing
    }

    /// Returns the event duration response curve.
    pub fn duration(&self) -> &Curve {
        &self.duration
    }

    /// Returns the dry-spell response curve.
    pub fn dry(&self) -> &Curve {
        &self.dry
    }

    /// Returns the groundwater level response curve.
    pub fn gwlevel(&self) -> &Curve {
        &self.gwlevel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(y0: f64) -> Curve {
        Curve::new(vec![0.0, 1.0], vec![y0, 1.0]).expect("valid curve")
    }

    fn unsorted() -> Curve {
        Curve::new(vec![2.0, 1.0], vec![0.0, 1.0]).expect("valid curve")
    }

    #[test]
    fn new_ok() {
        let curves = ScoreCurves::new(sorted(0.1), sorted(0.2), sorted(0.3), sorted(0.4))
            .expect("all sorted");
        assert_eq!(curves.timing().y()[0], 0.1);
        assert_eq!(curves.duration().y()[0], 0.2);
        assert_eq!(curves.dry().y()[0], 0.3);
        assert_eq!(curves.gwlevel().y()[0], 0.4);
    }

    #[test]
    fn unsorted_timing_named() {
        let result = ScoreCurves::new(unsorted(), sorted(0.0), sorted(0.0), sorted(0.0));
        assert!(matches!(
            result,
            Err(ScoreError::UnsortedCurve { curve: "timing" })
        ));
    }

    #[test]
    fn unsorted_duration_named() {
        let result = ScoreCurves::new(sorted(0.0), unsorted(), sorted(0.0), sorted(0.0));
        assert!(matches!(
            result,
            Err(ScoreError::UnsortedCurve { curve: "duration" })
        ));
    }

    #[test]
    fn unsorted_dry_named() {
        let result = ScoreCurves::new(sorted(0.0), sorted(0.0), unsorted(), sorted(0.0));
        assert!(matches!(
            result,
            Err(ScoreError::UnsortedCurve { curve: "dry" })
        ));
    }

    #[test]
    fn unsorted_gwlevel_named() {
        let result = ScoreCurves::new(sorted(0.0), sorted(0.0), sorted(0.0), unsorted());
        assert!(matches!(
            result,
            Err(ScoreError::UnsortedCurve { curve: "gwlevel" })
        ));
    }
}
