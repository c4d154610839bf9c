//! End-to-end scoring: series in, index series out.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use naiad_curve::Curve;
use naiad_events::EventConfig;
use naiad_io::RiverSeries;
use naiad_score::{ParameterBand, ScoreConfig, ScoreCurves, ScoreError, WeightProfile, score};

/// Helper: build a consecutive daily date sequence starting at (year, month, day).
fn make_dates(year: i32, month: u32, day: u32, n: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(n);
    let mut d = NaiveDate::from_ymd_opt(year, month, day).unwrap();
    for _ in 0..n {
        dates.push(d);
        d = d.succ_opt().unwrap();
    }
    dates
}

/// Helper: a 12-day January series with two flood pulses above 4.0 and a
/// constant groundwater level of 50.
fn reference_series() -> RiverSeries {
    let flow = vec![1.0, 2.0, 5.0, 6.0, 2.0, 3.0, 3.0, 7.0, 7.0, 8.0, 9.0, 0.0];
    let gw = vec![50.0; flow.len()];
    let dates = make_dates(2000, 1, 1, flow.len());
    RiverSeries::new(flow, gw, dates).expect("valid series")
}

/// Helper: identity-shaped curves so responses can be computed by hand.
///
/// Timing maps month m to m, duration and dry map days d to d, and the
/// groundwater curve maps level 0..100 onto 0..1.
fn identity_curves() -> ScoreCurves {
    let timing = Curve::new(vec![0.0, 12.0], vec![0.0, 12.0]).unwrap();
    let duration = Curve::new(vec![0.0, 10.0], vec![0.0, 10.0]).unwrap();
    let dry = Curve::new(vec![0.0, 10.0], vec![0.0, 10.0]).unwrap();
    let gwlevel = Curve::new(vec![0.0, 100.0], vec![0.0, 1.0]).unwrap();
    ScoreCurves::new(timing, duration, dry, gwlevel).expect("sorted curves")
}

/// Helper: detection parameters matching the reference series pulses.
fn reference_config() -> ScoreConfig {
    ScoreConfig::new().with_events(
        EventConfig::new()
            .with_threshold(4.0)
            .with_min_separation(0)
            .with_min_duration(2),
    )
}

// ---------------------------------------------------------------------------
// 1. reference_scoring
// ---------------------------------------------------------------------------
#[test]
fn reference_scoring() {
    let series = reference_series();
    let result = score(&series, &identity_curves(), &reference_config()).expect("score succeeds");

    // Events: (index 2, duration 2, dry 2) and (index 7, duration 4, dry 3).
    // Covered days: 0.5 * duration + 0.2 * month + 0.3 * dry.
    //   days 2-3:  0.5*2 + 0.2*1 + 0.3*2 = 1.8
    //   days 7-10: 0.5*4 + 0.2*1 + 0.3*3 = 3.1
    let expected_surface = [
        0.0, 0.0, 1.8, 1.8, 0.0, 0.0, 0.0, 3.1, 3.1, 3.1, 3.1, 0.0,
    ];
    assert_eq!(result.len(), 12);
    for (got, want) in result.surface_index().iter().zip(expected_surface.iter()) {
        assert_relative_eq!(got, want, epsilon = 1e-12);
    }

    // Groundwater level 50 on a 0..100 -> 0..1 curve.
    for &g in result.gwlevel_index() {
        assert_relative_eq!(g, 0.5, epsilon = 1e-12);
    }
}

// ---------------------------------------------------------------------------
// 2. blended_combines_indices
// ---------------------------------------------------------------------------
#[test]
fn blended_combines_indices() {
    let series = reference_series();
    let config = reference_config();
    let result = score(&series, &identity_curves(), &config).expect("score succeeds");

    let blended = result.blended(&config);
    // Even split of surface and groundwater indices.
    assert_relative_eq!(blended[0], 0.25, epsilon = 1e-12);
    assert_relative_eq!(blended[2], 1.15, epsilon = 1e-12);
    assert_relative_eq!(blended[7], 1.8, epsilon = 1e-12);
}

// ---------------------------------------------------------------------------
// 3. favour_duration_profile
// ---------------------------------------------------------------------------
#[test]
fn favour_duration_profile() {
    let series = reference_series();
    let config = WeightProfile::FavourDuration.apply(reference_config());
    let result = score(&series, &identity_curves(), &config).expect("score succeeds");

    // Day 2: 0.9*2 + 0.05*1 + 0.05*2 = 1.95
    assert_relative_eq!(result.surface_index()[2], 1.95, epsilon = 1e-12);
    // Day 7: 0.9*4 + 0.05*1 + 0.05*3 = 3.8
    assert_relative_eq!(result.surface_index()[7], 3.8, epsilon = 1e-12);
}

// ---------------------------------------------------------------------------
// 4. timing_uses_month_of_each_covered_day
// ---------------------------------------------------------------------------
#[test]
fn timing_uses_month_of_each_covered_day() {
    // One event spanning the January/February boundary.
    let flow = vec![0.0, 500.0, 500.0, 0.0];
    let gw = vec![0.0; 4];
    let dates = make_dates(2000, 1, 30, 4); // Jan 30, Jan 31, Feb 1, Feb 2
    let series = RiverSeries::new(flow, gw, dates).expect("valid series");

    // Score on timing alone, with a curve distinguishing the two months:
    // month 1 -> 0.0, month 2 -> 1.0.
    let timing = Curve::new(vec![1.0, 2.0], vec![0.0, 1.0]).unwrap();
    let duration = Curve::new(vec![0.0, 10.0], vec![0.0, 10.0]).unwrap();
    let dry = Curve::new(vec![0.0, 10.0], vec![0.0, 10.0]).unwrap();
    let gwlevel = Curve::new(vec![0.0, 1.0], vec![0.0, 1.0]).unwrap();
    let curves = ScoreCurves::new(timing, duration, dry, gwlevel).unwrap();

    let config = ScoreConfig::new()
        .with_surface_weights(0.0, 1.0, 0.0)
        .with_events(
            EventConfig::new()
                .with_threshold(300.0)
                .with_min_separation(1)
                .with_min_duration(2),
        );

    let result = score(&series, &curves, &config).expect("score succeeds");

    // The January day of the event scores 0, the February day scores 1.
    let expected = [0.0, 0.0, 1.0, 0.0];
    for (got, want) in result.surface_index().iter().zip(expected.iter()) {
        assert_relative_eq!(got, want, epsilon = 1e-12);
    }
}

// ---------------------------------------------------------------------------
// 5. strict_band_scores_zero_surface
// ---------------------------------------------------------------------------
#[test]
fn strict_band_scores_zero_surface() {
    let series = reference_series();
    // The Max band threshold (800) is far above every flow value.
    let config = ScoreConfig::new().with_events(ParameterBand::Max.event_config());
    let result = score(&series, &identity_curves(), &config).expect("score succeeds");

    assert!(result.surface_index().iter().all(|&v| v == 0.0));
    // The groundwater index is unaffected by event detection.
    for &g in result.gwlevel_index() {
        assert_relative_eq!(g, 0.5, epsilon = 1e-12);
    }
}

// ---------------------------------------------------------------------------
// 6. invalid_weights_fail_fast
// ---------------------------------------------------------------------------
#[test]
fn invalid_weights_fail_fast() {
    let series = reference_series();
    let config = reference_config().with_surface_weights(0.5, 0.2, 0.2);

    let result = score(&series, &identity_curves(), &config);
    assert!(matches!(
        result,
        Err(ScoreError::WeightSum {
            weights: "surface",
            ..
        })
    ));
}

// ---------------------------------------------------------------------------
// 7. empty_series_scores_empty
// ---------------------------------------------------------------------------
#[test]
fn empty_series_scores_empty() {
    let series = RiverSeries::new(vec![], vec![], vec![]).expect("empty series is valid");
    let result = score(&series, &identity_curves(), &ScoreConfig::new()).expect("score succeeds");

    assert!(result.is_empty());
    assert!(result.surface_index().is_empty());
    assert!(result.gwlevel_index().is_empty());
}
