//! Easing Library Tests
//!
//! Tests for:
//! - In/Out/InOut direction identities and endpoint values
//! - Stepped easing interval table and out-of-range clamping
//! - Parameterized curves (back, elastic, bounce)
//! - Name-based lookup and its failure modes
//! - Periodic helpers (linear_wave, linear_interval)

use marionette::easing::{self, ease, Direction, Easing};
use marionette::errors::MarionetteError;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_loose(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

// ============================================================================
// Direction identities
// ============================================================================

#[test]
fn out_is_mirrored_in() {
    // out(f)(t) == 1 - f(1 - t) for every base curve
    let pairs = [
        (Easing::Quad(Direction::In), Easing::Quad(Direction::Out)),
        (Easing::Cubic(Direction::In), Easing::Cubic(Direction::Out)),
        (Easing::Quart(Direction::In), Easing::Quart(Direction::Out)),
        (Easing::Quint(Direction::In), Easing::Quint(Direction::Out)),
        (Easing::Sine(Direction::In), Easing::Sine(Direction::Out)),
        (Easing::Expo(Direction::In), Easing::Expo(Direction::Out)),
        (Easing::Circ(Direction::In), Easing::Circ(Direction::Out)),
    ];

    for (ease_in, ease_out) in pairs {
        for i in 0..=10 {
            let t = i as f32 * 0.1;
            let expected = 1.0 - ease_in.apply(1.0 - t);
            let got = ease_out.apply(t);
            assert!(
                approx(got, expected),
                "{ease_out:?} at t={t}: expected {expected}, got {got}"
            );
        }
    }
}

#[test]
fn in_out_endpoints() {
    let curves = [
        Easing::Quad(Direction::InOut),
        Easing::Cubic(Direction::InOut),
        Easing::Quart(Direction::InOut),
        Easing::Quint(Direction::InOut),
        Easing::Sine(Direction::InOut),
        // Expo is only asymptotically 0/1 at the endpoints (2^-10 residue)
        Easing::Expo(Direction::InOut),
        Easing::Circ(Direction::InOut),
        Easing::Back { direction: Direction::InOut, overshoot: easing::DEFAULT_OVERSHOOT },
        Easing::Elastic { direction: Direction::InOut, bounciness: 1.0 },
    ];

    for curve in curves {
        assert!(
            approx_loose(curve.apply(0.0), 0.0),
            "{curve:?} at 0: got {}",
            curve.apply(0.0)
        );
        assert!(
            approx_loose(curve.apply(1.0), 1.0),
            "{curve:?} at 1: got {}",
            curve.apply(1.0)
        );
    }
}

#[test]
fn in_out_is_half_scale() {
    // in_out(f)(t) == f(2t)/2 below the midpoint
    let quad_in = Easing::Quad(Direction::In);
    let quad_in_out = Easing::Quad(Direction::InOut);
    for i in 0..5 {
        let t = i as f32 * 0.1;
        let expected = quad_in.apply(2.0 * t) / 2.0;
        assert!(approx(quad_in_out.apply(t), expected), "t={t}");
    }
    // and mirrored above it
    assert!(approx(quad_in_out.apply(0.75), 1.0 - quad_in.apply(0.5) / 2.0));
}

#[test]
fn linear_is_identity() {
    for i in 0..=10 {
        let t = i as f32 * 0.1;
        assert!(approx(Easing::Linear.apply(t), t));
    }
}

// ============================================================================
// Stepped easing
// ============================================================================

#[test]
fn stepped_interval_table() {
    let step = Easing::step(4).unwrap();
    assert!(approx(step.apply(0.0), 0.0));
    assert!(approx(step.apply(0.1), 0.0));
    assert!(approx(step.apply(0.25), 0.25));
    assert!(approx(step.apply(0.3), 0.25));
    assert!(approx(step.apply(0.5), 0.5));
    assert!(approx(step.apply(0.6), 0.5));
    assert!(approx(step.apply(0.8), 0.75));
    assert!(approx(step.apply(1.0), 0.75));
}

#[test]
fn stepped_clamps_out_of_range() {
    let step = Easing::step(4).unwrap();
    assert!(approx(step.apply(-1.0), 0.0), "below range clamps to first boundary");
    assert!(approx(step.apply(2.0), 0.75), "above range clamps to last boundary");
}

#[test]
fn stepped_two_steps() {
    let step = Easing::step(2).unwrap();
    assert!(approx(step.apply(0.25), 0.0));
    assert!(approx(step.apply(0.75), 0.5));
}

#[test]
fn stepped_rejects_small_counts() {
    assert!(matches!(
        Easing::step(1),
        Err(MarionetteError::InvalidParameter(_))
    ));
    assert!(matches!(
        Easing::step(0),
        Err(MarionetteError::InvalidParameter(_))
    ));
}

// ============================================================================
// Parameterized curves
// ============================================================================

#[test]
fn back_overshoots_below_zero() {
    let back = Easing::Back {
        direction: Direction::In,
        overshoot: easing::DEFAULT_OVERSHOOT,
    };
    // t²((s+1)t - s) at t=0.5
    let expected = 0.25 * (2.701_58 * 0.5 - 1.701_58);
    assert!(approx(back.apply(0.5), expected), "got {}", back.apply(0.5));
    assert!(back.apply(0.5) < 0.0, "back easing dips below zero mid-curve");
}

#[test]
fn elastic_hits_endpoints() {
    let elastic = Easing::Elastic {
        direction: Direction::In,
        bounciness: 2.0,
    };
    assert!(approx(elastic.apply(0.0), 0.0));
    assert!(approx(elastic.apply(1.0), 1.0));
}

#[test]
fn bounce_starts_at_zero() {
    let bounce = Easing::Bounce {
        direction: Direction::In,
        bounciness: 0.5,
    };
    assert!(approx(bounce.apply(0.0), 0.0));
    // First parabola segment dominates near the origin
    assert!(approx(bounce.apply(0.1), (121.0 / 16.0) * 0.01));
}

// ============================================================================
// Name-based lookup
// ============================================================================

#[test]
fn lookup_by_name() {
    assert_eq!("linear".parse::<Easing>().unwrap(), Easing::Linear);
    assert_eq!(
        "easeOutQuad".parse::<Easing>().unwrap(),
        Easing::Quad(Direction::Out)
    );
    assert_eq!(
        "easeInOutExpo".parse::<Easing>().unwrap(),
        Easing::Expo(Direction::InOut)
    );
    assert_eq!(
        "easeInCubic".parse::<Easing>().unwrap(),
        Easing::Cubic(Direction::In)
    );
}

#[test]
fn lookup_unknown_name_fails() {
    assert!(matches!(
        "easeInOutBogus".parse::<Easing>(),
        Err(MarionetteError::UnknownEasing(_))
    ));
    assert!(matches!(
        ease("swoosh", 0.5),
        Err(MarionetteError::UnknownEasing(_))
    ));
}

#[test]
fn ease_evaluates_named_curve() {
    // easeOutQuad(0.25) = 1 - (0.75)^2
    let val = ease("easeOutQuad", 0.25).unwrap();
    assert!(approx(val, 0.4375), "got {val}");
    let val = ease("easeInOutExpo", 0.5).unwrap();
    assert!(approx(val, 0.5), "got {val}");
}

// ============================================================================
// Periodic helpers
// ============================================================================

#[test]
fn linear_wave_period_and_shape() {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    assert!(approx_loose(easing::linear_wave(0.0), 0.0));
    assert!(approx_loose(easing::linear_wave(FRAC_PI_2), 0.5));
    assert!(approx_loose(easing::linear_wave(PI - 0.1), 1.0 - 0.1 / PI));

    for i in 0..20 {
        let t = i as f32 * 0.7 - 5.0;
        let a = easing::linear_wave(t);
        let b = easing::linear_wave(t + TAU);
        assert!(approx_loose(a, b), "period mismatch at t={t}: {a} vs {b}");
    }
}

#[test]
fn linear_wave_bounded_for_negative_inputs() {
    // Regression: startup formulas feed slightly negative times
    for i in 0..100 {
        let t = -(i as f32) * 37.5;
        let v = easing::linear_wave(t);
        assert!((0.0..=1.0).contains(&v), "t={t}: out of range {v}");
    }
}

#[test]
fn linear_interval_ramps_near_boundaries() {
    assert!(approx(easing::linear_interval(0.5, 16.0), 0.5));
    assert!(approx(easing::linear_interval(0.0, 16.0), 1.0));
    assert!(approx(easing::linear_interval(8.0, 16.0), 0.0));
    assert!(approx(easing::linear_interval(15.5, 16.0), 0.5));
    assert!(approx(easing::linear_interval(1.0, 16.0), 0.0));
}
