//! Easing Library
//!
//! Pure shaping functions mapping a normalized progress value to a curved
//! progress value. Every curve comes in `In`, `Out` and `InOut` variants,
//! derived from one base function:
//!
//! - `out(f)(t) = 1 - f(1 - t)`
//! - `in_out(f)(t) = f(2t) / 2` for `t < 0.5`, else `1 - f(2(1 - t)) / 2`
//!
//! Inputs are typically in `[0, 1]` but are not clamped internally; feeding
//! values outside that range produces whatever the underlying formula does.
//!
//! Besides the classic curves the module carries two periodic helpers used by
//! idle-motion formulas: [`linear_wave`] (a triangle wave in `[0, 1]` with
//! period 2π) and [`linear_interval`] (a sawtooth that is zero in the
//! interior of each period and ramps near its boundaries).
//!
//! Easings can be resolved by name (`"easeInOutExpo"`) for configuration
//! driven setups, or constructed directly as [`Easing`] values.

use std::str::FromStr;

use crate::errors::{MarionetteError, Result};

/// Default overshoot for [`Easing::Back`], the classic value.
pub const DEFAULT_OVERSHOOT: f32 = 1.701_58;

/// Default bounciness for [`Easing::Elastic`].
pub const DEFAULT_BOUNCINESS: f32 = 1.0;

/// Default bounciness for [`Easing::Bounce`].
pub const DEFAULT_BOUNCE: f32 = 0.5;

/// Which end of the curve is shaped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    In,
    Out,
    InOut,
}

/// A fully specified easing curve.
///
/// Parameterized variants carry their shape parameter inline so an `Easing`
/// value is self-contained and `Copy`. Construct [`Easing::Step`] through
/// [`Easing::step`], which rejects step counts below 2.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// Staircase over `steps` equal intervals of `[0, 1]`.
    Step { steps: usize },
    Quad(Direction),
    Cubic(Direction),
    Quart(Direction),
    Quint(Direction),
    Sine(Direction),
    Expo(Direction),
    Circ(Direction),
    /// Overshooting cubic, `t²((s+1)t - s)`.
    Back { direction: Direction, overshoot: f32 },
    /// Damped oscillation, `1 - cos³(tπ/2)·cos(t·b·π)`.
    Elastic { direction: Direction, bounciness: f32 },
    /// Min of four parabola segments.
    Bounce { direction: Direction, bounciness: f32 },
}

impl Easing {
    /// Creates a stepped easing, validating the step count.
    pub fn step(steps: usize) -> Result<Self> {
        if steps < 2 {
            return Err(MarionetteError::InvalidParameter(format!(
                "step count must be >= 2, got {steps}"
            )));
        }
        Ok(Self::Step { steps })
    }

    /// Evaluates the curve at `t`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            // step() guarantees >= 2; max(2) covers hand-built variants
            Self::Step { steps } => step_value(steps.max(2), t),
            Self::Quad(d) => shape(d, quad, t),
            Self::Cubic(d) => shape(d, cubic, t),
            Self::Quart(d) => shape(d, |t| poly(4.0, t), t),
            Self::Quint(d) => shape(d, |t| poly(5.0, t), t),
            Self::Sine(d) => shape(d, sine, t),
            Self::Expo(d) => shape(d, expo, t),
            Self::Circ(d) => shape(d, circ, t),
            Self::Back { direction, overshoot } => shape(direction, |t| back(overshoot, t), t),
            Self::Elastic { direction, bounciness } => {
                shape(direction, |t| elastic(bounciness, t), t)
            }
            Self::Bounce { direction, bounciness } => {
                shape(direction, |t| bounce(bounciness, t), t)
            }
        }
    }
}

/// Resolves an easing by its conventional name and evaluates it at `t`.
///
/// Parameterized curves get their default shape parameters; construct an
/// [`Easing`] value directly to override them.
pub fn ease(name: &str, t: f32) -> Result<f32> {
    Ok(name.parse::<Easing>()?.apply(t))
}

impl FromStr for Easing {
    type Err = MarionetteError;

    /// Parses names like `"linear"`, `"step"`, `"easeInQuad"` or
    /// `"easeInOutElastic"`.
    fn from_str(name: &str) -> Result<Self> {
        match name {
            "linear" => return Ok(Self::Linear),
            "step" => return Ok(Self::Step { steps: 2 }),
            _ => {}
        }

        // "easeInOut" must be peeled off before "easeIn".
        let (direction, curve) = if let Some(rest) = name.strip_prefix("easeInOut") {
            (Direction::InOut, rest)
        } else if let Some(rest) = name.strip_prefix("easeOut") {
            (Direction::Out, rest)
        } else if let Some(rest) = name.strip_prefix("easeIn") {
            (Direction::In, rest)
        } else {
            return Err(MarionetteError::UnknownEasing(name.to_string()));
        };

        match curve {
            "Quad" => Ok(Self::Quad(direction)),
            "Cubic" => Ok(Self::Cubic(direction)),
            "Quart" => Ok(Self::Quart(direction)),
            "Quint" => Ok(Self::Quint(direction)),
            "Sine" => Ok(Self::Sine(direction)),
            "Expo" => Ok(Self::Expo(direction)),
            "Circ" => Ok(Self::Circ(direction)),
            "Back" => Ok(Self::Back { direction, overshoot: DEFAULT_OVERSHOOT }),
            "Elastic" => Ok(Self::Elastic { direction, bounciness: DEFAULT_BOUNCINESS }),
            "Bounce" => Ok(Self::Bounce { direction, bounciness: DEFAULT_BOUNCE }),
            _ => Err(MarionetteError::UnknownEasing(name.to_string())),
        }
    }
}

// ============================================================================
// Direction wrappers
// ============================================================================

fn shape(direction: Direction, f: impl Fn(f32) -> f32, t: f32) -> f32 {
    match direction {
        Direction::In => f(t),
        Direction::Out => 1.0 - f(1.0 - t),
        Direction::InOut => {
            if t < 0.5 {
                f(2.0 * t) / 2.0
            } else {
                1.0 - f(2.0 * (1.0 - t)) / 2.0
            }
        }
    }
}

// ============================================================================
// Base curves
// ============================================================================

fn quad(t: f32) -> f32 {
    t * t
}

fn cubic(t: f32) -> f32 {
    t * t * t
}

fn poly(n: f32, t: f32) -> f32 {
    t.powf(n)
}

fn sine(t: f32) -> f32 {
    1.0 - (t * std::f32::consts::FRAC_PI_2).cos()
}

fn expo(t: f32) -> f32 {
    2.0_f32.powf(10.0 * (t - 1.0))
}

fn circ(t: f32) -> f32 {
    1.0 - (1.0 - t * t).sqrt()
}

fn back(overshoot: f32, t: f32) -> f32 {
    t * t * ((overshoot + 1.0) * t - overshoot)
}

fn elastic(bounciness: f32, t: f32) -> f32 {
    let p = bounciness * std::f32::consts::PI;
    1.0 - (t * std::f32::consts::FRAC_PI_2).cos().powi(3) * (t * p).cos()
}

fn bounce(k: f32, t: f32) -> f32 {
    let q = (121.0 / 16.0) * t * t;
    let w = (121.0 / 4.0) * k * (t - 6.0 / 11.0).powi(2) + 1.0 - k;
    let r = 121.0 * k * k * (t - 9.0 / 11.0).powi(2) + 1.0 - k * k;
    let s = 484.0 * k * k * k * (t - 10.5 / 11.0).powi(2) + 1.0 - k * k * k;
    q.min(w).min(r).min(s)
}

// ============================================================================
// Stepped easing
// ============================================================================

/// Left edge of the interval containing `t`, over `steps` equal intervals.
///
/// Bisection over the interval boundaries; inputs below the first boundary
/// clamp to it and inputs above the last clamp to the last, so the search
/// itself never runs off the table.
fn step_value(steps: usize, t: f32) -> f32 {
    let boundary = |i: usize| i as f32 / steps as f32;
    let last = steps - 1;

    if t < boundary(0) {
        return boundary(0);
    }
    if t > boundary(last) {
        return boundary(last);
    }

    let mut left = 0;
    let mut right = last;
    while right - left != 1 {
        let mid = left + (right - left) / 2;
        if t >= boundary(mid) {
            left = mid;
        } else {
            right = mid;
        }
    }
    boundary(left)
}

// ============================================================================
// Periodic helpers
// ============================================================================

/// Triangle wave in `[0, 1]` with period 2π.
///
/// The input is offset by 600π (a large even multiple of π lands the fold on
/// the same phase) so that moderately negative times, as seen right after
/// startup, stay inside the `abs`/modulo fold instead of producing a phase
/// flip.
#[must_use]
pub fn linear_wave(t: f32) -> f32 {
    let t = t + std::f32::consts::PI * 600.0;
    let a = t.abs();
    if a % std::f32::consts::TAU > std::f32::consts::PI {
        (-(a % std::f32::consts::PI) / std::f32::consts::PI + 1.0).clamp(0.0, 1.0)
    } else {
        ((a % std::f32::consts::PI) / std::f32::consts::PI).clamp(0.0, 1.0)
    }
}

/// Sawtooth over period `i`: zero in the interior of each period, ramping
/// from 1 down at the start and back up to 1 within the final unit.
///
/// Used to produce occasional pulses (blinks) out of a continuously running
/// clock.
#[must_use]
pub fn linear_interval(t: f32, i: f32) -> f32 {
    let m = t % i;
    if m > i - 1.0 {
        m - i + 1.0
    } else if m < 1.0 {
        -m + 1.0
    } else {
        0.0
    }
}
