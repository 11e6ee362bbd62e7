//! Scalar helpers shared by pose formulas.

/// Linear interpolation between `a` and `b`.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Logistic curve through the origin, saturating at `±range`.
///
/// `coef` controls the steepness: values close to 1 give a nearly linear
/// response, values near 0 (or very large) saturate quickly.
#[must_use]
pub fn sigmoid(value: f32, range: f32, coef: f32) -> f32 {
    (range * 2.0) / (1.0 + coef.powf(-value)) - range
}
