//! Scalar helpers.
//!
//! # Usage
//!
//! ```rust
//! use okpick_math::fract;
//!
//! assert!((fract(1.75) - 0.75).abs() < 1e-12);
//! ```

/// Clamps a value to [0, 1].
///
/// # Example
///
/// ```rust
/// use okpick_math::saturate;
///
/// assert_eq!(saturate(-0.5), 0.0);
/// assert_eq!(saturate(1.5), 1.0);
/// ```
#[inline]
pub fn saturate(value: f64) -> f64 {
    value.max(0.0).min(1.0)
}

/// Fractional part: `x - floor(x)`, always in [0, 1).
///
/// Used to wrap hues.
#[inline]
pub fn fract(x: f64) -> f64 {
    x - x.floor()
}

/// Sign function.
///
/// Returns -1 for negative, 0 for zero, 1 for positive.
#[inline]
pub fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Sample position of pixel `i` in a row of `n` pixels, mapped to [0, 1].
///
/// The first pixel maps to 0 and the last to 1.
#[inline]
pub fn sample_position(i: u32, n: u32) -> f64 {
    if n <= 1 { 0.0 } else { i as f64 / (n - 1) as f64 }
}
