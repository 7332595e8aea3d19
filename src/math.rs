//! Angle and float utilities shared by the time and position calculations.
//!
//! Every transcendental goes through a wrapper so the same code builds against
//! `std` or, for `no_std` targets, against `libm`.

#![allow(clippy::many_single_char_names)]

#[cfg(not(feature = "std"))]
use libm;

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// One full turn in radians.
pub const TAU: f64 = core::f64::consts::TAU;

/// Converts degrees to radians.
#[inline]
#[must_use]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
#[must_use]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Normalizes an angle in degrees to the range [0, 360).
#[must_use]
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    wrap_remainder(degrees % 360.0, 360.0)
}

/// Normalizes an angle in radians to the range [0, 2π).
#[must_use]
pub fn normalize_radians_0_to_2pi(radians: f64) -> f64 {
    wrap_remainder(radians % TAU, TAU)
}

/// Shifts a negative remainder into [0, period).
///
/// Tiny negative remainders round up to exactly `period` when shifted; those map to 0.
fn wrap_remainder(remainder: f64, period: f64) -> f64 {
    if remainder < 0.0 {
        let wrapped = remainder + period;
        if wrapped < period { wrapped } else { 0.0 }
    } else {
        remainder
    }
}

/// Computes a polynomial using Horner's method.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
///
/// Multiply and add are kept separate (no FMA) so that segment values which
/// are rounded afterwards land on the same side of a rounding boundary as the
/// published tables.
#[must_use]
pub fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    let mut result = last;
    for &coeff in coeffs.iter().rev().skip(1) {
        result = result * x + coeff;
    }
    result
}

/// Rounds to `decimals` places, with ties going towards positive infinity.
///
/// This is `floor(x·10ⁿ + 0.5) / 10ⁿ`, the behaviour of the classic
/// `Math.round(x * 10) / 10` idiom, which differs from [`f64::round`] for
/// negative ties.
#[must_use]
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = powi(10.0, decimals);
    floor(value * scale + 0.5) / scale
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Computes x^n for integer n.
#[inline]
pub fn powi(x: f64, n: i32) -> f64 {
    #[cfg(feature = "std")]
    return x.powi(n);

    #[cfg(not(feature = "std"))]
    return libm::pow(x, f64::from(n));
}
