//! Nutation in longitude and obliquity, and the obliquity of the ecliptic.
//!
//! Meeus chapter 22: the IAU 1980 series for Δψ and Δε, and Laskar's
//! polynomial for the mean obliquity ε₀ (valid for ±10,000 years around J2000).

#![allow(clippy::unreadable_literal)]

use super::coefficients::NUTATION_TERMS;
use crate::math::{cos, degrees_to_radians, normalize_degrees_0_to_360, polynomial, sin};
use crate::time::{DAYS_PER_CENTURY, J2000_JDN};

/// Table units (0.0001″) per degree.
const TABLE_UNITS_PER_DEGREE: f64 = 36_000_000.0;

/// Laskar's mean obliquity polynomial in arcseconds, in powers of U = T/100.
const MEAN_OBLIQUITY_ARCSEC: [f64; 11] = [
    84381.448, -4680.93, -1.55, 1999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
];

/// One periodic term of the nutation series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutationTerm {
    /// Integer multipliers of D, M, M′, F and Ω
    pub multipliers: [i8; 5],
    /// Sine coefficient for Δψ (0.0001″)
    pub longitude_sine: f64,
    /// Rate of the sine coefficient per Julian century
    pub longitude_sine_rate: f64,
    /// Cosine coefficient for Δε (0.0001″)
    pub obliquity_cosine: f64,
    /// Rate of the cosine coefficient per Julian century
    pub obliquity_cosine_rate: f64,
}

impl NutationTerm {
    /// Creates a nutation term.
    #[must_use]
    pub const fn new(
        multipliers: [i8; 5],
        longitude_sine: f64,
        longitude_sine_rate: f64,
        obliquity_cosine: f64,
        obliquity_cosine_rate: f64,
    ) -> Self {
        Self {
            multipliers,
            longitude_sine,
            longitude_sine_rate,
            obliquity_cosine,
            obliquity_cosine_rate,
        }
    }

    /// Argument of this term in degrees.
    fn argument(&self, args: &FundamentalArguments) -> f64 {
        let [d, m, m_prime, f, omega] = self.multipliers.map(f64::from);
        d * args.d + m * args.m + m_prime * args.m_prime + f * args.f + omega * args.omega
    }
}

/// Fundamental arguments of the nutation theory, in degrees within [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundamentalArguments {
    /// Mean elongation of the Moon from the Sun
    pub d: f64,
    /// Mean anomaly of the Sun
    pub m: f64,
    /// Mean anomaly of the Moon
    pub m_prime: f64,
    /// Moon's argument of latitude
    pub f: f64,
    /// Longitude of the ascending node of the Moon's mean orbit
    pub omega: f64,
}

impl FundamentalArguments {
    /// Evaluates the arguments at `t` Julian centuries from J2000.0.
    #[must_use]
    pub fn at(t: f64) -> Self {
        Self {
            d: normalize_degrees_0_to_360(
                297.85036 + t * (445267.111480 + t * (-0.0019142 + t / 189474.0)),
            ),
            m: normalize_degrees_0_to_360(
                357.52772 + t * (35999.050340 + t * (-0.0001603 - t / 300000.0)),
            ),
            m_prime: normalize_degrees_0_to_360(
                134.96298 + t * (477198.867398 + t * (0.0086972 + t / 56250.0)),
            ),
            f: normalize_degrees_0_to_360(
                93.27191 + t * (483202.017538 + t * (-0.0036825 + t / 327270.0)),
            ),
            omega: normalize_degrees_0_to_360(
                125.04452 + t * (-1934.136261 + t * (0.0020708 + t / 450000.0)),
            ),
        }
    }
}

/// Nutation and the true obliquity of the ecliptic, all in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nutation {
    /// Nutation in longitude (Δψ)
    pub delta_psi: f64,
    /// Nutation in obliquity (Δε)
    pub delta_epsilon: f64,
    /// True obliquity of the ecliptic (ε = ε₀ + Δε)
    pub epsilon: f64,
}

/// Mean obliquity of the ecliptic ε₀ in degrees.
#[must_use]
pub fn mean_obliquity(jde: f64) -> f64 {
    let u = centuries_since_j2000(jde) / 100.0;
    polynomial(&MEAN_OBLIQUITY_ARCSEC, u) / 3600.0
}

/// Computes nutation and true obliquity with the built-in IAU 1980 series.
///
/// # Example
/// ```
/// # use meeus_sun::meeus::nutation::nutation_and_obliquity;
/// // Meeus, example 22.a
/// let nutation = nutation_and_obliquity(2_446_895.5);
/// assert!((nutation.delta_psi * 3600.0 + 3.788).abs() < 1e-3);
/// assert!((nutation.delta_epsilon * 3600.0 - 9.443).abs() < 1e-3);
/// ```
#[must_use]
pub fn nutation_and_obliquity(jde: f64) -> Nutation {
    nutation_and_obliquity_with(&NUTATION_TERMS, jde)
}

/// Computes nutation and true obliquity from an explicit term table.
#[must_use]
pub fn nutation_and_obliquity_with(terms: &[NutationTerm], jde: f64) -> Nutation {
    let t = centuries_since_j2000(jde);
    let args = FundamentalArguments::at(t);

    let mut delta_psi = 0.0;
    let mut delta_epsilon = 0.0;
    for term in terms {
        let argument = degrees_to_radians(term.argument(&args));
        delta_psi += (term.longitude_sine + term.longitude_sine_rate * t) * sin(argument);
        delta_epsilon += (term.obliquity_cosine + term.obliquity_cosine_rate * t) * cos(argument);
    }
    let delta_psi = delta_psi / TABLE_UNITS_PER_DEGREE;
    let delta_epsilon = delta_epsilon / TABLE_UNITS_PER_DEGREE;

    Nutation {
        delta_psi,
        delta_epsilon,
        epsilon: mean_obliquity(jde) + delta_epsilon,
    }
}

fn centuries_since_j2000(jde: f64) -> f64 {
    (jde - J2000_JDN) / DAYS_PER_CENTURY
}
