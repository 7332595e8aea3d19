//! Heliocentric ecliptic position of the Earth.

use super::coefficients::{EARTH_B, EARTH_L, EARTH_R};
use crate::math::{normalize_degrees_0_to_360, normalize_radians_0_to_2pi, radians_to_degrees};
use crate::series::{self, PeriodicTerm};
use crate::time::J2000_JDN;

/// Days per Julian millennium, the time unit of the VSOP87 series.
const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

/// Earth's heliocentric ecliptic coordinates, referred to the mean equinox of the date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeliocentricPosition {
    /// Longitude in degrees, in [0, 360)
    pub longitude: f64,
    /// Latitude in degrees
    pub latitude: f64,
    /// Distance from the Sun in astronomical units
    pub radius: f64,
}

/// The three term tables making up an Earth position theory.
///
/// Each table is grouped by power of τ (Julian millennia from J2000.0) and
/// evaluates to radians for longitude and latitude, AU for the radius.
#[derive(Debug, Clone, Copy)]
pub struct EarthSeries<'a> {
    /// Longitude series
    pub longitude: &'a [&'a [PeriodicTerm]],
    /// Latitude series
    pub latitude: &'a [&'a [PeriodicTerm]],
    /// Radius vector series
    pub radius: &'a [&'a [PeriodicTerm]],
}

impl EarthSeries<'static> {
    /// The abridged VSOP87 tables from Meeus, Appendix III.
    pub const VSOP87: Self = Self {
        longitude: &EARTH_L,
        latitude: &EARTH_B,
        radius: &EARTH_R,
    };
}

impl Default for EarthSeries<'static> {
    fn default() -> Self {
        Self::VSOP87
    }
}

/// Computes Earth's heliocentric position at the given Julian Ephemeris Day
/// using the built-in VSOP87 tables.
///
/// # Example
/// ```
/// # use meeus_sun::meeus::earth::earth_position;
/// // Meeus, example 25.b
/// let earth = earth_position(2_448_908.5);
/// assert!((earth.longitude - 19.907372).abs() < 1e-6);
/// assert!((earth.radius - 0.99760775).abs() < 1e-8);
/// ```
#[must_use]
pub fn earth_position(jde: f64) -> HeliocentricPosition {
    earth_position_with(&EarthSeries::VSOP87, jde)
}

/// Computes Earth's heliocentric position from explicit term tables.
#[must_use]
pub fn earth_position_with(tables: &EarthSeries<'_>, jde: f64) -> HeliocentricPosition {
    let tau = (jde - J2000_JDN) / DAYS_PER_MILLENNIUM;

    let longitude_rad = normalize_radians_0_to_2pi(series::evaluate(tables.longitude, tau));
    let latitude_rad = series::evaluate(tables.latitude, tau);
    let radius = series::evaluate(tables.radius, tau);

    HeliocentricPosition {
        longitude: normalize_degrees_0_to_360(radians_to_degrees(longitude_rad)),
        latitude: radians_to_degrees(latitude_rad),
        radius,
    }
}
