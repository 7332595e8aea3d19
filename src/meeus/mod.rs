//! Apparent solar position after Meeus, "Astronomical Algorithms" (2nd ed.).
//!
//! Chapter 25 (higher accuracy method) for the apparent place of the sun,
//! chapter 28 for the equation of time and chapter 13 for the horizontal
//! coordinates. Earth's position comes from the abridged VSOP87 series,
//! nutation from the IAU 1980 theory.
//!
//! The calculation is split in two, like the time-dependent/observer split
//! used for coordinate sweeps: [`apparent_sun`] computes everything that
//! only depends on the instant, [`ApparentSun::horizontal`] adds an observer.

#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

pub mod coefficients;
pub mod earth;
pub mod nutation;

use self::earth::{EarthSeries, HeliocentricPosition, earth_position_with};
use self::nutation::{Nutation, NutationTerm, nutation_and_obliquity_with};
use crate::error::check_finite;
use crate::math::{
    asin, atan2, cos, degrees_to_radians, normalize_degrees_0_to_360, radians_to_degrees,
    round_half_up, sin, tan,
};
use crate::time::{CalendarInstant, CalendarSystem, J2000_JDN, JulianDate};
use crate::{GeographicLocation, HorizontalCoordinates, Result, SolarPosition};

#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Aberration constant in arcseconds.
const ABERRATION_CONSTANT: f64 = 20.4898;

/// FK5 correction to the geocentric longitude in arcseconds.
const FK5_LONGITUDE_CORRECTION: f64 = -0.09033;

/// FK5 correction factor for the geocentric latitude in arcseconds.
const FK5_LATITUDE_CORRECTION: f64 = 0.03916;

/// Seconds per hour conversion factor.
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Decimal places kept for azimuth and altitude.
const HORIZONTAL_DECIMALS: i32 = 6;

/// Location-independent intermediate values of the solar position.
///
/// Pre-computed for one instant; combine with any number of observers via
/// [`ApparentSun::horizontal`] or [`ApparentSun::position`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApparentSun {
    /// Julian Ephemeris Day
    jde: f64,
    /// Earth heliocentric position
    earth: HeliocentricPosition,
    /// Geocentric longitude after FK5 correction (degrees)
    theta_degrees: f64,
    /// Geocentric latitude after FK5 correction (degrees)
    beta_degrees: f64,
    /// Nutation and true obliquity
    nutation: Nutation,
    /// Apparent longitude (degrees)
    lambda_degrees: f64,
    /// Apparent right ascension (degrees)
    alpha_degrees: f64,
    /// Apparent declination (degrees)
    delta_degrees: f64,
    /// Equation of time (minutes)
    equation_of_time: f64,
    /// Apparent sidereal time at Greenwich (degrees)
    nu_degrees: f64,
}

impl ApparentSun {
    /// Gets the Julian Ephemeris Day this was computed for.
    #[must_use]
    pub const fn julian_ephemeris_day(&self) -> f64 {
        self.jde
    }

    /// Gets Earth's heliocentric position.
    #[must_use]
    pub const fn earth(&self) -> HeliocentricPosition {
        self.earth
    }

    /// Gets the geocentric longitude Θ in the FK5 frame, in degrees.
    #[must_use]
    pub const fn geocentric_longitude(&self) -> f64 {
        self.theta_degrees
    }

    /// Gets the geocentric latitude β in the FK5 frame, in degrees.
    #[must_use]
    pub const fn geocentric_latitude(&self) -> f64 {
        self.beta_degrees
    }

    /// Gets nutation and true obliquity.
    #[must_use]
    pub const fn nutation(&self) -> Nutation {
        self.nutation
    }

    /// Gets the apparent longitude λ in degrees (not normalized).
    #[must_use]
    pub const fn apparent_longitude(&self) -> f64 {
        self.lambda_degrees
    }

    /// Gets the apparent right ascension α in degrees, [0, 360).
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.alpha_degrees
    }

    /// Gets the apparent declination δ in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.delta_degrees
    }

    /// Gets the equation of time in minutes, within ±20.
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }

    /// Gets the apparent sidereal time at Greenwich θ₀ in degrees.
    #[must_use]
    pub const fn apparent_sidereal_time(&self) -> f64 {
        self.nu_degrees
    }

    /// Computes azimuth and altitude for an observer.
    ///
    /// # Errors
    /// Returns `ComputationError` if an intermediate value is not finite.
    pub fn horizontal(&self, location: &GeographicLocation) -> Result<HorizontalCoordinates> {
        // Local hour angle, H (in degrees), with west-positive longitude
        let h_degrees = normalize_degrees_0_to_360(
            self.nu_degrees - location.west_longitude() - self.alpha_degrees,
        );

        let h = degrees_to_radians(h_degrees);
        let phi = degrees_to_radians(location.latitude());
        let delta = degrees_to_radians(self.delta_degrees);

        // Meeus measures azimuth from the south; shift to north-based
        let azimuth = normalize_degrees_0_to_360(
            180.0 + radians_to_degrees(atan2(sin(h), cos(h) * sin(phi) - tan(delta) * cos(phi))),
        );
        let altitude =
            radians_to_degrees(asin(sin(phi) * sin(delta) + cos(phi) * cos(delta) * cos(h)));

        let azimuth = check_finite(azimuth, "azimuth is not finite")?;
        let altitude = check_finite(altitude, "altitude is not finite")?;
        log::trace!(
            "H={h_degrees} A={azimuth} h={altitude} at ({}, {})",
            location.latitude(),
            location.longitude()
        );

        Ok(HorizontalCoordinates::new(
            normalize_degrees_0_to_360(round_half_up(azimuth, HORIZONTAL_DECIMALS)),
            round_half_up(altitude, HORIZONTAL_DECIMALS),
        ))
    }

    /// Assembles the solar position, with horizontal coordinates if a location is given.
    ///
    /// # Errors
    /// Returns `ComputationError` if an intermediate value is not finite.
    pub fn position(&self, location: Option<&GeographicLocation>) -> Result<SolarPosition> {
        let horizontal = match location {
            Some(location) => Some(self.horizontal(location)?),
            None => {
                log::debug!("no observer location, skipping azimuth and altitude");
                None
            }
        };

        Ok(SolarPosition::new(
            self.equation_of_time,
            self.alpha_degrees,
            self.delta_degrees,
            horizontal,
        ))
    }
}

/// Computes the location-independent solar quantities with the built-in tables.
///
/// # Errors
/// Returns `ComputationError` if a pipeline stage produces a non-finite value.
///
/// # Example
/// ```
/// use meeus_sun::{meeus, time::JulianDate};
///
/// // Meeus, example 25.b (1992-10-13 0h TD)
/// let jd = JulianDate::new(2_448_908.5, 0.0).unwrap();
/// let sun = meeus::apparent_sun(&jd).unwrap();
///
/// assert!((sun.right_ascension() - 198.378178).abs() < 1e-5);
/// assert!((sun.declination() + 7.783871).abs() < 1e-5);
/// ```
pub fn apparent_sun(jd: &JulianDate) -> Result<ApparentSun> {
    apparent_sun_with(jd, &EarthSeries::VSOP87, &coefficients::NUTATION_TERMS)
}

/// Computes the location-independent solar quantities from explicit tables.
///
/// # Errors
/// Returns `ComputationError` if a pipeline stage produces a non-finite value.
pub fn apparent_sun_with(
    jd: &JulianDate,
    earth_series: &EarthSeries<'_>,
    nutation_terms: &[NutationTerm],
) -> Result<ApparentSun> {
    let jde = jd.julian_ephemeris_day();
    let t = jd.julian_ephemeris_century();

    // Heliocentric position of the Earth
    let earth = earth_position_with(earth_series, jde);
    check_finite(earth.longitude, "heliocentric longitude is not finite")?;
    check_finite(earth.latitude, "heliocentric latitude is not finite")?;
    check_finite(earth.radius, "radius vector is not finite")?;
    log::trace!(
        "JDE={jde} L={} B={} R={}",
        earth.longitude,
        earth.latitude,
        earth.radius
    );

    // Geocentric longitude and latitude
    let mut theta_degrees = normalize_degrees_0_to_360(earth.longitude + 180.0);
    let mut beta_degrees = -earth.latitude;

    // Conversion to the FK5 system
    let lambda_prime = degrees_to_radians(theta_degrees + t * (-1.397 + t * (-0.00031 * t)));
    theta_degrees += FK5_LONGITUDE_CORRECTION / SECONDS_PER_HOUR;
    beta_degrees +=
        (FK5_LATITUDE_CORRECTION / SECONDS_PER_HOUR) * (cos(lambda_prime) - sin(lambda_prime));

    let nutation = nutation_and_obliquity_with(nutation_terms, jde);
    check_finite(nutation.epsilon, "obliquity is not finite")?;
    log::trace!(
        "Δψ={} Δε={} ε={}",
        nutation.delta_psi,
        nutation.delta_epsilon,
        nutation.epsilon
    );

    // Apparent longitude: nutation and aberration
    let lambda_degrees = theta_degrees + nutation.delta_psi
        - (ABERRATION_CONSTANT / SECONDS_PER_HOUR) / earth.radius;

    let lambda = degrees_to_radians(lambda_degrees);
    let beta = degrees_to_radians(beta_degrees);
    let epsilon = degrees_to_radians(nutation.epsilon);

    let alpha_degrees = normalize_degrees_0_to_360(radians_to_degrees(atan2(
        sin(lambda) * cos(epsilon) - tan(beta) * sin(epsilon),
        cos(lambda),
    )));
    let delta_degrees = radians_to_degrees(asin(
        sin(beta) * cos(epsilon) + cos(beta) * sin(epsilon) * sin(lambda),
    ));
    check_finite(alpha_degrees, "right ascension is not finite")?;
    check_finite(delta_degrees, "declination is not finite")?;

    let equation_of_time = equation_of_time(t, alpha_degrees, nutation.delta_psi, epsilon);
    let nu_degrees = apparent_sidereal_time(jde, t, nutation.delta_psi, epsilon);
    log::trace!("α={alpha_degrees} δ={delta_degrees} E={equation_of_time} θ0={nu_degrees}");

    Ok(ApparentSun {
        jde,
        earth,
        theta_degrees,
        beta_degrees,
        nutation,
        lambda_degrees,
        alpha_degrees,
        delta_degrees,
        equation_of_time,
        nu_degrees,
    })
}

/// Equation of time in minutes, wrapped into ±20 minutes.
fn equation_of_time(t: f64, alpha_degrees: f64, delta_psi: f64, epsilon: f64) -> f64 {
    let tau = t / 10.0;

    // Sun's mean longitude
    let l0 = normalize_degrees_0_to_360(
        280.4664567
            + tau
                * (360007.6982779
                    + tau
                        * (0.03032028
                            + tau * (1.0 / 49931.0 + tau * (-1.0 / 15299.0 - tau / 1988000.0)))),
    );

    let mut e =
        normalize_degrees_0_to_360(l0 - 0.0057183 - alpha_degrees + delta_psi * cos(epsilon));
    if e > 180.0 {
        e -= 360.0;
    }
    e * 4.0
}

/// Apparent sidereal time at Greenwich in degrees.
fn apparent_sidereal_time(jde: f64, t: f64, delta_psi: f64, epsilon: f64) -> f64 {
    let nu0_degrees = normalize_degrees_0_to_360(
        280.46061837
            + 360.98564736629 * (jde - J2000_JDN)
            + 0.000387933 * t * t
            + t * t * t / 38710000.0,
    );
    nu0_degrees + delta_psi * cos(epsilon)
}

/// Calculates the solar position for a civil UTC instant (Gregorian calendar).
///
/// ΔT comes from the model estimate for the instant's year and month.
///
/// # Arguments
/// * `instant` - Civil date and time in UTC
/// * `location` - Observer location; `None` leaves azimuth and altitude absent
///
/// # Errors
/// Returns `InvalidDate` for instants before -4712-01-01 12:00 UTC and
/// `ComputationError` if a pipeline stage produces a non-finite value.
///
/// # Example
/// ```
/// use meeus_sun::{meeus, time::CalendarInstant, GeographicLocation};
///
/// let instant = CalendarInstant::new(2000, 1, 1, 12, 0, 0.0).unwrap();
/// let boulder = GeographicLocation::new(40.0, -105.0).unwrap();
///
/// let position = meeus::solar_position(&instant, Some(boulder)).unwrap();
/// assert!((position.equation_of_time() + 3.28).abs() < 0.01);
/// assert!(position.altitude().unwrap() < 0.0); // before sunrise in Colorado
///
/// let position = meeus::solar_position(&instant, None).unwrap();
/// assert_eq!(position.azimuth(), None);
/// ```
pub fn solar_position(
    instant: &CalendarInstant,
    location: Option<GeographicLocation>,
) -> Result<SolarPosition> {
    solar_position_in(instant, CalendarSystem::Gregorian, location)
}

/// Calculates the solar position for a civil UTC instant in the given calendar.
///
/// # Errors
/// Returns `InvalidDate` for instants before -4712-01-01 12:00 UTC and
/// `ComputationError` if a pipeline stage produces a non-finite value.
pub fn solar_position_in(
    instant: &CalendarInstant,
    calendar: CalendarSystem,
    location: Option<GeographicLocation>,
) -> Result<SolarPosition> {
    let jd = JulianDate::from_instant_in(instant, calendar)?;
    solar_position_from_julian(jd, location)
}

/// Calculates the solar position from a Julian date.
///
/// Core implementation for `no_std` compatibility (no chrono dependency).
/// Use [`JulianDate::with_delta_t`] to substitute an observed ΔT.
///
/// # Errors
/// Returns `ComputationError` if a pipeline stage produces a non-finite value.
pub fn solar_position_from_julian(
    jd: JulianDate,
    location: Option<GeographicLocation>,
) -> Result<SolarPosition> {
    apparent_sun(&jd)?.position(location.as_ref())
}

/// Calculates the solar position for a timezone-aware chrono `DateTime`.
///
/// # Errors
/// Returns `InvalidDateTime` for leap seconds, `InvalidDate` for dates before
/// the Julian Day epoch, and `ComputationError` for non-finite intermediates.
///
/// # Example
/// ```rust
/// use meeus_sun::{meeus, GeographicLocation};
/// use chrono::{DateTime, FixedOffset};
///
/// let datetime = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let san_francisco = GeographicLocation::new(37.7749, -122.4194).unwrap();
///
/// let position = meeus::solar_position_at(datetime, Some(san_francisco)).unwrap();
/// println!("Azimuth: {:.3}°", position.azimuth().unwrap());
/// println!("Altitude: {:.3}°", position.altitude().unwrap());
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn solar_position_at<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    location: Option<GeographicLocation>,
) -> Result<SolarPosition> {
    let jd = JulianDate::from_datetime(&datetime)?;
    solar_position_from_julian(jd, location)
}
