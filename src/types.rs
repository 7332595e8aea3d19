//! Observer location and solar position result types.

use crate::error::check_coordinates;
use crate::Result;

/// Geographic location of an observer on the Earth's surface.
///
/// Longitude uses the standard convention: east of Greenwich is positive.
/// The hour-angle step of the pipeline works with west-positive longitude,
/// available through [`GeographicLocation::west_longitude`].
///
/// # Example
/// ```
/// # use meeus_sun::GeographicLocation;
/// let boulder = GeographicLocation::new(40.0, -105.0).unwrap();
/// assert_eq!(boulder.west_longitude(), 105.0);
/// assert!(GeographicLocation::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLocation"))]
pub struct GeographicLocation {
    latitude: f64,
    longitude: f64,
}

/// Unchecked field layout of [`GeographicLocation`], validated on deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLocation {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLocation> for GeographicLocation {
    type Error = crate::Error;

    fn try_from(raw: RawLocation) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl GeographicLocation {
    /// Creates a location from latitude and east-positive longitude in degrees.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` outside -90 to +90 degrees and
    /// `InvalidLongitude` outside -180 to +180 degrees.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Creates a location from coordinates that may be absent.
    ///
    /// Missing or non-finite coordinates yield `Ok(None)`: the position is
    /// then computed without horizontal coordinates.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` if both coordinates are
    /// present and finite but out of range.
    ///
    /// # Example
    /// ```
    /// # use meeus_sun::GeographicLocation;
    /// assert_eq!(GeographicLocation::from_optional(Some(52.0), None).unwrap(), None);
    /// assert_eq!(GeographicLocation::from_optional(Some(f64::NAN), Some(4.0)).unwrap(), None);
    /// assert!(GeographicLocation::from_optional(Some(52.0), Some(4.0)).unwrap().is_some());
    /// ```
    pub fn from_optional(latitude: Option<f64>, longitude: Option<f64>) -> Result<Option<Self>> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) if latitude.is_finite() && longitude.is_finite() => {
                Self::new(latitude, longitude).map(Some)
            }
            _ => Ok(None),
        }
    }

    /// Gets the latitude in degrees (north positive).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (east positive).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the longitude in degrees, west of Greenwich positive.
    #[must_use]
    pub const fn west_longitude(&self) -> f64 {
        -self.longitude
    }
}

/// Horizontal (observer-relative) coordinates of the sun.
///
/// Geometric position without atmospheric refraction, both angles rounded
/// to six decimal places.
/// - Azimuth: 0° = North, measured clockwise to 360°
/// - Altitude: 0° = horizon, 90° = directly overhead, negative below the horizon
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HorizontalCoordinates {
    azimuth: f64,
    altitude: f64,
}

impl HorizontalCoordinates {
    /// Creates horizontal coordinates from azimuth and altitude in degrees.
    #[must_use]
    pub const fn new(azimuth: f64, altitude: f64) -> Self {
        Self { azimuth, altitude }
    }

    /// Gets the azimuth in degrees (0° to 360°, 0° = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the altitude in degrees (-90° to +90°).
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Gets the zenith angle in degrees, the complement of the altitude.
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        90.0 - self.altitude
    }

    /// Checks if the sun's center is above the horizon.
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.altitude > 0.0
    }
}

/// Apparent position of the sun.
///
/// Equatorial coordinates and the equation of time are always present.
/// Horizontal coordinates are present only when the position was computed
/// for a location.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarPosition {
    /// Equation of time in minutes
    equation_of_time: f64,
    /// Apparent right ascension in degrees, [0, 360)
    right_ascension: f64,
    /// Apparent declination in degrees
    declination: f64,
    horizontal: Option<HorizontalCoordinates>,
}

impl SolarPosition {
    /// Creates a solar position.
    #[must_use]
    pub const fn new(
        equation_of_time: f64,
        right_ascension: f64,
        declination: f64,
        horizontal: Option<HorizontalCoordinates>,
    ) -> Self {
        Self {
            equation_of_time,
            right_ascension,
            declination,
            horizontal,
        }
    }

    /// Gets the equation of time in minutes (apparent minus mean solar time).
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }

    /// Gets the apparent right ascension in degrees.
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Gets the apparent declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the horizontal coordinates, if a location was supplied.
    #[must_use]
    pub const fn horizontal(&self) -> Option<HorizontalCoordinates> {
        self.horizontal
    }

    /// Gets the azimuth in degrees, if a location was supplied.
    #[must_use]
    pub fn azimuth(&self) -> Option<f64> {
        self.horizontal.map(|h| h.azimuth())
    }

    /// Gets the altitude in degrees, if a location was supplied.
    #[must_use]
    pub fn altitude(&self) -> Option<f64> {
        self.horizontal.map(|h| h.altitude())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_validation() {
        let location = GeographicLocation::new(52.0, 4.0).unwrap();
        assert_eq!(location.latitude(), 52.0);
        assert_eq!(location.longitude(), 4.0);
        assert_eq!(location.west_longitude(), -4.0);

        assert!(GeographicLocation::new(90.0, 180.0).is_ok());
        assert!(GeographicLocation::new(-90.0, -180.0).is_ok());
        assert!(GeographicLocation::new(90.5, 0.0).is_err());
        assert!(GeographicLocation::new(0.0, -180.5).is_err());
        assert!(GeographicLocation::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_location_from_optional() {
        assert_eq!(GeographicLocation::from_optional(None, None), Ok(None));
        assert_eq!(GeographicLocation::from_optional(None, Some(4.0)), Ok(None));
        assert_eq!(
            GeographicLocation::from_optional(Some(52.0), Some(f64::INFINITY)),
            Ok(None)
        );
        assert_eq!(
            GeographicLocation::from_optional(Some(52.0), Some(4.0)),
            Ok(Some(GeographicLocation::new(52.0, 4.0).unwrap()))
        );
        assert!(GeographicLocation::from_optional(Some(100.0), Some(4.0)).is_err());
    }

    #[test]
    fn test_horizontal_coordinates() {
        let above = HorizontalCoordinates::new(180.0, 30.0);
        assert_eq!(above.azimuth(), 180.0);
        assert_eq!(above.altitude(), 30.0);
        assert_eq!(above.zenith_angle(), 60.0);
        assert!(above.is_sun_up());

        let below = HorizontalCoordinates::new(10.0, -5.0);
        assert!(!below.is_sun_up());
        assert_eq!(below.zenith_angle(), 95.0);
    }

    #[test]
    fn test_solar_position_optional_horizontal() {
        let without = SolarPosition::new(-3.2, 281.3, -23.0, None);
        assert_eq!(without.equation_of_time(), -3.2);
        assert_eq!(without.right_ascension(), 281.3);
        assert_eq!(without.declination(), -23.0);
        assert_eq!(without.horizontal(), None);
        assert_eq!(without.azimuth(), None);
        assert_eq!(without.altitude(), None);

        let with = SolarPosition::new(
            -3.2,
            281.3,
            -23.0,
            Some(HorizontalCoordinates::new(99.0, -26.1)),
        );
        assert_eq!(with.azimuth(), Some(99.0));
        assert_eq!(with.altitude(), Some(-26.1));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_location_deserialization_is_validated() {
        let location = GeographicLocation::new(48.21, 16.37).unwrap();
        let json = serde_json::to_string(&location).unwrap();
        assert_eq!(json, r#"{"latitude":48.21,"longitude":16.37}"#);
        assert_eq!(
            serde_json::from_str::<GeographicLocation>(&json).unwrap(),
            location
        );

        let out_of_range = r#"{"latitude":500.0,"longitude":-9999.0}"#;
        let error = serde_json::from_str::<GeographicLocation>(out_of_range).unwrap_err();
        assert!(error.to_string().contains("latitude"));
        let bad_longitude = r#"{"latitude":0.0,"longitude":181.0}"#;
        assert!(serde_json::from_str::<GeographicLocation>(bad_longitude).is_err());
    }
}
