//! ΔT (TT − UT) estimation.

#![allow(clippy::unreadable_literal)]

use crate::math::{polynomial, round_half_up};
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// ΔT estimation using the polynomial fits published by Espenak and Meeus.
///
/// Each segment's polynomial value is rounded half-up to the precision the
/// published table carries for that era (whole seconds before 1800, tenths
/// afterwards, hundredths for 1986-2004). The segment is selected by the
/// integer year, the polynomial is evaluated at the decimal year.
///
/// See <https://eclipse.gsfc.nasa.gov/SEhelp/deltatpoly2004.html>
pub struct DeltaT;

impl DeltaT {
    /// First year of each polynomial segment after the first.
    ///
    /// ΔT jumps by at most a few seconds across the 20th and 21st century
    /// boundaries; the ancient and medieval boundaries can jump further.
    pub const SEGMENT_START_YEARS: [i32; 14] = [
        -500, 500, 1600, 1700, 1800, 1860, 1900, 1920, 1941, 1961, 1986, 2005, 2050, 2150,
    ];

    /// Estimates ΔT in seconds for a given year and month.
    ///
    /// # Arguments
    /// * `year` - Year (can be negative for BCE years)
    /// * `month` - Month (1-12)
    ///
    /// # Example
    /// ```
    /// # use meeus_sun::time::DeltaT;
    /// assert_eq!(DeltaT::estimate(2000, 1), 63.87);
    /// assert_eq!(DeltaT::estimate(1600, 1), 120.0);
    /// ```
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn estimate(year: i32, month: u32) -> f64 {
        let y = decimal_year(year, month);
        let year_f = f64::from(year);

        if year < -500 {
            let u = (year_f - 1820.0) / 100.0;
            round_half_up(-20.0 + 32.0 * u * u, 0)
        } else if year < 500 {
            let u = y / 100.0;
            round_half_up(
                polynomial(
                    &[
                        10583.6,
                        -1014.41,
                        33.78311,
                        -5.952053,
                        -0.1798452,
                        0.022174192,
                        0.0090316521,
                    ],
                    u,
                ),
                0,
            )
        } else if year < 1600 {
            let u = (y - 1000.0) / 100.0;
            round_half_up(
                polynomial(
                    &[
                        1574.2,
                        -556.01,
                        71.23472,
                        0.319781,
                        -0.8503463,
                        -0.005050998,
                        0.0083572073,
                    ],
                    u,
                ),
                0,
            )
        } else if year < 1700 {
            let t = y - 1600.0;
            round_half_up(polynomial(&[120.0, -0.9808, -0.01532, 1.0 / 7129.0], t), 0)
        } else if year < 1800 {
            let t = y - 1700.0;
            round_half_up(
                polynomial(
                    &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0],
                    t,
                ),
                0,
            )
        } else if year < 1860 {
            let t = y - 1800.0;
            round_half_up(
                polynomial(
                    &[
                        13.72,
                        -0.332447,
                        0.0068612,
                        0.0041116,
                        -0.00037436,
                        0.0000121272,
                        -0.0000001699,
                        0.000000000875,
                    ],
                    t,
                ),
                1,
            )
        } else if year < 1900 {
            let t = y - 1860.0;
            round_half_up(
                polynomial(
                    &[
                        7.62,
                        0.5737,
                        -0.251754,
                        0.01680668,
                        -0.0004473624,
                        1.0 / 233_174.0,
                    ],
                    t,
                ),
                1,
            )
        } else if year < 1920 {
            let t = y - 1900.0;
            round_half_up(
                polynomial(&[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197], t),
                1,
            )
        } else if year < 1941 {
            let t = y - 1920.0;
            round_half_up(polynomial(&[21.20, 0.84493, -0.076100, 0.0020936], t), 1)
        } else if year < 1961 {
            let t = y - 1950.0;
            round_half_up(
                polynomial(&[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0], t),
                1,
            )
        } else if year < 1986 {
            let t = y - 1975.0;
            round_half_up(
                polynomial(&[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0], t),
                1,
            )
        } else if year < 2005 {
            let t = y - 2000.0;
            round_half_up(
                polynomial(
                    &[
                        63.86,
                        0.3345,
                        -0.060374,
                        0.0017275,
                        0.000651814,
                        0.00002373599,
                    ],
                    t,
                ),
                2,
            )
        } else if year < 2050 {
            let t = y - 2000.0;
            round_half_up(polynomial(&[62.92, 0.32217, 0.005589], t), 1)
        } else if year < 2150 {
            let u = (y - 1820.0) / 100.0;
            round_half_up(-20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y), 1)
        } else {
            let u = (year_f - 1820.0) / 100.0;
            round_half_up(-20.0 + 32.0 * u * u, 0)
        }
    }

    /// Estimates ΔT from any date-like type.
    ///
    /// Convenience method that extracts the year and month from any chrono type
    /// that implements `Datelike` (`DateTime`, `NaiveDateTime`, `NaiveDate`, etc.).
    ///
    /// # Example
    /// ```
    /// # use meeus_sun::time::DeltaT;
    /// # use chrono::NaiveDate;
    /// let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    /// assert_eq!(DeltaT::estimate_from_date_like(date), DeltaT::estimate(2024, 6));
    /// ```
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn estimate_from_date_like<D: Datelike>(date: D) -> f64 {
        Self::estimate(date.year(), date.month())
    }
}

/// Decimal year at the middle of the month.
fn decimal_year(year: i32, month: u32) -> f64 {
    f64::from(year) + (f64::from(month) - 0.5) / 12.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modern_values() {
        assert_eq!(DeltaT::estimate(2000, 1), 63.87);
        assert_eq!(DeltaT::estimate(2020, 6), 71.9);
        assert_eq!(DeltaT::estimate(1970, 6), 40.7);
        assert_eq!(DeltaT::estimate(1950, 6), 29.3);
        assert_eq!(DeltaT::estimate(1930, 6), 24.1);
        assert_eq!(DeltaT::estimate(1910, 6), 11.0);
    }

    #[test]
    fn test_historical_values() {
        assert_eq!(DeltaT::estimate(-600, 1), 18720.0);
        assert_eq!(DeltaT::estimate(0, 1), 10583.0);
        assert_eq!(DeltaT::estimate(1000, 1), 1574.0);
        assert_eq!(DeltaT::estimate(1600, 1), 120.0);
        assert_eq!(DeltaT::estimate(1750, 6), 13.0);
        assert_eq!(DeltaT::estimate(1850, 6), 7.2);
        assert_eq!(DeltaT::estimate(1880, 6), -5.1);
    }

    #[test]
    fn test_extrapolated_values() {
        assert_eq!(DeltaT::estimate(2100, 6), 203.8);
        assert_eq!(DeltaT::estimate(2200, 6), 442.0);
    }

    #[test]
    fn test_rounding_precision_per_segment() {
        // hundredths only in 1986-2004
        assert_eq!(DeltaT::estimate(2004, 12), 64.71);
        assert_eq!(DeltaT::estimate(2005, 1), 64.7);
        // whole seconds before 1800
        assert_eq!(DeltaT::estimate(1799, 12), 14.0);
        assert_eq!(DeltaT::estimate(1800, 1), 13.7);
    }

    #[test]
    fn test_segment_boundaries_are_nearly_continuous() {
        for boundary in DeltaT::SEGMENT_START_YEARS {
            let jump = DeltaT::estimate(boundary, 1) - DeltaT::estimate(boundary - 1, 12);
            // the published polynomials disagree by 16 s where the ancient fit ends
            let bound = if boundary == -500 { 16.0 } else { 1.0 };
            assert!(jump.abs() <= bound, "jump of {jump} s at {boundary}");
        }

        assert_eq!(DeltaT::estimate(499, 12), 5711.0);
        assert_eq!(DeltaT::estimate(500, 1), 5710.0);
        assert_eq!(DeltaT::estimate(1599, 12), 120.0);
        assert_eq!(DeltaT::estimate(1600, 1), 120.0);
    }

    #[test]
    fn test_known_boundary_values() {
        assert_eq!(DeltaT::estimate(1985, 12), 54.8);
        assert_eq!(DeltaT::estimate(1986, 1), 54.9);
        assert_eq!(DeltaT::estimate(2049, 12), 93.0);
        assert_eq!(DeltaT::estimate(2050, 1), 93.1);
        assert_eq!(DeltaT::estimate(2149, 12), 328.4);
        assert_eq!(DeltaT::estimate(2150, 1), 328.0);
        assert_eq!(DeltaT::estimate(-501, 12), 17219.0);
        assert_eq!(DeltaT::estimate(-500, 1), 17203.0);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_estimate_from_date_like() {
        use chrono::{DateTime, NaiveDate, Utc};

        let naive = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let utc = "2024-06-15T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let expected = DeltaT::estimate(2024, 6);

        assert_eq!(DeltaT::estimate_from_date_like(naive), expected);
        assert_eq!(DeltaT::estimate_from_date_like(utc), expected);
    }
}
