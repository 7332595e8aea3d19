//! Civil time to Julian Day conversions.
//!
//! Calendar arithmetic follows chapter 7 of Meeus, "Astronomical Algorithms"
//! (2nd ed.). The ephemeris time scale adds the ΔT estimate from [`DeltaT`].

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

mod delta_t;

pub use delta_t::DeltaT;

use crate::math::floor;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{Datelike, TimeZone, Timelike};

/// Seconds per day (86,400)
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 TT)
pub(crate) const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
pub(crate) const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Days per Julian millennium
const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

/// Julian Day Number of 1582-10-15, the first day of the Gregorian calendar.
const GREGORIAN_REFORM_JDN: f64 = 2_299_161.0;

/// Calendar used to interpret a civil date.
///
/// Both calendars are proleptic: neither switches at the 1582 reform unless
/// the caller asks for it through [`CalendarSystem::for_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalendarSystem {
    /// Gregorian calendar (applies the century leap-year correction)
    #[default]
    Gregorian,
    /// Julian calendar (every fourth year is a leap year)
    Julian,
}

impl CalendarSystem {
    /// Selects the calendar that was in civil use on the given date.
    ///
    /// Dates on or after 1582-10-15 are Gregorian, earlier dates Julian.
    #[must_use]
    pub const fn for_date(year: i32, month: u32, day: u32) -> Self {
        if year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15))) {
            Self::Gregorian
        } else {
            Self::Julian
        }
    }

    /// Selects the calendar that was in civil use on the given Julian Day.
    #[must_use]
    pub fn for_julian_day(julian_day: f64) -> Self {
        if floor(julian_day + 0.5) >= GREGORIAN_REFORM_JDN {
            Self::Gregorian
        } else {
            Self::Julian
        }
    }

    /// Whether this is the Gregorian calendar.
    #[must_use]
    pub const fn is_gregorian(self) -> bool {
        matches!(self, Self::Gregorian)
    }
}

/// An immutable civil date and time in UTC.
///
/// Years are signed and proleptic: year 0 is 1 BCE, year -4712 is 4713 BCE.
///
/// # Example
/// ```
/// # use meeus_sun::time::CalendarInstant;
/// let instant = CalendarInstant::new(1987, 6, 19, 12, 0, 0.0).unwrap();
/// assert_eq!(instant.fractional_day(), 19.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCalendarInstant"))]
pub struct CalendarInstant {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
}

/// Unchecked field layout of [`CalendarInstant`], validated on deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCalendarInstant {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCalendarInstant> for CalendarInstant {
    type Error = Error;

    fn try_from(raw: RawCalendarInstant) -> Result<Self> {
        Self::new(raw.year, raw.month, raw.day, raw.hour, raw.minute, raw.second)
    }
}

impl CalendarInstant {
    /// Creates a civil instant from UTC components.
    ///
    /// # Arguments
    /// * `year` - Year (can be negative for BCE years)
    /// * `month` - Month (1-12)
    /// * `day` - Day of month (1-31)
    /// * `hour` - Hour (0-23)
    /// * `minute` - Minute (0-59)
    /// * `second` - Second (0-59, can include fractional seconds)
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if any component is outside its range.
    /// Day-of-month is not checked against the month length, since that
    /// depends on the calendar the instant is later interpreted in.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if !(1..=31).contains(&day) {
            return Err(Error::invalid_datetime("day must be between 1 and 31"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Creates a civil instant at 00:00 UTC on the given date.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` for an out-of-range month or day.
    pub fn from_date(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Creates a civil instant from a timezone-aware chrono `DateTime`.
    ///
    /// The datetime is converted to UTC first; chrono dates are proleptic Gregorian.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` for a leap second (second 60).
    #[cfg(feature = "chrono")]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Result<Self> {
        let utc = datetime.with_timezone(&chrono::Utc);
        Self::new(
            utc.year(),
            utc.month(),
            utc.day(),
            utc.hour(),
            utc.minute(),
            f64::from(utc.second()) + f64::from(utc.nanosecond()) / 1e9,
        )
    }

    /// Converts a Julian Day back into a civil instant.
    ///
    /// Inverse of [`julian_day`]. Time of day is truncated to the millisecond.
    ///
    /// # Errors
    /// Returns `InvalidDate` if `julian_day` is negative or NaN.
    ///
    /// # Example
    /// ```
    /// # use meeus_sun::time::{CalendarInstant, CalendarSystem};
    /// let instant =
    ///     CalendarInstant::from_julian_day(2_436_116.31, CalendarSystem::Gregorian).unwrap();
    /// assert_eq!((instant.year(), instant.month(), instant.day()), (1957, 10, 4));
    /// assert_eq!((instant.hour(), instant.minute()), (19, 26));
    /// ```
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_julian_day(julian_day: f64, calendar: CalendarSystem) -> Result<Self> {
        if julian_day.is_nan() || julian_day < 0.0 {
            log::debug!("rejecting calendar conversion of Julian Day {julian_day}");
            return Err(Error::invalid_date(julian_day));
        }

        let shifted = julian_day + 0.5;
        let z = floor(shifted);
        let f = shifted - z;

        let a = if calendar.is_gregorian() {
            let alpha = floor((z - 1_867_216.25) / 36_524.25);
            z + 1.0 + alpha - floor(alpha / 4.0)
        } else {
            z
        };

        let b = a + 1524.0;
        let c = floor((b - 122.1) / 365.25);
        let d = floor(365.25 * c);
        let e = floor((b - d) / 30.6001);

        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

        let day_with_fraction = b - d - floor(30.6001 * e) + f;
        let day = floor(day_with_fraction);

        let mut x = (day_with_fraction - day) * 24.0;
        let hour = floor(x);
        x = (x - hour) * 60.0;
        let minute = floor(x);
        x = (x - minute) * 60.0;
        let second = floor(x);
        let millis = floor((x - second) * 1000.0);

        Self::new(
            year as i32,
            month as u32,
            day as u32,
            hour as u32,
            minute as u32,
            second + millis / 1000.0,
        )
    }

    /// Gets the year (proleptic, signed).
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month (1-31).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the hour (0-23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Gets the minute (0-59).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Gets the second including its fractional part.
    #[must_use]
    pub const fn second(&self) -> f64 {
        self.second
    }

    /// Day of month with the time of day as a fraction.
    #[must_use]
    pub fn fractional_day(&self) -> f64 {
        f64::from(self.day)
            + f64::from(self.hour) / 24.0
            + f64::from(self.minute) / 1440.0
            + self.second / SECONDS_PER_DAY
    }

    /// Converts this instant to a Julian Day. See [`julian_day`].
    ///
    /// # Errors
    /// Returns `InvalidDate` if the instant precedes the Julian Day epoch.
    pub fn julian_day(&self, calendar: CalendarSystem) -> Result<f64> {
        julian_day(self, calendar)
    }
}

/// Converts a civil UTC instant to a Julian Day.
///
/// # Arguments
/// * `instant` - Civil date and time in UTC
/// * `calendar` - Calendar the date is expressed in
///
/// # Errors
/// Returns `InvalidDate` if the result is negative, i.e. the instant is
/// earlier than -4712-01-01 12:00 UTC in the proleptic Julian calendar.
///
/// # Example
/// ```
/// # use meeus_sun::time::{julian_day, CalendarInstant, CalendarSystem};
/// let j2000 = CalendarInstant::new(2000, 1, 1, 12, 0, 0.0).unwrap();
/// assert_eq!(julian_day(&j2000, CalendarSystem::Gregorian).unwrap(), 2_451_545.0);
///
/// let epoch = CalendarInstant::new(-4712, 1, 1, 12, 0, 0.0).unwrap();
/// assert_eq!(julian_day(&epoch, CalendarSystem::Julian).unwrap(), 0.0);
/// ```
pub fn julian_day(instant: &CalendarInstant, calendar: CalendarSystem) -> Result<f64> {
    let mut y = f64::from(instant.year);
    let mut m = f64::from(instant.month);

    // January and February count as months 13 and 14 of the previous year
    if m < 3.0 {
        y -= 1.0;
        m += 12.0;
    }

    let d = instant.fractional_day();

    let a = floor(y / 100.0);
    let b = match calendar {
        CalendarSystem::Gregorian => 2.0 - a + floor(a / 4.0),
        CalendarSystem::Julian => 0.0,
    };

    let jd = floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + d + b - 1524.5;

    if jd < 0.0 {
        log::debug!("rejecting {instant:?} ({calendar:?}): Julian Day {jd} is negative");
        return Err(Error::invalid_date(jd));
    }

    Ok(jd)
}

/// Converts a civil UTC instant (Gregorian) to a Julian Ephemeris Day.
///
/// JDE = JD + ΔT/86400 with ΔT from [`DeltaT::estimate`].
///
/// # Errors
/// Returns `InvalidDate` if the instant precedes the Julian Day epoch.
pub fn julian_ephemeris_day(instant: &CalendarInstant) -> Result<f64> {
    Ok(JulianDate::from_instant(instant)?.julian_ephemeris_day())
}

/// A Julian Day paired with the ΔT used to reach the ephemeris time scale.
///
/// # Example
/// ```
/// # use meeus_sun::time::{CalendarInstant, JulianDate};
/// let instant = CalendarInstant::new(2000, 1, 1, 12, 0, 0.0).unwrap();
/// let jd = JulianDate::from_instant(&instant).unwrap();
/// assert_eq!(jd.julian_day(), 2_451_545.0);
/// assert_eq!(jd.delta_t(), 63.87);
///
/// // Observed ΔT instead of the model estimate
/// let observed = jd.with_delta_t(63.83);
/// assert!(observed.julian_ephemeris_day() < jd.julian_ephemeris_day());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    /// Julian Day (UT)
    jd: f64,
    /// ΔT in seconds
    delta_t: f64,
}

impl JulianDate {
    /// Creates a Julian date from a Julian Day and an explicit ΔT.
    ///
    /// # Errors
    /// Returns `InvalidDate` if `julian_day` is negative or NaN.
    pub fn new(julian_day: f64, delta_t: f64) -> Result<Self> {
        if julian_day.is_nan() || julian_day < 0.0 {
            return Err(Error::invalid_date(julian_day));
        }
        Ok(Self {
            jd: julian_day,
            delta_t,
        })
    }

    /// Creates a Julian date from a Gregorian civil instant with modelled ΔT.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the instant precedes the Julian Day epoch.
    pub fn from_instant(instant: &CalendarInstant) -> Result<Self> {
        Self::from_instant_in(instant, CalendarSystem::Gregorian)
    }

    /// Creates a Julian date from a civil instant in the given calendar with modelled ΔT.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the instant precedes the Julian Day epoch.
    pub fn from_instant_in(instant: &CalendarInstant, calendar: CalendarSystem) -> Result<Self> {
        let jd = julian_day(instant, calendar)?;
        Ok(Self {
            jd,
            delta_t: DeltaT::estimate(instant.year(), instant.month()),
        })
    }

    /// Creates a Julian date from a timezone-aware chrono `DateTime` with modelled ΔT.
    ///
    /// # Errors
    /// Returns error if the datetime cannot be represented as a [`CalendarInstant`].
    #[cfg(feature = "chrono")]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Result<Self> {
        Self::from_instant(&CalendarInstant::from_datetime(datetime)?)
    }

    /// Returns a copy using the given ΔT (seconds) instead.
    #[must_use]
    pub const fn with_delta_t(self, delta_t: f64) -> Self {
        Self {
            jd: self.jd,
            delta_t,
        }
    }

    /// Gets the Julian Day (UT).
    #[must_use]
    pub const fn julian_day(&self) -> f64 {
        self.jd
    }

    /// Gets the ΔT value in seconds.
    #[must_use]
    pub const fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Calculates the Julian Ephemeris Day (JDE).
    ///
    /// JDE = JD + ΔT/86400
    #[must_use]
    pub fn julian_ephemeris_day(&self) -> f64 {
        self.jd + self.delta_t / SECONDS_PER_DAY
    }

    /// Julian ephemeris centuries since J2000.0.
    #[must_use]
    pub fn julian_ephemeris_century(&self) -> f64 {
        (self.julian_ephemeris_day() - J2000_JDN) / DAYS_PER_CENTURY
    }

    /// Julian ephemeris millennia since J2000.0.
    #[must_use]
    pub fn julian_ephemeris_millennium(&self) -> f64 {
        (self.julian_ephemeris_day() - J2000_JDN) / DAYS_PER_MILLENNIUM
    }

    /// Converts the Julian Day (UT) back into a civil instant.
    ///
    /// # Errors
    /// Never fails for a value built through the constructors, which reject
    /// negative days; the `Result` mirrors [`CalendarInstant::from_julian_day`].
    pub fn to_calendar(&self, calendar: CalendarSystem) -> Result<CalendarInstant> {
        CalendarInstant::from_julian_day(self.jd, calendar)
    }
}
