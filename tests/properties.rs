//! Property tests over the public API.

use meeus_sun::time::{CalendarInstant, CalendarSystem, DeltaT, julian_day};
use meeus_sun::{Error, GeographicLocation, meeus};
use proptest::prelude::*;

fn calendar() -> impl Strategy<Value = CalendarSystem> {
    prop_oneof![Just(CalendarSystem::Gregorian), Just(CalendarSystem::Julian)]
}

fn instant(years: core::ops::RangeInclusive<i32>) -> impl Strategy<Value = CalendarInstant> {
    (years, 1_u32..=12, 1_u32..=28, 0_u32..24, 0_u32..60, 0.0_f64..60.0).prop_map(
        |(year, month, day, hour, minute, second)| {
            CalendarInstant::new(year, month, day, hour, minute, second).unwrap()
        },
    )
}

fn location() -> impl Strategy<Value = GeographicLocation> {
    (-90.0_f64..=90.0, -180.0_f64..=180.0)
        .prop_map(|(lat, lon)| GeographicLocation::new(lat, lon).unwrap())
}

proptest! {
    #[test]
    fn dates_before_the_epoch_are_rejected(
        instant in instant(-100_000..=-4714),
        calendar in calendar(),
    ) {
        let result = julian_day(&instant, calendar);
        prop_assert!(matches!(result, Err(Error::InvalidDate { julian_day }) if julian_day < 0.0), "expected InvalidDate with negative julian_day, got {:?}", result);
        prop_assert!(meeus::solar_position(&instant, None).is_err());
    }

    #[test]
    fn julian_days_from_the_epoch_on_are_non_negative(
        instant in instant(-4711..=10_000),
        calendar in calendar(),
    ) {
        prop_assert!(julian_day(&instant, calendar).unwrap() >= 0.0);
    }

    #[test]
    fn output_angles_are_normalized(instant in instant(-2000..=4000), location in location()) {
        let position = meeus::solar_position(&instant, Some(location)).unwrap();

        prop_assert!((0.0..360.0).contains(&position.right_ascension()));
        prop_assert!((-24.5..=24.5).contains(&position.declination()));
        prop_assert!(position.equation_of_time().abs() <= 20.0);
        prop_assert!((0.0..360.0).contains(&position.azimuth().unwrap()));
        prop_assert!((-90.0..=90.0).contains(&position.altitude().unwrap()));
    }

    #[test]
    fn repeated_calls_are_bit_identical(instant in instant(1000..=3000), location in location()) {
        let first = meeus::solar_position(&instant, Some(location)).unwrap();
        let second = meeus::solar_position(&instant, Some(location)).unwrap();

        prop_assert_eq!(first.right_ascension().to_bits(), second.right_ascension().to_bits());
        prop_assert_eq!(first.declination().to_bits(), second.declination().to_bits());
        prop_assert_eq!(first.equation_of_time().to_bits(), second.equation_of_time().to_bits());
        prop_assert_eq!(first.azimuth().map(f64::to_bits), second.azimuth().map(f64::to_bits));
        prop_assert_eq!(first.altitude().map(f64::to_bits), second.altitude().map(f64::to_bits));
    }

    #[test]
    fn horizontal_output_follows_location(
        instant in instant(1900..=2100),
        latitude in proptest::option::of(-90.0_f64..=90.0),
        longitude in proptest::option::of(prop_oneof![Just(f64::NAN), -180.0_f64..=180.0]),
    ) {
        let location = GeographicLocation::from_optional(latitude, longitude).unwrap();
        let usable = matches!((latitude, longitude), (Some(_), Some(lon)) if lon.is_finite());
        prop_assert_eq!(location.is_some(), usable);

        let position = meeus::solar_position(&instant, location).unwrap();
        prop_assert_eq!(position.azimuth().is_some(), usable);
        prop_assert_eq!(position.altitude().is_some(), usable);
    }

    #[test]
    fn delta_t_is_finite_and_positive_outside_the_19th_century(
        year in -5000_i32..=5000,
        month in 1_u32..=12,
    ) {
        let delta_t = DeltaT::estimate(year, month);
        prop_assert!(delta_t.is_finite());
        if !(1860..1920).contains(&year) {
            prop_assert!(delta_t > 0.0, "ΔT({}, {}) = {}", year, month, delta_t);
        }
    }
}
