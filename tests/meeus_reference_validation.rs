//! Validation against the worked examples in Meeus, "Astronomical Algorithms",
//! and against reference positions for a few well-known observers.

use approx::assert_abs_diff_eq;
use meeus_sun::meeus::{self, earth, nutation};
use meeus_sun::time::{CalendarInstant, DeltaT, JulianDate};
use meeus_sun::{GeographicLocation, SolarPosition};

/// Tolerance for values computed to full double precision.
const EPSILON: f64 = 1e-8;

/// Azimuth and altitude are rounded to six decimals; one unit of slack.
const HORIZONTAL_EPSILON: f64 = 2e-6;

/// Rounds to the given number of significant figures.
fn significant(value: f64, figures: i32) -> f64 {
    #[allow(clippy::cast_possible_truncation)]
    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10f64.powi(figures - 1 - magnitude);
    (value * scale).round() / scale
}

fn position_at(
    (year, month, day, hour, minute): (i32, u32, u32, u32, u32),
    location: Option<(f64, f64)>,
) -> SolarPosition {
    let instant = CalendarInstant::new(year, month, day, hour, minute, 0.0).unwrap();
    let location = location.map(|(lat, lon)| GeographicLocation::new(lat, lon).unwrap());
    meeus::solar_position(&instant, location).unwrap()
}

#[test]
fn example_7a_sputnik_launch() {
    let instant = CalendarInstant::new(1957, 10, 4, 19, 26, 24.0).unwrap();
    assert_eq!(instant.julian_day(Default::default()).unwrap(), 2_436_116.31);
}

#[test]
fn example_12a_apparent_sidereal_time() {
    // 1987 April 10, 0h UT: θ₀ = 13h10m46.1351s
    let jd = JulianDate::new(2_446_895.5, 0.0).unwrap();
    let sun = meeus::apparent_sun(&jd).unwrap();
    let expected = (13.0 + 10.0 / 60.0 + 46.1351 / 3600.0) * 15.0;
    assert_abs_diff_eq!(sun.apparent_sidereal_time(), expected, epsilon = 1e-5);
}

#[test]
fn example_22a_nutation_and_obliquity() {
    let nutation = nutation::nutation_and_obliquity(2_446_895.5);

    assert_eq!(significant(nutation.delta_psi, 5), significant(-0.001_052_231_13, 5));
    assert_eq!(significant(nutation.delta_epsilon, 5), significant(0.002_622_922_42, 5));
    assert_eq!(significant(nutation.epsilon, 7), significant(23.443_569_213, 7));
    assert_abs_diff_eq!(nutation.delta_psi, -0.001_052_203_08, epsilon = 1e-11);
    assert_abs_diff_eq!(nutation.delta_epsilon, 0.002_622_922_42, epsilon = 1e-11);
}

#[test]
fn example_25b_earth_position() {
    let earth = earth::earth_position(2_448_908.5);

    assert_abs_diff_eq!(earth.longitude, 19.907_372, epsilon = 1e-6);
    assert_abs_diff_eq!(earth.latitude, -0.000_179, epsilon = 1e-6);
    assert_abs_diff_eq!(earth.radius, 0.997_607_75, epsilon = 1e-8);
}

#[test]
fn example_25b_apparent_position() {
    let jd = JulianDate::new(2_448_908.5, 0.0).unwrap();
    let position = meeus::solar_position_from_julian(jd, None).unwrap();

    assert_abs_diff_eq!(position.right_ascension(), 198.378_178, epsilon = 1e-5);
    assert_abs_diff_eq!(position.declination(), -7.783_871, epsilon = 1e-5);
    assert_abs_diff_eq!(position.right_ascension(), 198.378_178_048_084_7, epsilon = EPSILON);
    assert_abs_diff_eq!(position.declination(), -7.783_870_557_769_687, epsilon = EPSILON);
    assert_eq!(position.horizontal(), None);
}

#[test]
fn example_28b_equation_of_time() {
    let jd = JulianDate::new(2_448_908.5, 0.0).unwrap();
    let sun = meeus::apparent_sun(&jd).unwrap();

    // E = 13m42.7s with the full VSOP87 theory
    assert_abs_diff_eq!(sun.equation_of_time(), 13.711, epsilon = 0.005);
    assert_abs_diff_eq!(sun.equation_of_time(), 13.709_404_641_960_836, epsilon = EPSILON);
}

#[test]
fn modelled_delta_t_shifts_the_ephemeris_day() {
    let position = position_at((1992, 10, 13, 0, 0), None);
    let delta_t = DeltaT::estimate(1992, 10);

    let instant = CalendarInstant::from_date(1992, 10, 13).unwrap();
    let jd = JulianDate::from_instant(&instant).unwrap();
    assert_abs_diff_eq!(
        jd.julian_ephemeris_day(),
        2_448_908.5 + delta_t / 86_400.0,
        epsilon = 1e-9
    );

    assert_abs_diff_eq!(position.right_ascension(), 198.378_809_331_532_3, epsilon = EPSILON);
    assert_abs_diff_eq!(position.declination(), -7.784_125_553_497_041_5, epsilon = EPSILON);
    assert_abs_diff_eq!(position.equation_of_time(), 13.709_569_916_292_248, epsilon = EPSILON);
}

#[test]
fn observed_delta_t_overrides_the_model() {
    let instant = CalendarInstant::from_date(1992, 10, 13).unwrap();
    let jd = JulianDate::from_instant(&instant).unwrap().with_delta_t(0.0);
    let position = meeus::solar_position_from_julian(jd, None).unwrap();

    assert_abs_diff_eq!(position.right_ascension(), 198.378_178_048_084_7, epsilon = EPSILON);
}

#[test]
fn boulder_at_j2000() {
    let position = position_at((2000, 1, 1, 12, 0), Some((40.0, -105.0)));

    assert_abs_diff_eq!(position.right_ascension(), 281.278_313_714_882_8, epsilon = EPSILON);
    assert_abs_diff_eq!(position.declination(), -23.032_471_374_448_086, epsilon = EPSILON);
    assert_abs_diff_eq!(position.equation_of_time(), -3.281_580_525_762_82, epsilon = EPSILON);
    assert_abs_diff_eq!(position.azimuth().unwrap(), 99.042_337, epsilon = HORIZONTAL_EPSILON);
    assert_abs_diff_eq!(position.altitude().unwrap(), -26.137_981, epsilon = HORIZONTAL_EPSILON);
}

#[test]
fn san_francisco_summer_solstice() {
    let san_francisco = Some((37.7749, -122.4194));

    // Local noon (PDT)
    let noon = position_at((2023, 6, 21, 19, 0), san_francisco);
    assert_abs_diff_eq!(noon.right_ascension(), 90.175_021_559_313_9, epsilon = EPSILON);
    assert_abs_diff_eq!(noon.declination(), 23.438_361_490_525_857, epsilon = EPSILON);
    assert_abs_diff_eq!(noon.equation_of_time(), -1.835_704_091_538_673_3, epsilon = EPSILON);
    assert_abs_diff_eq!(noon.azimuth().unwrap(), 128.634_784, epsilon = HORIZONTAL_EPSILON);
    assert_abs_diff_eq!(noon.altitude().unwrap(), 69.231_348, epsilon = HORIZONTAL_EPSILON);

    // 05:00 PDT, before sunrise
    let dawn = position_at((2023, 6, 21, 12, 0), san_francisco);
    assert_abs_diff_eq!(dawn.azimuth().unwrap(), 51.422_665, epsilon = HORIZONTAL_EPSILON);
    assert_abs_diff_eq!(dawn.altitude().unwrap(), -8.429_528, epsilon = HORIZONTAL_EPSILON);
}

#[test]
fn equinox_over_null_island() {
    let position = position_at((2024, 3, 20, 12, 0), Some((0.0, 0.0)));

    assert_abs_diff_eq!(position.right_ascension(), 0.337_685_302_189_409_84, epsilon = EPSILON);
    assert_abs_diff_eq!(position.declination(), 0.146_543_928_633_546_07, epsilon = EPSILON);
    assert_abs_diff_eq!(position.equation_of_time(), -7.305_207_646_846_384, epsilon = EPSILON);
    assert_abs_diff_eq!(position.azimuth().unwrap(), 84.485_347, epsilon = HORIZONTAL_EPSILON);
    assert_abs_diff_eq!(position.altitude().unwrap(), 88.474_916, epsilon = HORIZONTAL_EPSILON);
}

#[test]
fn vienna_summer_morning() {
    let position = position_at((2026, 6, 21, 10, 0), Some((48.21, 16.37)));

    assert_abs_diff_eq!(position.right_ascension(), 90.069_079_219_923_14, epsilon = EPSILON);
    assert_abs_diff_eq!(position.declination(), 23.437_933_961_180_75, epsilon = EPSILON);
    assert_abs_diff_eq!(position.equation_of_time(), -1.795_729_215_454_685, epsilon = EPSILON);
    assert_abs_diff_eq!(position.azimuth().unwrap(), 151.337_508, epsilon = HORIZONTAL_EPSILON);
    assert_abs_diff_eq!(position.altitude().unwrap(), 62.926_358, epsilon = HORIZONTAL_EPSILON);
}

#[test]
fn netherlands_night_with_zero_delta_t() {
    let instant = CalendarInstant::from_date(2006, 4, 15).unwrap();
    let jd = JulianDate::from_instant(&instant).unwrap().with_delta_t(0.0);
    let location = GeographicLocation::new(52.0, 4.0).unwrap();
    let position = meeus::solar_position_from_julian(jd, Some(location)).unwrap();

    assert_abs_diff_eq!(position.azimuth().unwrap(), 4.428_749, epsilon = HORIZONTAL_EPSILON);
    assert_abs_diff_eq!(position.altitude().unwrap(), -28.267_935, epsilon = HORIZONTAL_EPSILON);
}

#[test]
fn one_instant_many_observers() {
    let instant = CalendarInstant::new(2026, 6, 21, 10, 0, 0.0).unwrap();
    let sun = meeus::apparent_sun(&JulianDate::from_instant(&instant).unwrap()).unwrap();

    for lat in (-80..=80).step_by(20) {
        for lon in (-180..=180).step_by(45) {
            let location = GeographicLocation::new(f64::from(lat), f64::from(lon)).unwrap();
            let split = sun.position(Some(&location)).unwrap();
            let combined = meeus::solar_position(&instant, Some(location)).unwrap();
            assert_eq!(split, combined, "mismatch at ({lat}, {lon})");
        }
    }
}
