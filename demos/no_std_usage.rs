//! Example demonstrating usage without chrono.
//!
//! This shows how to use the numeric API available in no_std environments,
//! where users supply civil time components or Julian Days themselves.

use meeus_sun::time::{CalendarInstant, CalendarSystem, JulianDate, julian_day};
use meeus_sun::{GeographicLocation, meeus};

fn main() {
    // Example: Calculate solar position for 2024-06-21 12:00:00 UTC
    // Vienna: 48.21°N, 16.37°E

    println!("Solar positioning without chrono\n");

    let instant = CalendarInstant::new(2024, 6, 21, 12, 0, 0.0).expect("Valid date");
    let jd = JulianDate::from_instant(&instant).expect("Date after the Julian Day epoch");

    println!("Julian Day: {:.6}", jd.julian_day());
    println!("Delta T: {:.2} seconds (model estimate)", jd.delta_t());
    println!("Julian Ephemeris Day: {:.6}\n", jd.julian_ephemeris_day());

    let vienna = GeographicLocation::new(48.21, 16.37).expect("Valid coordinates");
    let position = meeus::solar_position_from_julian(jd, Some(vienna)).expect("Finite result");

    println!("Vienna:");
    println!("  Azimuth: {:.3}°", position.azimuth().unwrap_or(f64::NAN));
    println!("  Altitude: {:.3}°", position.altitude().unwrap_or(f64::NAN));
    println!("  Equation of time: {:.3} min\n", position.equation_of_time());

    // An observed ΔT can replace the model estimate
    let observed = jd.with_delta_t(69.2);
    let adjusted =
        meeus::solar_position_from_julian(observed, Some(vienna)).expect("Finite result");
    println!(
        "With observed ΔT = 69.2 s the declination moves by {:.2e}°\n",
        adjusted.declination() - position.declination()
    );

    // Historical dates: pick the calendar in civil use
    let calendar = CalendarSystem::for_date(1066, 10, 14);
    let hastings = CalendarInstant::new(1066, 10, 14, 9, 0, 0.0).expect("Valid date");
    let jd_hastings = julian_day(&hastings, calendar).expect("Date after the Julian Day epoch");
    println!("1066-10-14 09:00 ({calendar:?} calendar) = JD {jd_hastings:.4}");

    let back = JulianDate::new(jd_hastings, 0.0)
        .and_then(|jd| jd.to_calendar(calendar))
        .expect("Non-negative Julian Day");
    println!(
        "  and back: {}-{:02}-{:02} {:02}:{:02}",
        back.year(),
        back.month(),
        back.day(),
        back.hour(),
        back.minute()
    );

    // Dates before -4712-01-01 12:00 are outside the supported range
    let too_early = CalendarInstant::new(-4713, 6, 1, 0, 0, 0.0).expect("Valid components");
    match julian_day(&too_early, CalendarSystem::Julian) {
        Ok(jd) => println!("Unexpected JD {jd}"),
        Err(error) => println!("\n-4713-06-01: {error}"),
    }
}
