//! Basic solar position calculation example.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use meeus_sun::{GeographicLocation, meeus, time::DeltaT};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: Calculate solar position using FixedOffset timezone
    let datetime_fixed = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>()?;

    // Example 2: Same time using UTC
    // 19:00 UTC = 12:00 PDT
    let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap();
    let san_francisco = GeographicLocation::new(37.7749, -122.4194)?;

    println!(
        "Estimated ΔT for June 2023: {:.1} s",
        DeltaT::estimate_from_date_like(datetime_utc)
    );

    let position_fixed = meeus::solar_position_at(datetime_fixed, Some(san_francisco))?;
    let position_utc = meeus::solar_position_at(datetime_utc, Some(san_francisco))?;

    println!("Solar position for San Francisco on June 21, 2023 at noon Pacific Time:");
    println!("  Right ascension: {:.6}°", position_fixed.right_ascension());
    println!("  Declination: {:.6}°", position_fixed.declination());
    println!("  Equation of time: {:.3} min", position_fixed.equation_of_time());

    if let Some(horizontal) = position_fixed.horizontal() {
        println!("  Azimuth: {:.3}°", horizontal.azimuth());
        println!("  Altitude: {:.3}°", horizontal.altitude());

        if horizontal.is_sun_up() {
            println!("  Sun is above the horizon");
        } else {
            println!("  Sun is below the horizon");
        }
    }

    println!(
        "\nFixedOffset and UTC produce identical results: {}",
        position_fixed == position_utc
    );

    // Without a location only the geocentric quantities are available
    let geocentric = meeus::solar_position_at(datetime_utc, None)?;
    println!(
        "Without a location: azimuth = {:?}, altitude = {:?}",
        geocentric.azimuth(),
        geocentric.altitude()
    );

    Ok(())
}
