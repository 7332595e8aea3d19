//! Sweep many observers at one instant, reusing the time-dependent part.

use meeus_sun::time::{CalendarInstant, JulianDate};
use meeus_sun::{GeographicLocation, meeus};

fn main() -> Result<(), meeus_sun::Error> {
    let instant = CalendarInstant::new(2024, 3, 20, 12, 0, 0.0)?;
    let sun = meeus::apparent_sun(&JulianDate::from_instant(&instant)?)?;

    println!("March equinox 2024, 12:00 UTC");
    println!(
        "  α = {:.4}°  δ = {:.4}°  E = {:.2} min  θ₀ = {:.4}°\n",
        sun.right_ascension(),
        sun.declination(),
        sun.equation_of_time(),
        sun.apparent_sidereal_time()
    );

    println!("{:>8} {:>9} {:>9}", "lat", "azimuth", "altitude");
    for lat in (-60..=60).step_by(15) {
        let location = GeographicLocation::new(f64::from(lat), 0.0)?;
        let horizontal = sun.horizontal(&location)?;
        println!(
            "{:>7}° {:>8.3}° {:>8.3}°",
            lat,
            horizontal.azimuth(),
            horizontal.altitude()
        );
    }

    let (sunlit, total) = (-180..180)
        .step_by(10)
        .flat_map(|lon| (-80..=80).step_by(10).map(move |lat| (lat, lon)))
        .try_fold((0_u32, 0_u32), |(sunlit, total), (lat, lon)| {
            let location = GeographicLocation::new(f64::from(lat), f64::from(lon))?;
            let up = sun.horizontal(&location)?.is_sun_up();
            Ok::<_, meeus_sun::Error>((sunlit + u32::from(up), total + 1))
        })?;
    println!("\nSun above the horizon at {sunlit} of {total} grid points");

    Ok(())
}
