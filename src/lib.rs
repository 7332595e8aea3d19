//! # Meeus Sun
//!
//! Apparent position of the sun and the equation of time, following Jean Meeus,
//! "Astronomical Algorithms" (2nd ed., Willmann-Bell, 1998).

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The pipeline runs from a civil UTC instant to:
//! - **Julian Day** and **Julian Ephemeris Day**, with ΔT estimated from the
//!   Espenak & Meeus polynomial fits
//! - Earth's **heliocentric position** from the abridged VSOP87 series
//! - **Nutation** and the **obliquity of the ecliptic** (IAU 1980 theory)
//! - the sun's apparent **right ascension**, **declination** and the
//!   **equation of time**, plus **azimuth** and **altitude** for an optional observer
//!
//! ## Features
//!
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, native or `libm` math
//! - Pure functions over static coefficient tables: thread-safe, no hidden state
//! - Split functions for bulk calculations (one instant, many observers)
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: `Serialize`/`Deserialize` for the public value types
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! meeus-sun = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! meeus-sun = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! meeus-sun = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Solar Position (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use meeus_sun::{meeus, GeographicLocation};
//! use chrono::{DateTime, FixedOffset};
//!
//! // Sun position for Vienna at noon
//! let datetime = "2026-06-21T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let vienna = GeographicLocation::new(48.21, 16.37).unwrap();
//! let position = meeus::solar_position_at(datetime, Some(vienna)).unwrap();
//!
//! println!("Azimuth: {:.3}°", position.azimuth().unwrap());
//! println!("Altitude: {:.3}°", position.altitude().unwrap());
//! println!("Equation of time: {:.2} min", position.equation_of_time());
//! # }
//! ```
//!
//! ### Solar Position (numeric API, no chrono)
//! ```rust
//! use meeus_sun::{meeus, time::CalendarInstant, GeographicLocation};
//!
//! let instant = CalendarInstant::new(2026, 6, 21, 10, 0, 0.0).unwrap();
//! let vienna = GeographicLocation::new(48.21, 16.37).unwrap();
//! let position = meeus::solar_position(&instant, Some(vienna)).unwrap();
//!
//! // Without a location only the equatorial coordinates are computed
//! let geocentric = meeus::solar_position(&instant, None).unwrap();
//! assert_eq!(geocentric.azimuth(), None);
//! assert_eq!(geocentric.declination(), position.declination());
//! ```
//!
//! ### Julian Days
//! ```rust
//! use meeus_sun::time::{julian_day, CalendarInstant, CalendarSystem, DeltaT};
//!
//! let instant = CalendarInstant::new(1957, 10, 4, 19, 26, 24.0).unwrap();
//! assert_eq!(julian_day(&instant, CalendarSystem::Gregorian).unwrap(), 2_436_116.31);
//! assert_eq!(DeltaT::estimate(2000, 1), 63.87);
//! ```
//!
//! ## Coordinate System
//!
//! - **Longitude**: east of Greenwich positive (-180° to +180°)
//! - **Right ascension**: degrees, 0° to 360°
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Altitude**: 0° = horizon, 90° = directly overhead (-90° to +90°), no refraction

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of reference values in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::meeus::{ApparentSun, apparent_sun, solar_position, solar_position_from_julian};
pub use crate::time::{CalendarInstant, CalendarSystem, DeltaT, JulianDate};
pub use crate::types::{GeographicLocation, HorizontalCoordinates, SolarPosition};

// Algorithm modules
pub mod meeus;
pub mod series;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
