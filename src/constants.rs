//! # Constants and type definitions for skygraph
//!
//! This module centralizes the **conversion factors**, the **sidereal time coefficients** and
//! the **angle/time type aliases** shared by the altitude computation and the plotter.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians, hours ↔ degrees, days ↔ milliseconds)
//! - The J2000.0 reference instant (2000-01-01 12:00:00 UTC)
//! - Coefficients of the low-precision local sidereal time formula
//! - Core type aliases used across the crate

use chrono::{DateTime, TimeDelta, Utc};

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Degrees in a full turn
pub const FULL_TURN: f64 = 360.0;

/// Degrees of rotation per hour of right ascension (24 h = 360°)
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Milliseconds in one hour
pub const MS_PER_HOUR: f64 = 1000.0 * 60.0 * 60.0;

/// Milliseconds in one (86 400 s) day
pub const MS_PER_DAY: f64 = MS_PER_HOUR * 24.0;

// -------------------------------------------------------------------------------------------------
// Reference epoch
// -------------------------------------------------------------------------------------------------

/// Unix timestamp (ms) of J2000.0, 2000-01-01 12:00:00 UTC
pub const J2000_UNIX_MS: i64 = 946_728_000_000;

/// The J2000.0 reference instant as a UTC date.
///
/// Built by offsetting the Unix epoch, which cannot fail for a constant this close to it.
pub fn j2000() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::milliseconds(J2000_UNIX_MS)
}

// -------------------------------------------------------------------------------------------------
// Local sidereal time (low precision, see http://www.stargazing.net/kepler/altaz.html)
// -------------------------------------------------------------------------------------------------

/// Sidereal angle at J2000.0, degrees
pub const LST_OFFSET: f64 = 100.46;

/// Sidereal drift per day since J2000.0, degrees/day
pub const LST_DAILY_RATE: f64 = 0.985647;

/// Contribution of one UTC minute, degrees
pub const LST_PER_MINUTE: f64 = 0.25;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Angle or duration in hours
pub type Hour = f64;

#[cfg(test)]
mod constants_test {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_j2000_reference() {
        let epoch = j2000();
        assert_eq!(
            (epoch.year(), epoch.month(), epoch.day()),
            (2000, 1, 1)
        );
        assert_eq!((epoch.hour(), epoch.minute(), epoch.second()), (12, 0, 0));
        assert_eq!(epoch.timestamp_millis(), J2000_UNIX_MS);
    }

    #[test]
    fn test_ms_per_day() {
        assert_eq!(MS_PER_DAY, 86_400_000.0);
    }
}
