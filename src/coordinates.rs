//! # Observer and target coordinates
//!
//! Value types for the two fixed inputs of an altitude computation, and the hour angle →
//! altitude stage of the chain:
//!
//! ```text
//! instant ──days_since_j2000──▶ LST(longitude) ──(− RA)──▶ hour angle ──(lat, dec)──▶ altitude
//! ```
//!
//! - [`GeoCoordinate`](crate::coordinates::GeoCoordinate): geodetic latitude/longitude of the
//!   observer, **longitude positive east**.
//! - [`EquatorialCoordinate`](crate::coordinates::EquatorialCoordinate): right ascension and
//!   declination of the target, both stored in **degrees**.
//!
//! No refraction, precession or nutation is applied: the altitude is purely geometric with
//! respect to the coordinates as given.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use skygraph::coordinates::{EquatorialCoordinate, GeoCoordinate};
//!
//! let paris = GeoCoordinate::new(48.8566, 2.3522);
//! let m13 = EquatorialCoordinate::from_hours(16.0 + 41.7 / 60.0, 36.0 + 28.0 / 60.0);
//!
//! let instant = Utc.with_ymd_and_hms(2024, 6, 21, 22, 0, 0).unwrap();
//! let altitude = m13.altitude_at(&paris, &instant);
//! assert!((-90.0..=90.0).contains(&altitude));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Hour};
use crate::conversion::{hours_to_degrees, normalize_degrees, to_degrees, to_radians};
use crate::time::local_sidereal_time;

/// Geographic position of an observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Geodetic latitude in degrees, positive north
    pub latitude: Degree,
    /// Longitude in degrees, positive east
    pub longitude: Degree,
}

impl GeoCoordinate {
    pub fn new(latitude: Degree, longitude: Degree) -> Self {
        GeoCoordinate {
            latitude,
            longitude,
        }
    }

    /// Local sidereal time at this longitude, see [`local_sidereal_time`].
    pub fn local_sidereal_time(&self, instant: &DateTime<Utc>) -> Degree {
        local_sidereal_time(instant, self.longitude)
    }
}

/// Position of a target on the celestial sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoordinate {
    /// Right ascension in degrees
    pub right_ascension: Degree,
    /// Declination in degrees
    pub declination: Degree,
}

impl EquatorialCoordinate {
    pub fn new(right_ascension: Degree, declination: Degree) -> Self {
        EquatorialCoordinate {
            right_ascension,
            declination,
        }
    }

    /// Build a coordinate from a right ascension expressed in hours.
    pub fn from_hours(right_ascension: Hour, declination: Degree) -> Self {
        Self::new(hours_to_degrees(right_ascension), declination)
    }

    /// Altitude of this target above the horizon of `observer` at `instant`, in degrees.
    ///
    /// See [`altitude_at_instant`] for the computation chain.
    pub fn altitude_at(&self, observer: &GeoCoordinate, instant: &DateTime<Utc>) -> Degree {
        altitude_at_instant(
            instant,
            observer.latitude,
            observer.longitude,
            self.right_ascension,
            self.declination,
        )
    }
}

/// Hour angle of a target, in degrees within `[0, 360)`.
///
/// Arguments
/// ---------
/// * `lst`: local sidereal time in degrees
/// * `right_ascension`: right ascension of the target in degrees
pub fn hour_angle(lst: Degree, right_ascension: Degree) -> Degree {
    normalize_degrees(lst - right_ascension)
}

/// Altitude of a target above the horizon, in degrees.
///
/// ```text
/// sin(alt) = sin(lat)·sin(dec) + cos(lat)·cos(dec)·cos(ha)
/// ```
///
/// `sin(alt)` is clamped to `[-1, 1]` before the arcsine so that rounding on near-zenith
/// or near-nadir configurations gives ±90° instead of `NaN`. `NaN` inputs still propagate.
///
/// Arguments
/// ---------
/// * `latitude`: observer latitude in degrees
/// * `declination`: target declination in degrees
/// * `hour_angle`: target hour angle in degrees
pub fn altitude_degrees(latitude: Degree, declination: Degree, hour_angle: Degree) -> Degree {
    let lat = to_radians(latitude);
    let dec = to_radians(declination);
    let ha = to_radians(hour_angle);

    let sin_alt = lat.sin() * dec.sin() + lat.cos() * dec.cos() * ha.cos();

    to_degrees(sin_alt.clamp(-1.0, 1.0).asin())
}

/// Altitude of a target at a given instant and observer location.
///
/// Composes [`local_sidereal_time`], [`hour_angle`] and [`altitude_degrees`].
///
/// Arguments
/// ---------
/// * `instant`: UTC instant of the observation
/// * `latitude`, `longitude`: observer location in degrees (longitude positive east)
/// * `right_ascension`, `declination`: target coordinates in degrees
pub fn altitude_at_instant(
    instant: &DateTime<Utc>,
    latitude: Degree,
    longitude: Degree,
    right_ascension: Degree,
    declination: Degree,
) -> Degree {
    let lst = local_sidereal_time(instant, longitude);
    let ha = hour_angle(lst, right_ascension);
    altitude_degrees(latitude, declination, ha)
}
