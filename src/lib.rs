//! # skygraph
//!
//! Altitude of a sky target from a ground observer, and a small function plotter to draw it.
//!
//! - [`time`]: days since J2000 and local sidereal time,
//! - [`coordinates`]: hour angle and altitude of an equatorial position,
//! - [`conversion`]: angle normalization and sexagesimal parsing,
//! - [`plot`]: sample a real function and stroke it on a raster,
//! - [`sky_tonight`]: the altitude of a target over the current day, as a plot.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use skygraph::coordinates::altitude_at_instant;
//!
//! let instant = Utc.with_ymd_and_hms(1998, 8, 10, 23, 10, 0).unwrap();
//! let altitude = altitude_at_instant(&instant, 52.5, -1.9166667, 250.425, 36.466667);
//! assert!((altitude - 49.169122).abs() < 1e-3);
//! ```

pub mod constants;
pub mod conversion;
pub mod coordinates;
pub mod plot;
pub mod sky_tonight;
pub mod skygraph_errors;
pub mod time;
