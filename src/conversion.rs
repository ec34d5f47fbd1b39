use crate::constants::{Degree, Hour, Radian, DEGREES_PER_HOUR, FULL_TURN, RADEG};

/// Reduce an angle to the range `[0, 360)` degrees.
///
/// Works in one step for any finite input (including values thousands of degrees away from
/// the principal range). Non-finite inputs give `NaN`.
///
/// Arguments
/// ---------
/// * `degrees`: the angle to normalize
///
/// Return
/// ------
/// * the equivalent angle in `[0, 360)`
pub fn normalize_degrees(degrees: Degree) -> Degree {
    let d = degrees.rem_euclid(FULL_TURN);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if d >= FULL_TURN {
        0.0
    } else {
        d
    }
}

/// Degrees → radians
pub fn to_radians(degrees: Degree) -> Radian {
    degrees * RADEG
}

/// Radians → degrees
pub fn to_degrees(radians: Radian) -> Degree {
    radians / RADEG
}

/// Convert an angle expressed in hours (e.g. a right ascension) to degrees.
pub fn hours_to_degrees(hours: Hour) -> Degree {
    hours * DEGREES_PER_HOUR
}

/// Combine sexagesimal components into a decimal value.
///
/// The sign of the result follows `whole`; `minutes` and `seconds` are taken as magnitudes.
/// A negative zero `whole` (as in `-00 30 00`) yields a negative result.
pub fn sexagesimal_to_decimal(whole: f64, minutes: f64, seconds: f64) -> f64 {
    let magnitude = whole.abs() + minutes.abs() / 60.0 + seconds.abs() / 3600.0;
    if whole.is_sign_negative() {
        -magnitude
    } else {
        magnitude
    }
}

/// Split a sexagesimal string into its numeric components.
///
/// Accepts `"A B"` or `"A B C"`; missing seconds are zero.
fn split_sexagesimal(field: &str) -> Option<(f64, f64, f64)> {
    let parts: Vec<&str> = field.split_whitespace().collect();
    match parts.as_slice() {
        [a, b] => Some((a.parse().ok()?, b.parse().ok()?, 0.0)),
        [a, b, c] => Some((a.parse().ok()?, b.parse().ok()?, c.parse().ok()?)),
        _ => None,
    }
}

/// Parse a right ascension string to degrees
///
/// Arguments
/// ---------
/// * `ra`: a string representing the right ascension in the format `HH MM SS.SS` or `HH MM.M`
///
/// Returns
/// -------
/// * `Option<Degree>`: the right ascension in degrees, `None` if the input format is invalid.
pub fn parse_ra_to_deg(ra: &str) -> Option<Degree> {
    let (h, m, s) = split_sexagesimal(ra)?;
    if h < 0.0 || !(0.0..60.0).contains(&m) || !(0.0..60.0).contains(&s) {
        return None;
    }
    Some(hours_to_degrees(sexagesimal_to_decimal(h, m, s)))
}

/// Parse a declination string to degrees
///
/// Arguments
/// ---------
/// * `dec`: a string representing the declination in the format `±DD MM SS.SS` or `±DD MM.M`
///
/// Returns
/// -------
/// * `Option<Degree>`: the declination in degrees, `None` if the input format is invalid.
pub fn parse_dec_to_deg(dec: &str) -> Option<Degree> {
    let negative = dec.trim_start().starts_with('-');
    let unsigned = dec.trim_start().trim_start_matches(&['-', '+'][..]);
    let (d, m, s) = split_sexagesimal(unsigned)?;
    if d < 0.0 || !(0.0..60.0).contains(&m) || !(0.0..60.0).contains(&s) {
        return None;
    }
    let value = sexagesimal_to_decimal(d, m, s);
    Some(if negative { -value } else { value })
}
