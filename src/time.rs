use chrono::{DateTime, TimeDelta, Timelike, Utc};

use crate::constants::{
    j2000, Degree, Hour, DEGREES_PER_HOUR, LST_DAILY_RATE, LST_OFFSET, LST_PER_MINUTE,
    MS_PER_DAY, MS_PER_HOUR,
};
use crate::conversion::normalize_degrees;

/// Number of days elapsed since the J2000.0 epoch (2000-01-01T12:00:00Z).
///
/// The difference is taken on elapsed milliseconds (leap seconds are not counted), so the
/// result is exact to the millisecond: negative before J2000.0 and fractional within a day.
///
/// Argument
/// --------
/// * `instant`: the UTC instant
///
/// Return
/// ------
/// * signed, fractional number of days
pub fn days_since_j2000(instant: &DateTime<Utc>) -> f64 {
    let elapsed = *instant - j2000();
    elapsed.num_milliseconds() as f64 / MS_PER_DAY
}

/// Local sidereal time at a given longitude, in degrees within `[0, 360)`.
///
/// Low precision formula from <http://www.stargazing.net/kepler/altaz.html>:
///
/// ```text
/// LST = 100.46 + 0.985647·d + long + 15·UT_hour + 0.25·UT_minute
/// ```
///
/// where `d` is [`days_since_j2000`] including its fractional part. The time of day is
/// therefore counted twice (once through `d`, once through the hour/minute terms); the
/// reference values this crate is checked against are computed exactly that way.
///
/// Arguments
/// ---------
/// * `instant`: the UTC instant
/// * `longitude`: observer longitude in degrees, positive east
pub fn local_sidereal_time(instant: &DateTime<Utc>, longitude: Degree) -> Degree {
    let days = days_since_j2000(instant);

    let degrees = LST_OFFSET
        + LST_DAILY_RATE * days
        + longitude
        + DEGREES_PER_HOUR * f64::from(instant.hour())
        + LST_PER_MINUTE * f64::from(instant.minute());

    normalize_degrees(degrees)
}

/// Midnight (00:00:00.000 UTC) of the UTC day containing `instant`.
pub fn utc_midnight(instant: &DateTime<Utc>) -> DateTime<Utc> {
    let elapsed_today = i64::from(instant.num_seconds_from_midnight()) * 1000
        + i64::from(instant.timestamp_subsec_millis());
    *instant - TimeDelta::milliseconds(elapsed_today)
}

/// Shift an instant by a fractional number of hours, rounded to the millisecond.
///
/// Return
/// ------
/// * `None` when `hours` is not finite or the shifted instant falls outside the range
///   chrono can represent (about ±262 000 years)
pub fn offset_by_hours(instant: &DateTime<Utc>, hours: Hour) -> Option<DateTime<Utc>> {
    let ms = (hours * MS_PER_HOUR).round();
    // i64::MAX as f64 rounds up to 2^63, which no longer fits
    if !ms.is_finite() || ms.abs() >= i64::MAX as f64 {
        return None;
    }
    let delta = TimeDelta::try_milliseconds(ms as i64)?;
    instant.checked_add_signed(delta)
}

#[cfg(test)]
pub(crate) mod time_test {
    use super::*;
    use chrono::TimeZone;

    pub(crate) fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_days_since_j2000() {
        assert_eq!(days_since_j2000(&utc(2000, 1, 1, 12, 0, 0)), 0.0);
        assert_eq!(days_since_j2000(&utc(2000, 1, 2, 12, 0, 0)), 1.0);

        let d = days_since_j2000(&utc(2008, 4, 4, 15, 30, 0));
        assert!(d > 3016.1458333 && d < 3016.1458334, "{d}");

        let d = days_since_j2000(&utc(1998, 8, 10, 23, 10, 0));
        assert!(d < -508.5347 && d > -508.5348, "{d}");
    }

    #[test]
    fn test_days_since_j2000_sub_day() {
        assert_eq!(days_since_j2000(&utc(2000, 1, 1, 18, 0, 0)), 0.25);
        assert_eq!(days_since_j2000(&utc(2000, 1, 1, 0, 0, 0)), -0.5);
    }

    #[test]
    fn test_local_sidereal_time() {
        // 2310 UT, 10th August 1998 at Birmingham UK (longitude 1°55' west)
        let lst = local_sidereal_time(&utc(1998, 8, 10, 23, 10, 0), -1.9166666666666667);
        assert!(lst > 304.8076 && lst < 304.8077, "{lst}");
    }

    #[test]
    fn test_local_sidereal_time_range() {
        let start = utc(2024, 3, 1, 0, 0, 0);
        for i in 0..200 {
            let instant = offset_by_hours(&start, i as f64 * 0.37).unwrap();
            for long in [-180.0, -1.5, 0.0, 97.3, 180.0] {
                let lst = local_sidereal_time(&instant, long);
                assert!((0.0..360.0).contains(&lst), "{lst}");
            }
        }
    }

    #[test]
    fn test_local_sidereal_time_longitude_shift() {
        let instant = utc(2021, 6, 21, 21, 45, 0);
        let lst_greenwich = local_sidereal_time(&instant, 0.0);
        let lst_east = local_sidereal_time(&instant, 30.0);
        assert!((normalize_degrees(lst_east - lst_greenwich) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_utc_midnight() {
        let instant = Utc.timestamp_millis_opt(1_700_000_123_456).unwrap();
        let midnight = utc_midnight(&instant);
        assert_eq!(midnight, utc(2023, 11, 14, 0, 0, 0));
        assert_eq!(utc_midnight(&midnight), midnight);
    }

    #[test]
    fn test_offset_by_hours() {
        let midnight = utc(2021, 1, 1, 0, 0, 0);
        assert_eq!(
            offset_by_hours(&midnight, 12.0),
            Some(utc(2021, 1, 1, 12, 0, 0))
        );
        assert_eq!(
            offset_by_hours(&midnight, -1.5),
            Some(utc(2020, 12, 31, 22, 30, 0))
        );
        assert_eq!(
            offset_by_hours(&midnight, 0.1),
            Some(utc(2021, 1, 1, 0, 6, 0))
        );
    }

    #[test]
    fn test_offset_by_hours_out_of_range() {
        let midnight = utc(2021, 1, 1, 0, 0, 0);
        assert_eq!(offset_by_hours(&midnight, f64::NAN), None);
        assert_eq!(offset_by_hours(&midnight, f64::INFINITY), None);
        assert_eq!(offset_by_hours(&midnight, f64::NEG_INFINITY), None);
        // beyond i64 milliseconds
        assert_eq!(offset_by_hours(&midnight, 1e15), None);
        assert_eq!(offset_by_hours(&midnight, -1e15), None);
        // fits in i64 milliseconds, but not in chrono's date range
        assert_eq!(offset_by_hours(&midnight, 1e10), None);
        assert!(offset_by_hours(&midnight, 1e6).is_some());
    }
}
