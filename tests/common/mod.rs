#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use chrono::{DateTime, TimeZone, Utc};
use skygraph::plot::config::PlotConfig;

pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

/// `[-1, 1]²` on a 100×100 raster, sampled every pixel.
pub fn unit_square(line_width: u32) -> PlotConfig {
    PlotConfig::builder()
        .x_bounds(-1.0, 1.0)
        .y_bounds(-1.0, 1.0)
        .size(100, 100)
        .line_width(line_width)
        .build()
        .unwrap()
}

pub fn assert_points_close(actual: &[(f64, f64)], expected: &[(f64, f64)], epsilon: f64) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_abs_diff_eq!(a.0, e.0, epsilon = epsilon);
        assert_abs_diff_eq!(a.1, e.1, epsilon = epsilon);
    }
}
