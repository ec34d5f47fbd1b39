//! # Plot configuration
//!
//! [`PlotConfig`](crate::plot::config::PlotConfig) gathers every option of the function plotter,
//! with the defaults below, and [`PlotConfigBuilder`](crate::plot::config::PlotConfigBuilder)
//! provides a fluent, validating way to override them.
//!
//! | field          | default         | meaning                                         |
//! |----------------|-----------------|-------------------------------------------------|
//! | `x_min`        | `-10`           | left bound of the sampled domain                |
//! | `x_max`        | `10`            | right bound of the sampled domain (inclusive)   |
//! | `y_min`        | `-10`           | value mapped to the bottom edge                 |
//! | `y_max`        | `10`            | value mapped to the top edge                    |
//! | `width`        | `1000`          | raster width in pixels                          |
//! | `height`       | `1000`          | raster height in pixels                         |
//! | `stroke_color` | `#fbf`          | polyline color                                  |
//! | `line_width`   | `5`             | polyline width in pixels                        |
//! | `background`   | `transparent`   | color the raster is cleared to before drawing   |
//! | `interval`     | `1`             | spacing between samples, **in pixels**          |
//!
//! `interval` is expressed in output pixels, not in domain units: the sampling step in domain
//! units is `interval · (x_max − x_min) / width`.
//!
//! ## Example
//!
//! ```rust
//! use skygraph::plot::config::{Color, PlotConfig};
//!
//! let config = PlotConfig::builder()
//!     .x_bounds(-12.0, 12.0)
//!     .y_bounds(0.0, 90.0)
//!     .interval(0.1)
//!     .background("#000".parse().unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.stroke_color, Color::Rgb(255, 187, 255));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::skygraph_errors::SkyGraphError;

/// Upper bound on the number of samples of a single render (`width / interval`).
pub const MAX_SAMPLES: f64 = 10_000_000.0;

/// A paint used for the stroke or the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    /// Nothing is painted
    Transparent,
    /// Opaque RGB color
    Rgb(u8, u8, u8),
}

impl Color {
    fn hex_digit(c: char) -> Option<u8> {
        c.to_digit(16).map(|d| d as u8)
    }
}

impl FromStr for Color {
    type Err = SkyGraphError;

    /// Parse a CSS-like color.
    /// - `"transparent"` (any case) → `Transparent`
    /// - `"#rgb"` → each digit doubled (`#fbf` is `#ffbbff`)
    /// - `"#rrggbb"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(Color::Transparent);
        }

        let invalid = || SkyGraphError::InvalidColor(s.to_string());
        let hex = trimmed.strip_prefix('#').ok_or_else(invalid)?;
        let digits = hex
            .chars()
            .map(Color::hex_digit)
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(invalid)?;

        match digits.as_slice() {
            [r, g, b] => Ok(Color::Rgb(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => Ok(Color::Rgb(
                r1 * 16 + r0,
                g1 * 16 + g0,
                b1 * 16 + b0,
            )),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = SkyGraphError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Transparent => write!(f, "transparent"),
            Color::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

/// Options of the function plotter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Raster width in pixels
    pub width: u32,
    /// Raster height in pixels
    pub height: u32,
    pub stroke_color: Color,
    /// Stroke width in pixels
    pub line_width: u32,
    pub background: Color,
    /// Target spacing between two samples, in pixels
    pub interval: f64,
}

impl PlotConfig {
    /// Construct a new [`PlotConfig`] with the default values.
    ///
    /// This is equivalent to calling [`PlotConfig::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`PlotConfigBuilder`] initialized with the default values.
    pub fn builder() -> PlotConfigBuilder {
        PlotConfigBuilder::new()
    }

    /// Horizontal scale, pixels per domain unit.
    pub fn x_scale(&self) -> f64 {
        f64::from(self.width) / (self.x_max - self.x_min)
    }

    /// Vertical scale, pixels per codomain unit.
    pub fn y_scale(&self) -> f64 {
        f64::from(self.height) / (self.y_max - self.y_min)
    }

    /// Sampling step expressed in domain units.
    pub fn step(&self) -> f64 {
        self.interval / self.x_scale()
    }

    /// True when the domain or codomain bounds differ between `self` and `other`.
    ///
    /// Those four bounds are the configuration values that require a redraw when they change.
    pub fn bounds_differ(&self, other: &PlotConfig) -> bool {
        self.x_min != other.x_min
            || self.x_max != other.x_max
            || self.y_min != other.y_min
            || self.y_max != other.y_max
    }

    /// Check that the configuration can be rendered.
    ///
    /// Errors
    /// ------
    /// * [`SkyGraphError::InvalidPlotParameter`] when a bound is not finite, a range is empty
    ///   or inverted, the raster is empty, `interval` is not strictly positive, or the render
    ///   would need more than [`MAX_SAMPLES`] samples.
    pub fn validate(&self) -> Result<(), SkyGraphError> {
        let bounds = [self.x_min, self.x_max, self.y_min, self.y_max];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(SkyGraphError::InvalidPlotParameter(
                "plot bounds must be finite".into(),
            ));
        }
        if self.x_max <= self.x_min {
            return Err(SkyGraphError::InvalidPlotParameter(
                "x_max must be greater than x_min".into(),
            ));
        }
        if self.y_max <= self.y_min {
            return Err(SkyGraphError::InvalidPlotParameter(
                "y_max must be greater than y_min".into(),
            ));
        }
        if self.width == 0 || self.height == 0 {
            return Err(SkyGraphError::InvalidPlotParameter(
                "width and height must be > 0".into(),
            ));
        }
        if !(self.interval.is_finite() && self.interval > 0.0) {
            return Err(SkyGraphError::InvalidPlotParameter(
                "interval must be finite and > 0".into(),
            ));
        }
        if f64::from(self.width) / self.interval > MAX_SAMPLES {
            return Err(SkyGraphError::InvalidPlotParameter(format!(
                "interval too small: more than {MAX_SAMPLES} samples per render"
            )));
        }
        if self.line_width == 0 {
            return Err(SkyGraphError::InvalidPlotParameter(
                "line_width must be > 0".into(),
            ));
        }
        Ok(())
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            x_min: -10.0,
            x_max: 10.0,
            y_min: -10.0,
            y_max: 10.0,
            width: 1000,
            height: 1000,
            stroke_color: Color::Rgb(0xff, 0xbb, 0xff),
            line_width: 5,
            background: Color::Transparent,
            interval: 1.0,
        }
    }
}

impl fmt::Display for PlotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PlotConfig(x∈[{}, {}], y∈[{}, {}], {}x{} px, interval={} px, stroke={} w={}, background={})",
            self.x_min,
            self.x_max,
            self.y_min,
            self.y_max,
            self.width,
            self.height,
            self.interval,
            self.stroke_color,
            self.line_width,
            self.background,
        )
    }
}

/// Builder for [`PlotConfig`], with validation.
#[derive(Debug, Clone)]
pub struct PlotConfigBuilder {
    config: PlotConfig,
}

impl Default for PlotConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotConfigBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            config: PlotConfig::default(),
        }
    }

    pub fn x_bounds(mut self, x_min: f64, x_max: f64) -> Self {
        self.config.x_min = x_min;
        self.config.x_max = x_max;
        self
    }

    pub fn y_bounds(mut self, y_min: f64, y_max: f64) -> Self {
        self.config.y_min = y_min;
        self.config.y_max = y_max;
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn stroke_color(mut self, v: Color) -> Self {
        self.config.stroke_color = v;
        self
    }

    pub fn line_width(mut self, v: u32) -> Self {
        self.config.line_width = v;
        self
    }

    pub fn background(mut self, v: Color) -> Self {
        self.config.background = v;
        self
    }

    /// Spacing between samples, in pixels.
    pub fn interval(mut self, v: f64) -> Self {
        self.config.interval = v;
        self
    }

    /// Validate and return the configuration.
    ///
    /// See [`PlotConfig::validate`] for the rules.
    pub fn build(self) -> Result<PlotConfig, SkyGraphError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
