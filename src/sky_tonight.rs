//! # Altitude of a target tonight
//!
//! Wires the altitude computation into the function plotter: the plotted function maps an
//! offset in hours from midnight (UTC) to the altitude of a fixed target seen from a fixed
//! observer.
//!
//! ```text
//! hours ──offset_by_hours(midnight)──▶ instant ──altitude_at_instant(observer, target)──▶ degrees
//! ```
//!
//! A [`SkyScene`](crate::sky_tonight::SkyScene) holds the observer, the target and the plot
//! options. The default scene is the great globular cluster in Hercules (M13) seen from Paris,
//! plotted from noon to noon (`-12 h .. +12 h`) between the horizon and the zenith.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use skygraph::sky_tonight::SkyScene;
//! use skygraph::plot::surface::RecordingSurface;
//!
//! let scene = SkyScene::m13_over_paris();
//! let now = Utc.with_ymd_and_hms(2024, 6, 21, 15, 0, 0).unwrap();
//!
//! let mut graph = scene.graph(now).unwrap();
//! graph.attach(RecordingSurface::new(1000, 1000)).unwrap();
//! assert_eq!(graph.render_count(), 1);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Hour};
use crate::conversion::sexagesimal_to_decimal;
use crate::coordinates::{EquatorialCoordinate, GeoCoordinate};
use crate::plot::config::{PlotConfig, MAX_SAMPLES};
use crate::plot::graph::Graph;
use crate::plot::surface::DrawingSurface;
use crate::skygraph_errors::SkyGraphError;
use crate::time::{offset_by_hours, utc_midnight};

/// Observer, target and plot options of an altitude plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyScene {
    pub target_name: String,
    pub observer: GeoCoordinate,
    pub target: EquatorialCoordinate,
    #[serde(default = "SkyScene::default_plot")]
    pub plot: PlotConfig,
}

impl SkyScene {
    /// M13 from Paris, plotted over `[-12, 12]` hours and `[0, 90]` degrees every 0.1 px.
    pub fn m13_over_paris() -> Self {
        SkyScene {
            target_name: "M13".into(),
            observer: GeoCoordinate::new(48.8566, 2.3522),
            target: EquatorialCoordinate::from_hours(
                sexagesimal_to_decimal(16.0, 41.7, 0.0),
                sexagesimal_to_decimal(36.0, 28.0, 0.0),
            ),
            plot: Self::default_plot(),
        }
    }

    fn default_plot() -> PlotConfig {
        PlotConfig {
            x_min: -12.0,
            x_max: 12.0,
            y_min: 0.0,
            y_max: 90.0,
            interval: 0.1,
            ..PlotConfig::default()
        }
    }

    /// Parse a scene from JSON and validate its plot options.
    ///
    /// `plot` may be omitted (the default plot is used) or partial (missing fields take the
    /// plotter defaults).
    pub fn from_json(json: &str) -> Result<Self, SkyGraphError> {
        let scene: SkyScene = serde_json::from_str(json)?;
        scene.plot.validate()?;
        Ok(scene)
    }

    /// The altitude curve of this scene for the UTC day containing `now`.
    pub fn curve(&self, now: DateTime<Utc>) -> AltitudeCurve {
        AltitudeCurve::tonight(self.observer, self.target, now)
    }

    /// A graph of [`SkyScene::curve`], not yet attached to a surface.
    ///
    /// Fails with [`SkyGraphError::InvalidPlotParameter`] when `plot` was edited into an
    /// invalid state after loading.
    pub fn graph<S: DrawingSurface>(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Graph<S>, SkyGraphError> {
        let curve = self.curve(now);
        Ok(Graph::new(self.plot.clone())?
            .with_function(move |hours| Some(curve.altitude_at_hours(hours))))
    }
}

impl Default for SkyScene {
    fn default() -> Self {
        Self::m13_over_paris()
    }
}

/// Altitude of a target as a function of the time elapsed since a reference midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeCurve {
    pub observer: GeoCoordinate,
    pub target: EquatorialCoordinate,
    pub midnight: DateTime<Utc>,
}

impl AltitudeCurve {
    /// Curve anchored on midnight (UTC) of the day containing `now`.
    pub fn tonight(
        observer: GeoCoordinate,
        target: EquatorialCoordinate,
        now: DateTime<Utc>,
    ) -> Self {
        AltitudeCurve {
            observer,
            target,
            midnight: utc_midnight(&now),
        }
    }

    /// Altitude in degrees, `hours` after (or before, if negative) midnight.
    ///
    /// `NaN` when `hours` is not finite or lands outside the representable dates, so a
    /// plotter skips the sample.
    pub fn altitude_at_hours(&self, hours: Hour) -> Degree {
        match offset_by_hours(&self.midnight, hours) {
            Some(instant) => self.target.altitude_at(&self.observer, &instant),
            None => f64::NAN,
        }
    }

    /// Sample the curve every `step` hours over `[start, end]`, returning `(hours, altitude)`.
    ///
    /// Empty when a parameter is not finite, `step <= 0`, `end < start`, or the table would
    /// exceed [`MAX_SAMPLES`] rows.
    pub fn samples(&self, start: Hour, end: Hour, step: Hour) -> Vec<(Hour, Degree)> {
        let finite = start.is_finite() && end.is_finite() && step.is_finite();
        if !finite || step <= 0.0 || end < start {
            return Vec::new();
        }
        let last_index = ((end - start) / step * (1.0 + 1e-9)).floor();
        if !(last_index <= MAX_SAMPLES) {
            return Vec::new();
        }
        (0..=last_index as usize)
            .map(|i| {
                let hours = (start + i as f64 * step).min(end);
                (hours, self.altitude_at_hours(hours))
            })
            .collect()
    }

    /// Sample with the highest altitude over `[start, end]` at `step` hours resolution.
    pub fn culmination(&self, start: Hour, end: Hour, step: Hour) -> Option<(Hour, Degree)> {
        self.samples(start, end, step)
            .into_iter()
            .filter(|(_, alt)| alt.is_finite())
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}
