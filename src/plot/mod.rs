//! # Function plotter
//!
//! Samples a real function over a numeric domain and draws the resulting polyline into a
//! raster surface.
//!
//! ## Pipeline
//!
//! 1. **Configuration** ([`PlotConfig`](crate::plot::config::PlotConfig)): domain `[x_min, x_max]`,
//!    codomain `[y_min, y_max]`, raster size, stroke style, background and sampling interval.
//! 2. **Sampling** ([`sample_path`](crate::plot::sampler::sample_path)): `x` is stepped every
//!    `interval` pixels, samples where `x` or `f(x)` is not finite are skipped and the rest are
//!    mapped affinely to raster coordinates (y axis pointing down).
//! 3. **Drawing** ([`render`](crate::plot::render)): the surface is resized to the configured size,
//!    cleared to the background, then the polyline is stroked once. Points on both sides of a
//!    skipped sample are joined directly.
//! 4. **Re-rendering** ([`Graph`](crate::plot::graph::Graph)): keeps the configuration, the
//!    function and the surface together and redraws whenever the function or one of the four
//!    bounds changes.
//!
//! ## Example
//!
//! ```rust
//! use skygraph::plot::{config::PlotConfig, render, surface::BitmapSurface};
//!
//! let config = PlotConfig::builder()
//!     .x_bounds(-1.0, 1.0)
//!     .y_bounds(-1.0, 1.0)
//!     .size(100, 100)
//!     .build()
//!     .unwrap();
//!
//! let mut surface = BitmapSurface::new(100, 100);
//! let plotted = render(&config, |x: f64| Some(x * x), Some(&mut surface)).unwrap();
//! assert_eq!(plotted, 101);
//! ```
//!
//! ## Errors
//!
//! Invalid samples never fail a render. A missing surface makes [`render`](crate::plot::render) a
//! no-op. An invalid configuration is reported as
//! [`SkyGraphError::InvalidPlotParameter`](crate::skygraph_errors::SkyGraphError::InvalidPlotParameter)
//! and backend failures as
//! [`SkyGraphError::RenderError`](crate::skygraph_errors::SkyGraphError::RenderError).

pub mod config;
pub mod graph;
pub mod sampler;
pub mod surface;

use tracing::debug;

use crate::plot::config::PlotConfig;
use crate::plot::sampler::sample_path;
use crate::plot::surface::DrawingSurface;
use crate::skygraph_errors::SkyGraphError;

/// Clear `surface` and draw `f` on it.
///
/// Arguments
/// ---------
/// * `config`: plot options, see [`PlotConfig`]
/// * `f`: the plotted function, `None` meaning "undefined at x"
/// * `surface`: the target raster; `None` (no surface attached yet) makes the call a no-op
///
/// Return
/// ------
/// * the number of points of the stroked polyline (0 when nothing was drawn)
///
/// Errors
/// ------
/// * [`SkyGraphError::InvalidPlotParameter`] when `config` does not pass
///   [`PlotConfig::validate`]; the surface is left untouched
/// * [`SkyGraphError::RenderError`] on backend failures
pub fn render<S, F>(
    config: &PlotConfig,
    f: F,
    surface: Option<&mut S>,
) -> Result<usize, SkyGraphError>
where
    S: DrawingSurface + ?Sized,
    F: Fn(f64) -> Option<f64>,
{
    let Some(surface) = surface else {
        debug!("no drawing surface attached, skipping render");
        return Ok(0);
    };

    config.validate()?;

    surface.resize(config.width, config.height);
    surface.clear(config.background)?;

    let path = sample_path(config, f)?;
    debug!(points = path.len(), %config, "rendering function plot");

    if path.len() < 2 {
        return Ok(0);
    }

    surface.stroke_path(&path, config.stroke_color, config.line_width)?;
    Ok(path.len())
}

#[cfg(test)]
mod render_test {
    use super::*;
    use crate::plot::config::Color;
    use crate::plot::surface::{BitmapSurface, DrawCommand, RecordingSurface};

    fn unit_square() -> PlotConfig {
        PlotConfig::builder()
            .x_bounds(-1.0, 1.0)
            .y_bounds(-1.0, 1.0)
            .size(100, 100)
            .build()
            .unwrap()
    }

    #[test]
    fn test_render_without_surface() {
        let plotted = render::<RecordingSurface, _>(&unit_square(), Some, None).unwrap();
        assert_eq!(plotted, 0);
    }

    #[test]
    fn test_render_commands() {
        let config = unit_square();
        let mut surface = RecordingSurface::new(1, 1);
        let plotted = render(&config, Some, Some(&mut surface)).unwrap();

        assert_eq!(plotted, 101);
        let commands = surface.commands();
        assert_eq!(
            commands[..2],
            [
                DrawCommand::Resize {
                    width: 100,
                    height: 100
                },
                DrawCommand::Clear(Color::Transparent),
            ]
        );
        match &commands[2] {
            DrawCommand::Stroke {
                points,
                color,
                line_width,
            } => {
                assert_eq!(points.len(), 101);
                assert_eq!(*color, Color::Rgb(255, 187, 255));
                assert_eq!(*line_width, 5);
            }
            other => panic!("expected a stroke, got {other:?}"),
        }
    }

    #[test]
    fn test_render_undefined_function() {
        let mut surface = RecordingSurface::new(100, 100);
        let plotted = render(&unit_square(), |_| None, Some(&mut surface)).unwrap();

        assert_eq!(plotted, 0);
        assert_eq!(surface.commands().len(), 2);
        assert!(surface.visible_paths().is_empty());
    }

    #[test]
    fn test_render_into_bitmap() {
        let config = PlotConfig::builder()
            .x_bounds(-1.0, 1.0)
            .y_bounds(-1.0, 1.0)
            .size(100, 100)
            .line_width(1)
            .background(Color::Rgb(0, 0, 0))
            .build()
            .unwrap();
        let mut surface = BitmapSurface::new(10, 10);

        render(&config, |_| Some(0.0), Some(&mut surface)).unwrap();

        assert_eq!(surface.pixel(50, 50), Some((255, 187, 255)));
        assert_eq!(surface.pixel(50, 10), Some((0, 0, 0)));
    }

    #[test]
    fn test_render_clears_previous_content() {
        let config = PlotConfig::builder()
            .x_bounds(-1.0, 1.0)
            .y_bounds(-1.0, 1.0)
            .size(100, 100)
            .line_width(1)
            .background(Color::Rgb(0, 0, 0))
            .build()
            .unwrap();
        let mut surface = BitmapSurface::new(100, 100);

        render(&config, |_| Some(0.5), Some(&mut surface)).unwrap();
        assert_eq!(surface.pixel(50, 25), Some((255, 187, 255)));

        render(&config, |_| Some(-0.5), Some(&mut surface)).unwrap();
        assert_eq!(surface.pixel(50, 25), Some((0, 0, 0)));
        assert_eq!(surface.pixel(50, 75), Some((255, 187, 255)));
    }

    #[test]
    fn test_render_rejects_unvalidated_config() {
        let config = PlotConfig {
            x_min: 0.0,
            x_max: 1.0,
            interval: 1e-5,
            ..PlotConfig::default()
        };

        let mut surface = RecordingSurface::new(10, 10);
        let err = render(&config, Some, Some(&mut surface)).unwrap_err();
        assert!(matches!(err, SkyGraphError::InvalidPlotParameter(_)));
        assert!(surface.commands().is_empty());

        // nothing to draw on, nothing to check
        assert_eq!(render::<RecordingSurface, _>(&config, Some, None), Ok(0));
    }
}
