use tracing::trace;

use crate::plot::config::{PlotConfig, MAX_SAMPLES};
use crate::skygraph_errors::SkyGraphError;

/// Sample `f` over the configured domain and map the retained samples to raster coordinates.
///
/// `x` goes from `x_min` to `x_max` (inclusive) in steps of `interval / x_scale`, so consecutive
/// samples are `interval` pixels apart on screen. Each `x` is computed from its sample index
/// rather than accumulated, and clamped to `x_max`, which keeps the last sample on `x_max`
/// when it lies on the grid.
///
/// Samples are skipped, never ending the scan, when `x` or `f(x)` is not finite or when `f`
/// returns `None`. Retained samples are mapped with
///
/// ```text
/// px = (x − x_min)·x_scale
/// py = height − (y − y_min)·y_scale
/// ```
///
/// (raster origin at the top-left corner).
///
/// Arguments
/// ---------
/// * `config`: domain, codomain, raster size and sampling interval
/// * `f`: the sampled function, `None` meaning "undefined at x"
///
/// Return
/// ------
/// * the polyline in raster coordinates, in increasing `x` order. Consecutive points are
///   meant to be joined even when samples between them were skipped. An empty or inverted
///   domain, or a non-positive step, gives an empty polyline.
///
/// Errors
/// ------
/// * [`SkyGraphError::InvalidPlotParameter`] when covering the domain would take more than
///   [`MAX_SAMPLES`] samples
pub fn sample_path<F>(config: &PlotConfig, f: F) -> Result<Vec<(f64, f64)>, SkyGraphError>
where
    F: Fn(f64) -> Option<f64>,
{
    let height = f64::from(config.height);
    let x_scale = config.x_scale();
    let y_scale = config.y_scale();
    let step = config.step();

    if !(step.is_finite() && step > 0.0) {
        return Ok(Vec::new());
    }

    let last_index = ((config.x_max - config.x_min) / step * (1.0 + 1e-9)).floor();
    if !(last_index >= 0.0) {
        return Ok(Vec::new());
    }
    if last_index > MAX_SAMPLES {
        return Err(SkyGraphError::InvalidPlotParameter(format!(
            "interval too small: more than {MAX_SAMPLES} samples per render"
        )));
    }
    let n_samples = last_index as usize + 1;

    let mut path = Vec::with_capacity(n_samples);
    let mut skipped = 0usize;

    for i in 0..n_samples {
        let x = (config.x_min + i as f64 * step).min(config.x_max);
        if !x.is_finite() {
            skipped += 1;
            continue;
        }

        let Some(y) = f(x).filter(|y| y.is_finite()) else {
            skipped += 1;
            continue;
        };

        let px = (x - config.x_min) * x_scale;
        let py = height - (y - config.y_min) * y_scale;
        if !(px.is_finite() && py.is_finite()) {
            skipped += 1;
            continue;
        }
        path.push((px, py));
    }

    trace!(n_samples, retained = path.len(), skipped, "sampled function");
    Ok(path)
}
