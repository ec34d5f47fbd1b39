//! # Reactive graph
//!
//! [`Graph`](crate::plot::graph::Graph) ties a [`PlotConfig`], a plotted function and an
//! optional [`DrawingSurface`] together, and re-renders as a side effect of changing the
//! watched inputs:
//!
//! - the function ([`Graph::set_function`](crate::plot::graph::Graph::set_function)),
//! - the domain bounds `x_min`/`x_max` and codomain bounds `y_min`/`y_max`.
//!
//! Other options (interval, stroke, background, size) are stored on change and used by the next
//! render, without triggering one. Every render fully clears the surface before drawing.

use tracing::debug;

use crate::plot::config::PlotConfig;
use crate::plot::render;
use crate::plot::surface::DrawingSurface;
use crate::skygraph_errors::SkyGraphError;

/// Boxed function plotted by a [`Graph`]; `None` means "undefined at x".
pub type PlotFunction = Box<dyn Fn(f64) -> Option<f64>>;

pub struct Graph<S> {
    config: PlotConfig,
    function: PlotFunction,
    surface: Option<S>,
    renders: usize,
}

impl<S: DrawingSurface> Graph<S> {
    /// Create a graph of the undefined function (an empty plot), without surface.
    ///
    /// Errors
    /// ------
    /// * [`SkyGraphError::InvalidPlotParameter`] when `config` does not pass
    ///   [`PlotConfig::validate`]
    pub fn new(config: PlotConfig) -> Result<Self, SkyGraphError> {
        config.validate()?;
        Ok(Graph {
            config,
            function: Box::new(|_| None),
            surface: None,
            renders: 0,
        })
    }

    /// Set the initial function without rendering.
    pub fn with_function<F>(mut self, f: F) -> Self
    where
        F: Fn(f64) -> Option<f64> + 'static,
    {
        self.function = Box::new(f);
        self
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Number of renders that reached a surface.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Evaluate the plotted function.
    pub fn evaluate(&self, x: f64) -> Option<f64> {
        (self.function)(x)
    }

    /// Attach a surface and render on it.
    pub fn attach(&mut self, surface: S) -> Result<(), SkyGraphError> {
        self.surface = Some(surface);
        self.redraw()
    }

    /// Detach and return the surface; later changes are not rendered until a new one is
    /// attached.
    pub fn detach(&mut self) -> Option<S> {
        self.surface.take()
    }

    /// Replace the plotted function and render.
    pub fn set_function<F>(&mut self, f: F) -> Result<(), SkyGraphError>
    where
        F: Fn(f64) -> Option<f64> + 'static,
    {
        self.function = Box::new(f);
        self.redraw()
    }

    /// Change the domain; renders when it differs from the current one.
    ///
    /// Return
    /// ------
    /// * `Ok(true)` if the bounds changed, i.e. a render was due
    pub fn set_x_bounds(&mut self, x_min: f64, x_max: f64) -> Result<bool, SkyGraphError> {
        self.update(|config| {
            config.x_min = x_min;
            config.x_max = x_max;
        })
    }

    /// Change the codomain; renders when it differs from the current one.
    pub fn set_y_bounds(&mut self, y_min: f64, y_max: f64) -> Result<bool, SkyGraphError> {
        self.update(|config| {
            config.y_min = y_min;
            config.y_max = y_max;
        })
    }

    /// Apply an arbitrary edit to the configuration.
    ///
    /// The edited configuration is validated first; on error the graph is left unchanged.
    /// A render happens only when one of the four bounds changed.
    ///
    /// Return
    /// ------
    /// * `Ok(true)` if a bound changed, i.e. a render was due (it only reaches a surface when
    ///   one is attached)
    pub fn update<E>(&mut self, edit: E) -> Result<bool, SkyGraphError>
    where
        E: FnOnce(&mut PlotConfig),
    {
        let mut next = self.config.clone();
        edit(&mut next);
        next.validate()?;

        let bounds_changed = self.config.bounds_differ(&next);
        self.config = next;

        if bounds_changed {
            self.redraw()?;
        }
        Ok(bounds_changed)
    }

    /// Render now, whatever changed.
    pub fn redraw(&mut self) -> Result<(), SkyGraphError> {
        let Some(surface) = self.surface.as_mut() else {
            debug!("graph has no surface, redraw skipped");
            return Ok(());
        };

        render(&self.config, &self.function, Some(surface))?;
        self.renders += 1;
        Ok(())
    }
}
