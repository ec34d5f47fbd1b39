//! # Drawing surfaces
//!
//! The plotter never owns pixels: it draws into a caller-owned surface through the
//! [`DrawingSurface`](crate::plot::surface::DrawingSurface) trait, which exposes the three
//! operations a render needs (resize, clear, stroke a polyline).
//!
//! Two implementations are provided:
//!
//! - [`BitmapSurface`](crate::plot::surface::BitmapSurface): an in-memory RGB raster with a
//!   coverage mask, rasterized with the `plotters` bitmap backend and saved as RGBA PNG.
//! - [`RecordingSurface`](crate::plot::surface::RecordingSurface): keeps the list of draw
//!   commands it received, to inspect exactly what a render produced.

use std::path::Path;

use plotters::prelude::{BitMapBackend, Color as _, IntoDrawingArea, PathElement, RGBColor};

use crate::plot::config::Color;
use crate::skygraph_errors::SkyGraphError;

fn render_error(err: impl std::fmt::Display) -> SkyGraphError {
    SkyGraphError::RenderError(err.to_string())
}

/// A 2D raster drawing context.
pub trait DrawingSurface {
    /// Current size in pixels, `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Set the size in pixels. Previous content is discarded.
    fn resize(&mut self, width: u32, height: u32);

    /// Erase the whole surface to `background`.
    fn clear(&mut self, background: Color) -> Result<(), SkyGraphError>;

    /// Stroke the polyline joining `points` (raster coordinates, origin top-left).
    fn stroke_path(
        &mut self,
        points: &[(f64, f64)],
        color: Color,
        line_width: u32,
    ) -> Result<(), SkyGraphError>;
}

/// In-memory raster: an RGB buffer, 3 bytes per pixel, row major, plus one coverage byte per
/// pixel.
///
/// Clearing to [`Color::Transparent`] zeroes both; clearing to an opaque color makes every
/// pixel opaque. Strokes make the pixels they touch opaque, so a PNG saved after drawing on a
/// transparent background keeps that background transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapSurface {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
    alpha: Vec<u8>,
}

impl BitmapSurface {
    const PIXEL_SIZE: usize = 3;

    pub fn new(width: u32, height: u32) -> Self {
        BitmapSurface {
            width,
            height,
            buffer: vec![0; Self::buffer_len(width, height)],
            alpha: vec![0; width as usize * height as usize],
        }
    }

    fn buffer_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * Self::PIXEL_SIZE
    }

    /// Raw RGB bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// RGBA bytes, 4 per pixel, alpha taken from the coverage mask.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.buffer
            .chunks_exact(Self::PIXEL_SIZE)
            .zip(&self.alpha)
            .flat_map(|(px, &a)| [px[0], px[1], px[2], a])
            .collect()
    }

    /// Color of the pixel at `(x, y)`, `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * Self::PIXEL_SIZE;
        Some((
            self.buffer[offset],
            self.buffer[offset + 1],
            self.buffer[offset + 2],
        ))
    }

    /// Alpha of the pixel at `(x, y)` (0 transparent, 255 opaque), `None` outside the raster.
    pub fn alpha(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.alpha[y as usize * self.width as usize + x as usize])
    }

    /// Number of pixels equal to `color`.
    pub fn count_pixels(&self, color: (u8, u8, u8)) -> usize {
        self.buffer
            .chunks_exact(Self::PIXEL_SIZE)
            .filter(|px| (px[0], px[1], px[2]) == color)
            .count()
    }

    /// Encode the raster as an RGBA image file (format from the extension, e.g. `.png`).
    pub fn save(&self, path: &Path) -> Result<(), SkyGraphError> {
        image::save_buffer(
            path,
            &self.to_rgba(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
        .map_err(render_error)
    }
}

/// Stroke `pixels` into an RGB buffer of the given size.
fn draw_polyline(
    buffer: &mut [u8],
    size: (u32, u32),
    pixels: &[(i32, i32)],
    color: RGBColor,
    line_width: u32,
) -> Result<(), SkyGraphError> {
    let root = BitMapBackend::with_buffer(buffer, size).into_drawing_area();
    root.draw(&PathElement::new(pixels.to_vec(), color.stroke_width(line_width)))
        .map_err(render_error)?;
    root.present().map_err(render_error)
}

impl DrawingSurface for BitmapSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        if (width, height) != (self.width, self.height) {
            *self = BitmapSurface::new(width, height);
        }
    }

    fn clear(&mut self, background: Color) -> Result<(), SkyGraphError> {
        match background {
            Color::Transparent => {
                self.buffer.fill(0);
                self.alpha.fill(0);
                Ok(())
            }
            Color::Rgb(r, g, b) => {
                let root = BitMapBackend::with_buffer(&mut self.buffer, (self.width, self.height))
                    .into_drawing_area();
                root.fill(&RGBColor(r, g, b)).map_err(render_error)?;
                root.present().map_err(render_error)?;
                self.alpha.fill(u8::MAX);
                Ok(())
            }
        }
    }

    fn stroke_path(
        &mut self,
        points: &[(f64, f64)],
        color: Color,
        line_width: u32,
    ) -> Result<(), SkyGraphError> {
        let Color::Rgb(r, g, b) = color else {
            return Ok(());
        };
        if points.len() < 2 || self.buffer.is_empty() {
            return Ok(());
        }

        // float → i32 casts saturate, keeping far off-raster points on the right side
        let pixels: Vec<(i32, i32)> = points
            .iter()
            .map(|&(x, y)| (x.round() as i32, y.round() as i32))
            .collect();
        let size = (self.width, self.height);

        draw_polyline(&mut self.buffer, size, &pixels, RGBColor(r, g, b), line_width)?;

        // same stroke in white on black marks the covered pixels
        let mut coverage = vec![0u8; self.buffer.len()];
        draw_polyline(&mut coverage, size, &pixels, RGBColor(255, 255, 255), line_width)?;
        for (a, px) in self.alpha.iter_mut().zip(coverage.chunks_exact(Self::PIXEL_SIZE)) {
            if px.iter().any(|&c| c != 0) {
                *a = u8::MAX;
            }
        }
        Ok(())
    }
}

/// A draw command received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize { width: u32, height: u32 },
    Clear(Color),
    Stroke {
        points: Vec<(f64, f64)>,
        color: Color,
        line_width: u32,
    },
}

/// A surface that records the commands it receives instead of rasterizing them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        RecordingSurface {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Every command received so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of clears received so far, i.e. the number of renders.
    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear(_)))
            .count()
    }

    /// Polylines stroked since the last clear, which is what the surface currently shows.
    pub fn visible_paths(&self) -> Vec<&[(f64, f64)]> {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear(_)))
            .map_or(0, |i| i + 1);

        self.commands[start..]
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Stroke { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.push(DrawCommand::Resize { width, height });
    }

    fn clear(&mut self, background: Color) -> Result<(), SkyGraphError> {
        self.commands.push(DrawCommand::Clear(background));
        Ok(())
    }

    fn stroke_path(
        &mut self,
        points: &[(f64, f64)],
        color: Color,
        line_width: u32,
    ) -> Result<(), SkyGraphError> {
        self.commands.push(DrawCommand::Stroke {
            points: points.to_vec(),
            color,
            line_width,
        });
        Ok(())
    }
}

#[cfg(test)]
mod surface_test {
    use super::*;

    const PINK: (u8, u8, u8) = (255, 187, 255);

    #[test]
    fn test_bitmap_clear() {
        let mut surface = BitmapSurface::new(20, 10);
        assert_eq!(surface.as_bytes().len(), 20 * 10 * 3);

        surface.clear(Color::Rgb(10, 20, 30)).unwrap();
        assert_eq!(surface.count_pixels((10, 20, 30)), 200);

        surface.clear(Color::Transparent).unwrap();
        assert_eq!(surface.count_pixels((0, 0, 0)), 200);
    }

    #[test]
    fn test_bitmap_stroke_horizontal_line() {
        let mut surface = BitmapSurface::new(50, 50);
        surface.clear(Color::Rgb(0, 0, 0)).unwrap();
        surface
            .stroke_path(&[(5.0, 25.0), (45.0, 25.0)], Color::Rgb(255, 187, 255), 1)
            .unwrap();

        assert_eq!(surface.pixel(25, 25), Some(PINK));
        assert_eq!(surface.pixel(25, 5), Some((0, 0, 0)));
        assert!(surface.count_pixels(PINK) >= 40);
    }

    #[test]
    fn test_bitmap_stroke_needs_two_points() {
        let mut surface = BitmapSurface::new(10, 10);
        surface
            .stroke_path(&[(5.0, 5.0)], Color::Rgb(255, 187, 255), 3)
            .unwrap();
        surface
            .stroke_path(&[(1.0, 1.0), (8.0, 8.0)], Color::Transparent, 3)
            .unwrap();
        assert_eq!(surface.count_pixels((0, 0, 0)), 100);
    }

    #[test]
    fn test_bitmap_transparent_background_keeps_alpha() {
        let mut surface = BitmapSurface::new(50, 50);
        surface.clear(Color::Transparent).unwrap();
        surface
            .stroke_path(&[(5.0, 25.0), (45.0, 25.0)], Color::Rgb(255, 187, 255), 1)
            .unwrap();

        assert_eq!(surface.alpha(25, 25), Some(255));
        assert_eq!(surface.alpha(25, 5), Some(0));
        assert_eq!(surface.to_rgba()[(25 * 50 + 25) * 4..][..4], [255, 187, 255, 255]);

        surface.clear(Color::Rgb(0, 0, 0)).unwrap();
        assert_eq!(surface.alpha(25, 5), Some(255));
        surface.clear(Color::Transparent).unwrap();
        assert_eq!(surface.alpha(25, 25), Some(0));
    }

    #[test]
    fn test_bitmap_resize() {
        let mut surface = BitmapSurface::new(10, 10);
        surface.clear(Color::Rgb(1, 1, 1)).unwrap();
        surface.resize(4, 3);
        assert_eq!(surface.size(), (4, 3));
        assert_eq!(surface.as_bytes().len(), 36);
        assert_eq!(surface.pixel(4, 0), None);
    }

    #[test]
    fn test_recording_visible_paths() {
        let mut surface = RecordingSurface::new(10, 10);
        surface
            .stroke_path(&[(0.0, 0.0), (1.0, 1.0)], Color::Transparent, 1)
            .unwrap();
        assert_eq!(surface.visible_paths().len(), 1);

        surface.clear(Color::Transparent).unwrap();
        assert!(surface.visible_paths().is_empty());

        surface
            .stroke_path(&[(2.0, 2.0), (3.0, 3.0)], Color::Rgb(0, 0, 0), 1)
            .unwrap();
        assert_eq!(surface.visible_paths(), vec![&[(2.0, 2.0), (3.0, 3.0)][..]]);
        assert_eq!(surface.clear_count(), 1);
    }
}
