//! Raster [`DrawSurface`] backed by a tiny-skia pixmap.
//!
//! Anti-aliasing is off: the pixmap is shown through half-block cells, where
//! blended edge pixels only read as noise.

use tiny_skia::{Color, FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use crate::engine::DrawSurface;
use crate::types::Rgb;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Segment {
    MoveTo(f32, f32),
    LineTo(f32, f32),
}

pub struct SkiaSurface {
    pixmap: Pixmap,
    segments: Vec<Segment>,
    color: Rgb,
    stroke: Stroke,
}

impl SkiaSurface {
    /// A `width` × `height` surface, or `None` if either side is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let pixmap = Pixmap::new(width, height)?;
        Some(Self {
            pixmap,
            segments: Vec::with_capacity(16),
            color: Rgb::WHITE,
            stroke: Stroke {
                width: 1.0,
                ..Stroke::default()
            },
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixmap
            .fill(Color::from_rgba8(color.r, color.g, color.b, 255));
        self.segments.clear();
    }

    /// Color at a pixel; black outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        self.pixmap
            .pixel(x, y)
            .map(|p| Rgb::new(p.red(), p.green(), p.blue()))
            .unwrap_or(Rgb::BLACK)
    }

    fn paint(&self) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(self.color.r, self.color.g, self.color.b, 255);
        paint.anti_alias = false;
        paint
    }

    fn path(&self) -> Option<Path> {
        let mut pb = PathBuilder::new();
        for segment in &self.segments {
            match *segment {
                Segment::MoveTo(x, y) => pb.move_to(x, y),
                Segment::LineTo(x, y) => pb.line_to(x, y),
            }
        }
        pb.finish()
    }
}

impl DrawSurface for SkiaSurface {
    fn move_to(&mut self, x: f32, y: f32) {
        self.segments.push(Segment::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.segments.push(Segment::LineTo(x, y));
    }

    fn stroke_preserve(&mut self) {
        // Degenerate paths (a lone point, or all vertices projected onto one
        // spot) have nothing to stroke.
        let Some(path) = self.path() else {
            return;
        };
        let paint = self.paint();
        self.pixmap
            .stroke_path(&path, &paint, &self.stroke, Transform::identity(), None);
    }

    fn fill(&mut self) {
        if let Some(path) = self.path() {
            let paint = self.paint();
            self.pixmap.fill_path(
                &path,
                &paint,
                FillRule::EvenOdd,
                Transform::identity(),
                None,
            );
        }
        self.segments.clear();
    }

    fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(surface: &mut SkiaSurface, x0: f32, y0: f32, x1: f32, y1: f32) {
        surface.move_to(x0, y0);
        surface.line_to(x1, y0);
        surface.line_to(x1, y1);
        surface.line_to(x0, y1);
        surface.line_to(x0, y0);
    }

    #[test]
    fn zero_sized_surface_is_refused() {
        assert!(SkiaSurface::new(0, 10).is_none());
        assert!(SkiaSurface::new(10, 0).is_none());
    }

    #[test]
    fn clear_paints_every_pixel() {
        let mut surface = SkiaSurface::new(4, 4).unwrap();
        surface.clear(Rgb::new(1, 2, 3));
        assert_eq!(surface.pixel(0, 0), Rgb::new(1, 2, 3));
        assert_eq!(surface.pixel(3, 3), Rgb::new(1, 2, 3));
        assert_eq!(surface.pixel(4, 0), Rgb::BLACK);
    }

    #[test]
    fn fill_paints_the_interior() {
        let mut surface = SkiaSurface::new(20, 20).unwrap();
        surface.clear(Rgb::BLACK);
        let red = Rgb::new(200, 0, 0);
        surface.set_color(red);
        square(&mut surface, 4.0, 4.0, 16.0, 16.0);
        surface.fill();
        assert_eq!(surface.pixel(10, 10), red);
        assert_eq!(surface.pixel(1, 1), Rgb::BLACK);
    }

    #[test]
    fn stroke_preserve_keeps_the_path_for_fill() {
        let mut surface = SkiaSurface::new(20, 20).unwrap();
        surface.clear(Rgb::BLACK);
        // Edges off the pixel grid keep the coverage test unambiguous.
        square(&mut surface, 3.8, 3.8, 16.2, 16.2);
        surface.set_color(Rgb::WHITE);
        surface.stroke_preserve();
        let green = Rgb::new(0, 200, 0);
        surface.set_color(green);
        surface.fill();

        assert_eq!(surface.pixel(10, 10), green);
        // The outside half of the outline survives the fill.
        assert_eq!(surface.pixel(3, 10), Rgb::WHITE);
    }

    #[test]
    fn fill_without_path_is_harmless() {
        let mut surface = SkiaSurface::new(4, 4).unwrap();
        surface.clear(Rgb::BLACK);
        surface.fill();
        surface.stroke_preserve();
        assert_eq!(surface.pixel(1, 1), Rgb::BLACK);
    }
}
