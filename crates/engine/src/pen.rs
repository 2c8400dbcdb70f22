//! Drawing context for one render pass.
//!
//! Primitives are described in the local frame of the tile they belong to,
//! with the tile's left edge at `x = 0`. The pen shifts every vertex sideways
//! by the current lateral bias before projecting it, so the same wall outline
//! lands in the right column whatever tile it is drawn for.

use crate::projector::{Point3, Projector};
use crate::surface::DrawSurface;
use crate::types::Rgb;

pub struct Pen<'a, S: DrawSurface + ?Sized> {
    surface: &'a mut S,
    projector: Projector,
    bias: f32,
}

impl<'a, S: DrawSurface + ?Sized> Pen<'a, S> {
    pub fn new(surface: &'a mut S, projector: Projector) -> Self {
        Self {
            surface,
            projector,
            bias: 0.0,
        }
    }

    pub fn projector(&self) -> Projector {
        self.projector
    }

    /// Lateral shift applied to every vertex, in eye-space units
    pub fn bias(&self) -> f32 {
        self.bias
    }

    pub fn set_bias(&mut self, bias: f32) {
        self.bias = bias;
    }

    /// Surface position of a tile-local point
    pub fn to_surface(&self, p: Point3) -> (f32, f32) {
        self.projector.project(p.x + self.bias, p.y, p.z)
    }

    pub fn move_to(&mut self, p: Point3) {
        let (x, y) = self.to_surface(p);
        self.surface.move_to(x, y);
    }

    pub fn line_to(&mut self, p: Point3) {
        let (x, y) = self.to_surface(p);
        self.surface.line_to(x, y);
    }

    /// Outline then fill a closed vertex loop.
    ///
    /// The loop is closed explicitly by returning to the first vertex. An
    /// empty loop draws nothing.
    pub fn polygon(&mut self, vertices: &[Point3], outline: Rgb, fill: Rgb) {
        let Some((&first, rest)) = vertices.split_first() else {
            return;
        };
        self.surface.set_color(outline);
        self.move_to(first);
        for &v in rest {
            self.line_to(v);
        }
        self.line_to(first);
        self.surface.stroke_preserve();
        self.surface.set_color(fill);
        self.surface.fill();
    }
}
