//! The vector drawing surface the sweep renders onto.
//!
//! The engine only ever builds paths, strokes them (keeping the path) and
//! fills them. Pixel access is the backend's business.

use crate::types::Rgb;

/// A 2D path-based drawing target in pixel coordinates.
///
/// Semantics follow the usual "current path" model: `move_to` starts a
/// subpath, `line_to` extends it, `stroke_preserve` outlines the current path
/// and keeps it, `fill` paints its interior and clears it.
pub trait DrawSurface {
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn stroke_preserve(&mut self);
    fn fill(&mut self);
    fn set_color(&mut self, color: Rgb);
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn move_to(&mut self, x: f32, y: f32) {
        (**self).move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        (**self).line_to(x, y);
    }

    fn stroke_preserve(&mut self) {
        (**self).stroke_preserve();
    }

    fn fill(&mut self) {
        (**self).fill();
    }

    fn set_color(&mut self, color: Rgb) {
        (**self).set_color(color);
    }
}

/// One call made against a [`DrawSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceOp {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    StrokePreserve,
    Fill,
    SetColor(Rgb),
}

/// A surface that only remembers what it was asked to do.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Number of filled shapes
    pub fn fill_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == SurfaceOp::Fill).count()
    }

    /// Every point handed to `move_to`/`line_to`
    pub fn points(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            SurfaceOp::MoveTo(x, y) | SurfaceOp::LineTo(x, y) => Some((x, y)),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn move_to(&mut self, x: f32, y: f32) {
        self.ops.push(SurfaceOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ops.push(SurfaceOp::LineTo(x, y));
    }

    fn stroke_preserve(&mut self) {
        self.ops.push(SurfaceOp::StrokePreserve);
    }

    fn fill(&mut self) {
        self.ops.push(SurfaceOp::Fill);
    }

    fn set_color(&mut self, color: Rgb) {
        self.ops.push(SurfaceOp::SetColor(color));
    }
}
