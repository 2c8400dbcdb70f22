//! Eye-space to surface projection.
//!
//! Not a real perspective transform: every point is pulled towards the
//! vanishing point by `k = 2^(-z / CELL_SIZE)`, so each cell of depth halves the
//! apparent size of what lies behind it. Cheap, monotonic, and good enough for
//! a corridor of boxes.

use crate::types::{CELL_SIZE, DEFAULT_VIEW_SIZE, VANISHING_POINT};

/// A point in eye space: lateral `x`, height `y`, depth `z`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Maps eye-space points onto a `width` × `height` pixel surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    width: f32,
    height: f32,
}

impl Projector {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Foreshorten `(x, y)` at depth `z` into the 10×10 unit square.
    ///
    /// At `z = 0` (the eye plane) the point is unchanged.
    pub fn foreshorten(x: f32, y: f32, z: f32) -> (f32, f32) {
        let k = 2f32.powf(-z / CELL_SIZE);
        (
            (x - VANISHING_POINT) * k + VANISHING_POINT,
            (y - VANISHING_POINT) * k + VANISHING_POINT,
        )
    }

    /// Project an eye-space point to surface pixels (y grows downwards).
    ///
    /// # Examples
    ///
    /// ```
    /// use dungeon_view_engine::Projector;
    ///
    /// let p = Projector::new(640.0, 480.0);
    /// assert_eq!(p.project(5.0, 5.0, 30.0), (320.0, 240.0));
    /// assert_eq!(p.project(0.0, 0.0, 0.0), (0.0, 480.0));
    /// ```
    pub fn project(&self, x: f32, y: f32, z: f32) -> (f32, f32) {
        let (ux, uy) = Self::foreshorten(x, y, z);
        (
            ux / CELL_SIZE * self.width,
            (CELL_SIZE - uy) / CELL_SIZE * self.height,
        )
    }

    /// Pixel position of the vanishing point
    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(DEFAULT_VIEW_SIZE as f32, DEFAULT_VIEW_SIZE as f32)
    }
}
