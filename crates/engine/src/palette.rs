//! Colors for each material.

use crate::types::Rgb;

/// What a face is made of; picks its colors from the [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    Wall,
    Door,
    Chest,
    Ladder,
}

/// Outline and fill colors per material, plus the empty-space background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub wall_outline: Rgb,
    pub wall_fill: Rgb,
    pub door_outline: Rgb,
    pub door_fill: Rgb,
    pub chest_outline: Rgb,
    pub chest_fill: Rgb,
    pub ladder_outline: Rgb,
    pub ladder_fill: Rgb,
}

impl Palette {
    /// `(outline, fill)` for a material
    pub fn colors(&self, material: Material) -> (Rgb, Rgb) {
        match material {
            Material::Wall => (self.wall_outline, self.wall_fill),
            Material::Door => (self.door_outline, self.door_fill),
            Material::Chest => (self.chest_outline, self.chest_fill),
            Material::Ladder => (self.ladder_outline, self.ladder_fill),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::BLACK,
            wall_outline: Rgb::WHITE,
            wall_fill: Rgb::new(48, 48, 72),
            door_outline: Rgb::WHITE,
            door_fill: Rgb::new(128, 128, 0),
            chest_outline: Rgb::new(230, 190, 60),
            chest_fill: Rgb::new(120, 72, 24),
            ladder_outline: Rgb::new(220, 220, 220),
            ladder_fill: Rgb::new(150, 110, 60),
        }
    }
}
