//! Player position and facing.
//!
//! The player occupies exactly one cell and faces one of the four cardinal
//! directions. Moves into a wall are rejected; everything else is walkable.

use crate::tile_map::TileMap;
use crate::types::Facing;

/// A committed one-cell move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub from: (i32, i32),
    pub to: (i32, i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    x: i32,
    y: i32,
    facing: Facing,
}

impl PlayerState {
    pub fn new(x: i32, y: i32, facing: Facing) -> Self {
        Self { x, y, facing }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn turn_left(&mut self) {
        self.facing = self.facing.turn_left();
    }

    pub fn turn_right(&mut self) {
        self.facing = self.facing.turn_right();
    }

    /// Cell one step ahead
    pub fn forward_target(&self) -> (i32, i32) {
        let (dx, dy) = self.facing.forward();
        (self.x + dx, self.y + dy)
    }

    /// Cell one step behind
    pub fn backward_target(&self) -> (i32, i32) {
        let (dx, dy) = self.facing.forward();
        (self.x - dx, self.y - dy)
    }

    /// Step forward unless a wall is in the way
    pub fn step_forward(&mut self, map: &TileMap) -> Option<Step> {
        let target = self.forward_target();
        self.step_to(map, target)
    }

    /// Step backward unless a wall is in the way
    pub fn step_backward(&mut self, map: &TileMap) -> Option<Step> {
        let target = self.backward_target();
        self.step_to(map, target)
    }

    fn step_to(&mut self, map: &TileMap, (x, y): (i32, i32)) -> Option<Step> {
        if map.tile(x, y).is_wall() {
            return None;
        }
        let step = Step {
            from: self.position(),
            to: (x, y),
        };
        self.x = x;
        self.y = y;
        Some(step)
    }
}
