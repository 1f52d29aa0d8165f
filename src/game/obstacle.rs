//! The box that drifts left across the screen and wraps back around.

use super::geometry::{pixel_center, Rect};
use crate::constants::{BOX_HEIGHT, BOX_RESPAWN_X, BOX_SPEED, BOX_START, BOX_WIDTH, BOX_WRAP_X};

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Center x in world units.
    pub x: f64,
    /// Center y in world units.
    pub y: f64,
}

impl Default for Obstacle {
    fn default() -> Self {
        Self::new()
    }
}

impl Obstacle {
    pub fn new() -> Self {
        let (x, y) = BOX_START;
        Self { x, y }
    }

    /// Move one frame to the left. Returns true when the box passed the left
    /// threshold and was moved back off the right edge (a scoring event).
    pub fn advance(&mut self) -> bool {
        self.x -= BOX_SPEED;
        if self.x < BOX_WRAP_X {
            self.x = BOX_RESPAWN_X;
            return true;
        }
        false
    }

    pub fn center(&self) -> (i32, i32) {
        pixel_center(self.x, self.y)
    }

    pub fn rect(&self) -> Rect {
        let (cx, cy) = self.center();
        Rect::from_center(cx, cy, BOX_WIDTH, BOX_HEIGHT)
    }
}
