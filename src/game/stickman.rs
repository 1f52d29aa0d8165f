//! The player character: walk drift, jump arc, and walk-cycle animation.

use super::animation::{Pose, RunAnimation};
use super::geometry::{pixel_center, Rect};
use crate::constants::{
    FLOOR_Y, GRAVITY, JUMP_POWER, STICKMAN_HEIGHT, STICKMAN_MAX_X, STICKMAN_START,
    STICKMAN_WIDTH, WALK_SPEED,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Stickman {
    /// Center x in world units.
    pub x: f64,
    /// Center y in world units. `FLOOR_Y` = standing, smaller = higher.
    pub y: f64,
    /// Vertical speed in units/frame, positive = upward.
    pub y_velocity: f64,
    pub is_jumping: bool,
    pub animation: RunAnimation,
}

impl Default for Stickman {
    fn default() -> Self {
        Self::new()
    }
}

impl Stickman {
    /// A stickman standing at the start position.
    pub fn new() -> Self {
        let (x, y) = STICKMAN_START;
        Self {
            x,
            y,
            y_velocity: 0.0,
            is_jumping: false,
            animation: RunAnimation::new(),
        }
    }

    /// Launch a jump. Returns false (and changes nothing) if already airborne.
    pub fn start_jump(&mut self) -> bool {
        if self.is_jumping {
            return false;
        }
        self.is_jumping = true;
        self.y_velocity = JUMP_POWER;
        true
    }

    /// One frame of motion. `dt` (seconds) only drives the walk cycle;
    /// movement is per frame.
    pub fn advance(&mut self, dt: f64) {
        self.x = (self.x + WALK_SPEED).min(STICKMAN_MAX_X);

        if self.is_jumping {
            self.y_velocity -= GRAVITY;
            self.y -= self.y_velocity;

            if self.y >= FLOOR_Y {
                self.y = FLOOR_Y;
                self.is_jumping = false;
                self.y_velocity = 0.0;
                self.animation.reset();
            }
        } else {
            self.animation.advance(dt);
        }
    }

    pub fn pose(&self) -> Pose {
        if self.is_jumping {
            Pose::Jumping
        } else {
            Pose::Running(self.animation.frame)
        }
    }

    /// Integer pixel center used for drawing and hit testing.
    pub fn center(&self) -> (i32, i32) {
        pixel_center(self.x, self.y)
    }

    pub fn rect(&self) -> Rect {
        let (cx, cy) = self.center();
        Rect::from_center(cx, cy, STICKMAN_WIDTH, STICKMAN_HEIGHT)
    }
}
