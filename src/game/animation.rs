//! Time-driven frame cycling for sprites.

use crate::constants::{RUN_FRAME_COUNT, RUN_FRAME_SECONDS};

/// Walk-cycle state: which run frame is showing and how long it has shown.
#[derive(Debug, Clone, PartialEq)]
pub struct RunAnimation {
    pub frame: usize,
    /// Seconds accumulated on the current frame.
    pub timer: f64,
}

impl Default for RunAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl RunAnimation {
    pub fn new() -> Self {
        Self {
            frame: 0,
            timer: 0.0,
        }
    }

    /// Accumulate `dt` seconds. Once a frame has been shown for
    /// `RUN_FRAME_SECONDS` it steps to the next one, wrapping around.
    pub fn advance(&mut self, dt: f64) {
        self.timer += dt;
        if self.timer >= RUN_FRAME_SECONDS {
            self.timer = 0.0;
            self.frame = (self.frame + 1) % RUN_FRAME_COUNT;
        }
    }

    pub fn reset(&mut self) {
        self.frame = 0;
        self.timer = 0.0;
    }
}

/// Which sprite the stickman shows this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    Running(usize),
    Jumping,
}
