//! Fixed-rate game loop.
//!
//! One iteration: wait for the next tick while collecting input, run the
//! frame, present it. The [`Frontend`] is the only boundary to the outside
//! world, so the loop runs the same against a real terminal or a script.

use crate::game::{LoopControl, Session};
use crate::input::InputEvent;
use std::io;
use std::time::{Duration, Instant};

/// Output and input collaborator for the loop.
pub trait Frontend {
    /// Block until `timeout` has passed, returning every input that arrived
    /// meanwhile (in order). This is the loop's single yield point.
    fn wait_for_tick(&mut self, timeout: Duration) -> io::Result<Vec<InputEvent>>;

    /// Draw the session as it stands after the frame's update.
    fn present(&mut self, session: &Session) -> io::Result<()>;
}

/// Tracks the next frame deadline and measures frame time.
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_duration: Duration,
    last_tick: Instant,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        Self::starting_at(fps, Instant::now())
    }

    pub fn starting_at(fps: u32, now: Instant) -> Self {
        Self {
            frame_duration: Duration::from_secs(1) / fps.max(1),
            last_tick: now,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Time left before the next frame is due (zero if already late).
    pub fn until_next_frame(&self) -> Duration {
        self.until_next_frame_at(Instant::now())
    }

    pub fn until_next_frame_at(&self, now: Instant) -> Duration {
        (self.last_tick + self.frame_duration).saturating_duration_since(now)
    }

    /// Mark a frame boundary; returns seconds since the previous one.
    pub fn tick(&mut self) -> f64 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f64 {
        let dt = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        dt.as_secs_f64()
    }
}

/// Run frames until a quit request has been processed and presented.
/// Returns the number of frames run.
pub fn run<F: Frontend>(session: &mut Session, frontend: &mut F, fps: u32) -> io::Result<u64> {
    let mut pacer = FramePacer::new(fps);
    let mut frames = 0;

    // First frame goes up before we wait for anything.
    frontend.present(session)?;

    loop {
        let inputs = frontend.wait_for_tick(pacer.until_next_frame())?;
        let dt = pacer.tick();

        let report = session.run_frame(&inputs, dt);
        frames += 1;

        frontend.present(session)?;

        if report.control == LoopControl::Quit {
            tracing::info!(frames, "frame loop finished");
            return Ok(frames);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration_60fps() {
        let pacer = FramePacer::new(60);
        assert_eq!(pacer.frame_duration(), Duration::from_secs(1) / 60);
    }

    #[test]
    fn test_zero_fps_does_not_divide_by_zero() {
        let pacer = FramePacer::new(0);
        assert_eq!(pacer.frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_until_next_frame_counts_down() {
        let start = Instant::now();
        let pacer = FramePacer::starting_at(50, start);

        assert_eq!(pacer.until_next_frame_at(start), Duration::from_millis(20));
        assert_eq!(
            pacer.until_next_frame_at(start + Duration::from_millis(15)),
            Duration::from_millis(5)
        );
        assert_eq!(
            pacer.until_next_frame_at(start + Duration::from_millis(40)),
            Duration::ZERO
        );
    }

    #[test]
    fn test_tick_measures_elapsed() {
        let start = Instant::now();
        let mut pacer = FramePacer::starting_at(60, start);

        let dt = pacer.tick_at(start + Duration::from_millis(25));
        assert!((dt - 0.025).abs() < 1e-9);

        let dt = pacer.tick_at(start + Duration::from_millis(35));
        assert!((dt - 0.010).abs() < 1e-9);
    }

    #[test]
    fn test_tick_resets_deadline() {
        let start = Instant::now();
        let mut pacer = FramePacer::starting_at(50, start);
        let later = start + Duration::from_millis(30);

        pacer.tick_at(later);

        assert_eq!(pacer.until_next_frame_at(later), Duration::from_millis(20));
    }
}
