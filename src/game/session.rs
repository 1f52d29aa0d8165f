//! Session state machine: splash → playing → game over → splash.
//!
//! All mutable game state lives in [`Session`] and is passed explicitly into
//! the frame loop and renderer.

use super::collision::check_collision;
use super::event_log::EventLog;
use super::obstacle::Obstacle;
use super::stickman::Stickman;
use crate::constants::MAX_FRAME_DT;
use crate::input::{InputEvent, Key};

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Splash,
    Playing,
    GameOver,
}

impl GameState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Splash => "Title",
            Self::Playing => "Running",
            Self::GameOver => "Game over",
        }
    }
}

/// Something that happened during a frame, for the event log and tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Left the splash screen.
    Started,
    /// Stickman left the ground.
    Jumped,
    /// Box wrapped around; `score` is the new total.
    ObstacleWrapped { score: u32 },
    /// Stickman hit the box.
    Collided { score: u32 },
    /// Back to the splash screen with a fresh stickman and box.
    Reset,
}

impl SessionEvent {
    /// Event log line, or `None` for events too frequent to list.
    pub fn log_message(&self) -> Option<String> {
        match self {
            Self::Started => Some("Run started".to_string()),
            Self::Jumped => None,
            Self::ObstacleWrapped { score } => Some(format!("Box cleared ({})", score)),
            Self::Collided { score } => Some(format!("Crashed with score {}", score)),
            Self::Reset => Some("Back to title".to_string()),
        }
    }

    pub fn is_alert(&self) -> bool {
        matches!(self, Self::Collided { .. })
    }
}

/// Whether the frame loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// What one call to [`Session::run_frame`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameReport {
    pub control: LoopControl,
    pub events: Vec<SessionEvent>,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub state: GameState,
    pub score: u32,
    pub stickman: Stickman,
    pub obstacle: Obstacle,
    /// Frames run since the process started (survives resets).
    pub frame_count: u64,
    pub log: EventLog,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: GameState::Splash,
            score: 0,
            stickman: Stickman::new(),
            obstacle: Obstacle::new(),
            frame_count: 0,
            log: EventLog::new(),
        }
    }

    /// Fresh stickman, box, and score; back to the splash screen.
    pub fn reset(&mut self) {
        self.score = 0;
        self.stickman = Stickman::new();
        self.obstacle = Obstacle::new();
        self.state = GameState::Splash;
    }

    /// Apply one input event to the state machine.
    ///
    /// `Quit` is not handled here; [`Session::run_frame`] turns it into
    /// [`LoopControl::Quit`].
    pub fn handle_input(&mut self, input: InputEvent) -> Option<SessionEvent> {
        let pressed = matches!(input, InputEvent::KeyDown(_) | InputEvent::PointerDown);
        match self.state {
            GameState::Splash if pressed => {
                self.state = GameState::Playing;
                Some(SessionEvent::Started)
            }
            GameState::Playing => {
                let wants_jump = matches!(
                    input,
                    InputEvent::KeyDown(Key::Space) | InputEvent::PointerDown
                );
                if wants_jump && self.stickman.start_jump() {
                    Some(SessionEvent::Jumped)
                } else {
                    None
                }
            }
            GameState::GameOver if pressed => {
                self.reset();
                Some(SessionEvent::Reset)
            }
            _ => None,
        }
    }

    /// Advance the world one frame. Does nothing outside `Playing`.
    pub fn update(&mut self, dt: f64) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if self.state != GameState::Playing {
            return events;
        }

        self.stickman.advance(dt);

        if self.obstacle.advance() {
            self.score += 1;
            events.push(SessionEvent::ObstacleWrapped { score: self.score });
        }

        if check_collision(&self.stickman, &self.obstacle) {
            self.state = GameState::GameOver;
            events.push(SessionEvent::Collided { score: self.score });
        }

        events
    }

    /// One iteration of the game loop minus drawing: apply this frame's
    /// inputs in order, then update with `dt` (seconds, clamped to
    /// `MAX_FRAME_DT`). A quit request still lets the rest of the frame run.
    pub fn run_frame(&mut self, inputs: &[InputEvent], dt: f64) -> FrameReport {
        self.frame_count += 1;

        let mut control = LoopControl::Continue;
        let mut events = Vec::new();

        for &input in inputs {
            if input == InputEvent::Quit {
                control = LoopControl::Quit;
                continue;
            }
            events.extend(self.handle_input(input));
        }

        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        events.extend(self.update(dt));

        for event in &events {
            self.record(event);
        }
        if control == LoopControl::Quit {
            tracing::info!(frame = self.frame_count, score = self.score, "quit requested");
        }

        FrameReport { control, events }
    }

    fn record(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::Jumped => {
                tracing::debug!(frame = self.frame_count, x = self.stickman.x, "jump");
            }
            SessionEvent::Collided { score } => {
                tracing::info!(frame = self.frame_count, score, "collision");
            }
            _ => {
                tracing::info!(frame = self.frame_count, ?event, "session event");
            }
        }

        if let Some(message) = event.log_message() {
            self.log
                .add_entry(message, self.frame_count, event.is_alert());
        }
    }
}
