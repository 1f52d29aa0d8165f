//! Game logic: kinematics, animation, collision, and the session state machine.
//!
//! Nothing in here touches the terminal; the renderer only reads [`Session`].

pub mod animation;
pub mod collision;
pub mod event_log;
pub mod geometry;
pub mod obstacle;
pub mod session;
pub mod stickman;

pub use animation::{Pose, RunAnimation};
pub use collision::check_collision;
pub use event_log::{EventLog, EventLogEntry};
pub use geometry::Rect;
pub use obstacle::Obstacle;
pub use session::{FrameReport, GameState, LoopControl, Session, SessionEvent};
pub use stickman::Stickman;
