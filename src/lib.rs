//! Stickman Jump - a terminal side-scroller.
//!
//! The stickman jumps over a box that keeps cycling across the screen; every
//! pass scores a point. This library holds the game logic, the frame loop,
//! and the terminal frontend so they can be tested without a TTY.

pub mod build_info;
pub mod constants;
pub mod frame_loop;
pub mod game;
pub mod input;
pub mod terminal;
pub mod ui;

pub use constants::TARGET_FPS;
pub use game::{GameState, Session};
pub use input::{InputEvent, Key};
