//! Crossterm/ratatui frontend: owns the terminal for the lifetime of the game.

use crate::frame_loop::Frontend;
use crate::game::Session;
use crate::input::{map_event, InputEvent};
use crate::ui;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub struct TerminalFrontend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalFrontend {
    /// Switch the terminal into game mode: raw input, alternate screen,
    /// mouse capture, hidden cursor. Undone on drop.
    pub fn start() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide) {
            restore_terminal();
            return Err(e);
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore_terminal();
                return Err(e);
            }
        };
        Ok(Self { terminal })
    }
}

impl Frontend for TerminalFrontend {
    fn wait_for_tick(&mut self, timeout: Duration) -> io::Result<Vec<InputEvent>> {
        let deadline = Instant::now() + timeout;
        let mut inputs = Vec::new();

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                break;
            }
            if let Some(input) = map_event(&event::read()?) {
                inputs.push(input);
            }
            if remaining.is_zero() {
                break;
            }
        }

        Ok(inputs)
    }

    fn present(&mut self, session: &Session) -> io::Result<()> {
        self.terminal.draw(|frame| ui::draw(frame, session))?;
        Ok(())
    }
}

impl Drop for TerminalFrontend {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Put the terminal back the way the shell expects it. Safe to call more
/// than once.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        DisableMouseCapture,
        LeaveAlternateScreen,
        cursor::Show
    );
}
