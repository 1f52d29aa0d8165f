//! Input handling: maps raw terminal events to game inputs.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// Keys the game distinguishes. Only Space has a meaning of its own (jump);
/// every other key is just "a key".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Other,
}

/// UI-agnostic input events, consumed once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    PointerDown,
    /// The environment asked us to stop (Ctrl+C in a raw-mode terminal).
    Quit,
}

/// Translate one crossterm event. Returns `None` for events the game ignores
/// (key releases and repeats, mouse motion, resize, focus, paste).
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(_) => Some(InputEvent::PointerDown),
            _ => None,
        },
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Quit);
    }
    match key.code {
        KeyCode::Char(' ') => Some(InputEvent::KeyDown(Key::Space)),
        _ => Some(InputEvent::KeyDown(Key::Other)),
    }
}
