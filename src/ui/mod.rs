//! Terminal rendering of a [`Session`].

pub mod game_common;
pub mod play_field;
pub mod sprites;

use crate::build_info;
use crate::constants::FLOOR_Y;
use crate::game::{GameState, Session};
use game_common::{create_game_layout, render_info_panel_frame, render_status_bar};
use play_field::render_play_field;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 24;

/// Draw the whole screen for the current frame.
pub fn draw(frame: &mut Frame, session: &Session) {
    let area = frame.size();
    let layout = create_game_layout(
        frame,
        area,
        " Stickman Jump ",
        Color::LightCyan,
        INFO_PANEL_WIDTH,
    );

    render_play_field(frame, layout.content, session);
    render_status_bar_content(frame, layout.status_bar, session);
    render_info_panel(frame, layout.info_panel, session);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, session: &Session) {
    match session.state {
        GameState::Splash => render_status_bar(
            frame,
            area,
            "Ready",
            Color::LightYellow,
            &[("[Any key/Click]", "Start"), ("[Ctrl+C]", "Quit")],
        ),
        GameState::Playing => render_status_bar(
            frame,
            area,
            "Run!",
            Color::LightGreen,
            &[("[Space/Click]", "Jump"), ("[Ctrl+C]", "Quit")],
        ),
        GameState::GameOver => render_status_bar(
            frame,
            area,
            "Crashed!",
            Color::LightRed,
            &[("[Any key/Click]", "Play again"), ("[Ctrl+C]", "Quit")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &Session) {
    let inner = render_info_panel_frame(frame, area);
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let stickman = &session.stickman;
    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("State: ", label),
            Span::styled(session.state.name(), Style::default().fg(Color::LightCyan)),
        ]),
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                session.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("X: ", label),
            Span::styled(format!("{:.0}", stickman.x), value),
        ]),
        Line::from(vec![
            Span::styled("Height: ", label),
            Span::styled(format!("{:.0}", FLOOR_Y - stickman.y), value),
        ]),
        Line::from(vec![
            Span::styled("Velocity: ", label),
            Span::styled(format!("{:+.0}", stickman.y_velocity), value),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Recent:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    for entry in session.log.entries() {
        let color = if entry.is_alert {
            Color::LightRed
        } else {
            Color::Gray
        };
        lines.push(Line::from(Span::styled(
            format!(" {}", entry.message),
            Style::default().fg(color),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);

    if session.state == GameState::Splash && inner.height > 0 {
        let footer = Paragraph::new(Line::from(Span::styled(
            build_info::build_label(),
            Style::default().fg(Color::DarkGray),
        )));
        let footer_area = Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        };
        frame.render_widget(footer, footer_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, Key};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(session: &Session, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, session)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..height {
            for x in 0..width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_splash_screen() {
        let session = Session::new();
        let screen = render(&session, 100, 30);

        assert!(screen.contains("Stickman Jump"));
        assert!(screen.contains("Innovus Innovation Center"));
        assert!(screen.contains("Click / tap or press any key to begin"));
        assert!(screen.contains("Title"));
        assert!(!screen.contains("╔══╗"), "entities hidden on splash");
    }

    #[test]
    fn test_playing_screen_shows_score_and_entities() {
        let mut session = Session::new();
        session.run_frame(&[InputEvent::KeyDown(Key::Other)], 1.0 / 60.0);
        session.score = 3;
        let screen = render(&session, 100, 30);

        assert!(screen.contains("Score: 3"));
        assert!(screen.contains("╔══╗"), "box drawn");
        assert!(screen.contains(" o "), "stickman head drawn");
        assert!(screen.contains("Run started"), "event log in info panel");
        assert!(screen.contains("Jump"));
    }

    #[test]
    fn test_game_over_overlay() {
        let mut session = Session::new();
        session.state = GameState::GameOver;
        let screen = render(&session, 100, 30);

        assert!(screen.contains("GAME OVER!"));
        assert!(screen.contains("press any key to play again"));
        assert!(screen.contains("Play again"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let session = Session::new();
        for (w, h) in [(1, 1), (10, 4), (30, 6), (44, 12)] {
            render(&session, w, h);
        }
    }
}
