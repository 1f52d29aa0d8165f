//! Play field rendering.
//!
//! Uses a cell buffer for per-character color control: sky, floor, sprites
//! and overlay text are stamped into a 2D grid in world-to-cell scale, then
//! emitted as one styled line per row.

use super::sprites::{box_sprite, stickman_sprite, Sprite};
use crate::constants::{FLOOR_DRAW_OFFSET, FLOOR_Y, WORLD_HEIGHT, WORLD_WIDTH};
use crate::game::{GameState, Rect as WorldRect, Session};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const SKY_COLOR: Color = Color::Rgb(50, 150, 200);
pub const FLOOR_COLOR: Color = Color::Rgb(0, 150, 0);
const TEXT_COLOR: Color = Color::Rgb(255, 255, 255);
const PROMPT_COLOR: Color = Color::Rgb(255, 255, 0);
const GAME_OVER_COLOR: Color = Color::Rgb(255, 0, 0);

/// Smallest area the field will draw into.
pub const MIN_FIELD_WIDTH: u16 = 20;
pub const MIN_FIELD_HEIGHT: u16 = 8;

const SPLASH_TITLE: &str = "Innovus Innovation Center";
const SPLASH_LINES: [&str; 4] = [
    "Creative Coding with Python",
    "Students learn digital animation, 2D game design,",
    "and AI-inspired decision making through hands-on Python projects,",
    "ending with a student-designed interactive game.",
];
const SPLASH_PROMPT: &str = "Click / tap or press any key to begin";
const GAME_OVER_TITLE: &str = "GAME OVER!";
const GAME_OVER_PROMPT: &str = "Click / tap or press any key to play again";

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
    bold: bool,
}

impl Cell {
    fn blank(bg: Color) -> Self {
        Self {
            ch: ' ',
            fg: TEXT_COLOR,
            bg,
            bold: false,
        }
    }
}

/// Grid of cells sized to the play field, with world → cell scaling.
struct CellBuffer {
    width: u16,
    height: u16,
    rows: Vec<Vec<Cell>>,
}

impl CellBuffer {
    fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![Cell::blank(SKY_COLOR); width as usize]; height as usize],
        }
    }

    fn col(&self, world_x: f64) -> i32 {
        (world_x * self.width as f64 / WORLD_WIDTH).floor() as i32
    }

    fn row(&self, world_y: f64) -> i32 {
        (world_y * self.height as f64 / WORLD_HEIGHT).floor() as i32
    }

    /// Glyph over whatever background is already there. Off-grid writes are dropped.
    fn put(&mut self, col: i32, row: i32, ch: char, fg: Color, bold: bool) {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return;
        }
        let cell = &mut self.rows[row as usize][col as usize];
        cell.ch = ch;
        cell.fg = fg;
        cell.bold = bold;
    }

    fn put_text(&mut self, col: i32, row: i32, text: &str, fg: Color, bold: bool) {
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i32, row, ch, fg, bold);
        }
    }

    /// Text centered horizontally on the field.
    fn put_centered(&mut self, row: i32, text: &str, fg: Color, bold: bool) {
        let len = text.chars().count() as i32;
        let col = (self.width as i32 - len) / 2;
        self.put_text(col.max(0), row, text, fg, bold);
    }

    fn fill_rows_from(&mut self, first_row: i32, bg: Color) {
        let first = first_row.clamp(0, self.height as i32) as usize;
        for row in &mut self.rows[first..] {
            for cell in row.iter_mut() {
                cell.bg = bg;
            }
        }
    }

    /// Stamp a sprite horizontally centered on the hit box and standing on
    /// its bottom edge.
    fn stamp(&mut self, sprite: Sprite, hit_box: WorldRect, center_x: i32) {
        let bottom_row = self.row((hit_box.bottom() - 1) as f64);
        let top_row = bottom_row - sprite.height() as i32 + 1;
        let left_col = self.col(center_x as f64) - sprite.width() as i32 / 2;

        for (dy, line) in sprite.rows.iter().enumerate() {
            for (dx, ch) in line.chars().enumerate() {
                if ch != ' ' {
                    self.put(
                        left_col + dx as i32,
                        top_row + dy as i32,
                        ch,
                        sprite.color,
                        true,
                    );
                }
            }
        }
    }

    fn into_lines(self) -> Vec<Line<'static>> {
        self.rows.into_iter().map(row_to_line).collect()
    }
}

/// Merge runs of equally styled cells into spans.
fn row_to_line(row: Vec<Cell>) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut current: Option<Cell> = None;
    let mut text = String::new();

    for cell in row {
        let same_style = current
            .map(|c| c.fg == cell.fg && c.bg == cell.bg && c.bold == cell.bold)
            .unwrap_or(false);
        if !same_style {
            if let Some(style_cell) = current {
                spans.push(Span::styled(std::mem::take(&mut text), cell_style(style_cell)));
            }
            current = Some(cell);
        }
        text.push(cell.ch);
    }
    if let Some(style_cell) = current {
        spans.push(Span::styled(text, cell_style(style_cell)));
    }

    Line::from(spans)
}

fn cell_style(cell: Cell) -> Style {
    let style = Style::default().fg(cell.fg).bg(cell.bg);
    if cell.bold {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Render the play field: sky, floor, entities, score, state overlay.
pub fn render_play_field(frame: &mut Frame, area: Rect, session: &Session) {
    if area.width < MIN_FIELD_WIDTH || area.height < MIN_FIELD_HEIGHT {
        let hint = Paragraph::new("Enlarge the terminal to play")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, area);
        return;
    }

    let mut buffer = CellBuffer::new(area.width, area.height);

    // ── Floor ─────────────────────────────────────────────────────────
    let floor_row = buffer.row(FLOOR_Y + FLOOR_DRAW_OFFSET);
    buffer.fill_rows_from(floor_row, FLOOR_COLOR);

    match session.state {
        GameState::Splash => draw_splash_text(&mut buffer),
        GameState::Playing | GameState::GameOver => {
            // ── Entities ──────────────────────────────────────────────
            let stickman = &session.stickman;
            buffer.stamp(
                stickman_sprite(stickman.pose()),
                stickman.rect(),
                stickman.center().0,
            );
            let obstacle = &session.obstacle;
            buffer.stamp(box_sprite(), obstacle.rect(), obstacle.center().0);

            // ── Score (top-left) ──────────────────────────────────────
            let score_col = buffer.col(10.0);
            let score_row = buffer.row(10.0);
            buffer.put_text(
                score_col,
                score_row,
                &format!("Score: {}", session.score),
                TEXT_COLOR,
                false,
            );

            if session.state == GameState::GameOver {
                draw_game_over_text(&mut buffer);
            }
        }
    }

    frame.render_widget(Paragraph::new(buffer.into_lines()), area);
}

fn draw_splash_text(buffer: &mut CellBuffer) {
    let first_row = buffer.row(120.0);
    let step = buffer.row(170.0).saturating_sub(first_row).max(1);

    buffer.put_centered(first_row, SPLASH_TITLE, TEXT_COLOR, true);
    for (i, line) in SPLASH_LINES.iter().enumerate() {
        buffer.put_centered(first_row + step * (i as i32 + 1), line, TEXT_COLOR, false);
    }
    let prompt_row = first_row + step * (SPLASH_LINES.len() as i32 + 1);
    buffer.put_centered(prompt_row, SPLASH_PROMPT, PROMPT_COLOR, false);
}

fn draw_game_over_text(buffer: &mut CellBuffer) {
    let title_row = buffer.row(WORLD_HEIGHT / 2.0 - 40.0);
    let prompt_row = buffer.row(WORLD_HEIGHT / 2.0 + 20.0).max(title_row + 1);

    buffer.put_centered(title_row, GAME_OVER_TITLE, GAME_OVER_COLOR, true);
    buffer.put_centered(prompt_row, GAME_OVER_PROMPT, TEXT_COLOR, false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_to_cell_scaling() {
        let buffer = CellBuffer::new(80, 30);
        assert_eq!(buffer.col(0.0), 0);
        assert_eq!(buffer.col(400.0), 40);
        assert_eq!(buffer.col(799.0), 79);
        assert_eq!(buffer.col(-50.0), -5);
        assert_eq!(buffer.row(300.0), 15);
        assert_eq!(buffer.row(FLOOR_Y + FLOOR_DRAW_OFFSET), 26);
    }

    #[test]
    fn test_put_drops_off_grid_writes() {
        let mut buffer = CellBuffer::new(20, 10);
        buffer.put(-1, 0, 'x', TEXT_COLOR, false);
        buffer.put(20, 0, 'x', TEXT_COLOR, false);
        buffer.put(0, 10, 'x', TEXT_COLOR, false);
        assert!(buffer.rows.iter().flatten().all(|c| c.ch == ' '));
    }

    #[test]
    fn test_put_keeps_background() {
        let mut buffer = CellBuffer::new(20, 10);
        buffer.fill_rows_from(5, FLOOR_COLOR);
        buffer.put(3, 6, '#', Color::Red, true);
        let cell = buffer.rows[6][3];
        assert_eq!(cell.ch, '#');
        assert_eq!(cell.bg, FLOOR_COLOR);
        assert!(cell.bold);
    }

    #[test]
    fn test_fill_rows_from_clamps() {
        let mut buffer = CellBuffer::new(20, 10);
        buffer.fill_rows_from(-3, FLOOR_COLOR);
        assert!(buffer.rows.iter().flatten().all(|c| c.bg == FLOOR_COLOR));

        let mut buffer = CellBuffer::new(20, 10);
        buffer.fill_rows_from(99, FLOOR_COLOR);
        assert!(buffer.rows.iter().flatten().all(|c| c.bg == SKY_COLOR));
    }

    #[test]
    fn test_row_to_line_merges_runs() {
        let mut buffer = CellBuffer::new(20, 10);
        buffer.put_text(2, 0, "ab", Color::Red, false);
        let line = row_to_line(buffer.rows[0].clone());
        // sky, red text, sky
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[1].content, "ab");
    }

    #[test]
    fn test_stamp_stands_on_hit_box_bottom() {
        let mut buffer = CellBuffer::new(80, 30);
        let hit_box = WorldRect::from_center(400, 500, 48, 48);
        buffer.stamp(box_sprite(), hit_box, 400);

        // bottom edge 523 → row 26, sprite is 2 rows tall
        let bottom_row = buffer.row(523.0) as usize;
        assert_eq!(buffer.rows[bottom_row][38].ch, '╚');
        assert_eq!(buffer.rows[bottom_row - 1][38].ch, '╔');
        assert_eq!(buffer.rows[bottom_row - 2][38].ch, ' ');
    }
}
