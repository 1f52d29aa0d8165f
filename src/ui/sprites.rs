//! ASCII art for the stickman and the box.

use crate::game::Pose;
use ratatui::style::Color;

/// Fixed-size block of glyphs. Spaces are transparent.
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub rows: &'static [&'static str],
    pub color: Color,
}

impl Sprite {
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

const STICKMAN_COLOR: Color = Color::Rgb(20, 20, 30);
const BOX_COLOR: Color = Color::Rgb(150, 100, 50);

/// Walk cycle, one entry per run animation frame.
const RUN_FRAMES: [&[&str]; 4] = [
    &[" o ", "/|\\", "/ \\"],
    &[" o ", "/|\\", " |\\"],
    &[" o ", "/|\\", " | "],
    &[" o ", "/|\\", "/| "],
];

const JUMP_FRAME: &[&str] = &["\\o/", " | ", "/ \\"];

const BOX_ROWS: &[&str] = &["╔══╗", "╚══╝"];

pub fn stickman_sprite(pose: Pose) -> Sprite {
    let rows = match pose {
        Pose::Running(frame) => RUN_FRAMES[frame % RUN_FRAMES.len()],
        Pose::Jumping => JUMP_FRAME,
    };
    Sprite {
        rows,
        color: STICKMAN_COLOR,
    }
}

pub fn box_sprite() -> Sprite {
    Sprite {
        rows: BOX_ROWS,
        color: BOX_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RUN_FRAME_COUNT;

    #[test]
    fn test_one_art_per_run_frame() {
        assert_eq!(RUN_FRAMES.len(), RUN_FRAME_COUNT);
    }

    #[test]
    fn test_sprite_rows_are_uniform() {
        let mut sprites: Vec<Sprite> = (0..RUN_FRAME_COUNT)
            .map(|f| stickman_sprite(Pose::Running(f)))
            .collect();
        sprites.push(stickman_sprite(Pose::Jumping));
        sprites.push(box_sprite());

        for sprite in sprites {
            let width = sprite.width();
            for row in sprite.rows {
                assert_eq!(row.chars().count(), width, "ragged row {:?}", row);
            }
        }
    }

    #[test]
    fn test_jump_pose_differs_from_run() {
        let jump = stickman_sprite(Pose::Jumping);
        for f in 0..RUN_FRAME_COUNT {
            assert_ne!(jump.rows, stickman_sprite(Pose::Running(f)).rows);
        }
    }

    #[test]
    fn test_sizes() {
        assert_eq!(stickman_sprite(Pose::Jumping).width(), 3);
        assert_eq!(stickman_sprite(Pose::Jumping).height(), 3);
        assert_eq!(box_sprite().width(), 4);
        assert_eq!(box_sprite().height(), 2);
    }
}
