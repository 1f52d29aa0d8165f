//! Hit test between the stickman and the box.

use super::obstacle::Obstacle;
use super::stickman::Stickman;
use crate::constants::{COLLISION_FLOOR_BAND, COLLISION_PENETRATION_MARGIN, FLOOR_Y};

/// True when the stickman runs into the box.
///
/// Overlapping boxes alone are not enough: the stickman's feet must sink more
/// than `COLLISION_PENETRATION_MARGIN` below the box top, and the stickman
/// must be within `COLLISION_FLOOR_BAND` of the floor. A stickman clearing
/// the box mid-jump never counts as a hit.
pub fn check_collision(stickman: &Stickman, obstacle: &Obstacle) -> bool {
    let runner = stickman.rect();
    let target = obstacle.rect();

    runner.intersects(&target)
        && runner.bottom() > target.top + COLLISION_PENETRATION_MARGIN
        && stickman.y >= FLOOR_Y - COLLISION_FLOOR_BAND
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BOX_WIDTH, STICKMAN_WIDTH};

    fn overlapping_pair() -> (Stickman, Obstacle) {
        let stickman = Stickman::new();
        let mut obstacle = Obstacle::new();
        obstacle.x = stickman.x + 10.0;
        (stickman, obstacle)
    }

    #[test]
    fn test_collision_on_floor_overlap() {
        let (stickman, obstacle) = overlapping_pair();
        assert!(check_collision(&stickman, &obstacle));
    }

    #[test]
    fn test_no_collision_when_apart() {
        let stickman = Stickman::new();
        let obstacle = Obstacle::new();
        assert!(!check_collision(&stickman, &obstacle));
    }

    #[test]
    fn test_no_collision_when_edges_touch() {
        let stickman = Stickman::new();
        let mut obstacle = Obstacle::new();
        obstacle.x = stickman.x + (STICKMAN_WIDTH / 2 + BOX_WIDTH / 2) as f64;
        assert!(!check_collision(&stickman, &obstacle));

        obstacle.x -= 1.0;
        assert!(check_collision(&stickman, &obstacle));
    }

    #[test]
    fn test_no_collision_above_floor_band() {
        let (mut stickman, obstacle) = overlapping_pair();
        for y in [FLOOR_Y - 20.5, FLOOR_Y - 40.0, FLOOR_Y - 150.0] {
            stickman.y = y;
            assert!(
                !check_collision(&stickman, &obstacle),
                "y = {} is clearing the box",
                y
            );
        }
    }

    #[test]
    fn test_collision_at_floor_band_edge() {
        let (mut stickman, obstacle) = overlapping_pair();
        stickman.y = FLOOR_Y - COLLISION_FLOOR_BAND;
        assert!(check_collision(&stickman, &obstacle));
    }

    #[test]
    fn test_shallow_penetration_is_not_a_hit() {
        let (stickman, mut obstacle) = overlapping_pair();
        // Lower the box so the stickman's feet sit exactly MARGIN below its top.
        let feet = stickman.rect().bottom();
        let half_box = obstacle.rect().height / 2;
        obstacle.y = (feet - COLLISION_PENETRATION_MARGIN + half_box) as f64;
        assert_eq!(
            stickman.rect().bottom(),
            obstacle.rect().top + COLLISION_PENETRATION_MARGIN
        );
        assert!(!check_collision(&stickman, &obstacle));

        obstacle.y -= 1.0;
        assert!(check_collision(&stickman, &obstacle));
    }
}
