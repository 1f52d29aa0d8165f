//! Integer bounding boxes for sprites.

/// Axis-aligned rectangle in whole world units. Edges are half-open:
/// `left..right` and `top..bottom`, so boxes that merely touch do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Build a rect of the given size centered on `(cx, cy)`.
    ///
    /// Odd sizes put the extra unit on the right/bottom side.
    pub fn from_center(cx: i32, cy: i32, width: i32, height: i32) -> Self {
        Self {
            left: cx - width / 2,
            top: cy - height / 2,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// True if the two rects share any area.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

/// Truncate a float world position to the integer pixel center used for
/// hit boxes and drawing.
pub fn pixel_center(x: f64, y: f64) -> (i32, i32) {
    (x as i32, y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center_even_size() {
        let r = Rect::from_center(100, 500, 48, 80);
        assert_eq!(r.left, 76);
        assert_eq!(r.top, 460);
        assert_eq!(r.right(), 124);
        assert_eq!(r.bottom(), 540);
    }

    #[test]
    fn test_from_center_odd_size() {
        let r = Rect::from_center(10, 10, 5, 3);
        assert_eq!(r.left, 8);
        assert_eq!(r.right(), 13);
        assert_eq!(r.top, 9);
        assert_eq!(r.bottom(), 12);
    }

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::from_center(100, 100, 20, 20);
        let b = Rect::from_center(110, 105, 20, 20);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::from_center(100, 100, 20, 20);
        let b = Rect::from_center(120, 100, 20, 20);
        assert_eq!(a.right(), b.left);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_vertical_gap_does_not_intersect() {
        let a = Rect::from_center(100, 100, 20, 20);
        let b = Rect::from_center(100, 150, 20, 20);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_pixel_center_truncates() {
        assert_eq!(pixel_center(100.9, 482.5), (100, 482));
        assert_eq!(pixel_center(-52.7, 500.0), (-52, 500));
    }
}
