// Movable rectangular body confined to the arena

use super::draw::{Canvas, Rgb};
use super::geometry::{Point, Rect};

/// Arena edges a body tests itself against, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    pub top: i32,
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Boundary {
    /// Boundary of an arena whose top-left corner is the origin
    pub fn arena(width: i32, height: i32) -> Self {
        Self {
            top: 0,
            left: 0,
            right: width,
            bottom: height,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub rect: Rect,
    pub boundary: Boundary,
    pub color: Rgb,
}

impl Body {
    pub fn new(rect: Rect, boundary: Boundary, color: Rgb) -> Self {
        Self {
            rect,
            boundary,
            color,
        }
    }

    pub fn position(&self) -> Point {
        self.rect.top_left()
    }

    pub fn center(&self) -> Point {
        self.rect.center()
    }

    // Each predicate optionally applies a pending delta on its own axis first

    pub fn is_beyond_left(&self, dx: i32) -> bool {
        self.rect.left() + dx < self.boundary.left
    }

    pub fn is_beyond_right(&self, dx: i32) -> bool {
        self.rect.right() + dx > self.boundary.right
    }

    pub fn is_beyond_top(&self, dy: i32) -> bool {
        self.rect.top() + dy < self.boundary.top
    }

    pub fn is_beyond_bottom(&self, dy: i32) -> bool {
        self.rect.bottom() + dy > self.boundary.bottom
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.rect.translate(dx, dy);
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.rect, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: i32, y: i32) -> Body {
        Body::new(
            Rect::new(x, y, 10, 100),
            Boundary::arena(600, 600),
            Rgb(0, 0, 0),
        )
    }

    #[test]
    fn test_predicates_without_delta() {
        let inside = body_at(0, 0);
        assert!(!inside.is_beyond_left(0));
        assert!(!inside.is_beyond_top(0));

        let past_left = body_at(-1, 0);
        assert!(past_left.is_beyond_left(0));

        let flush_right = body_at(590, 500);
        assert!(!flush_right.is_beyond_right(0));
        assert!(!flush_right.is_beyond_bottom(0));
        assert!(flush_right.is_beyond_right(1));
        assert!(flush_right.is_beyond_bottom(1));
    }

    #[test]
    fn test_pending_delta_is_applied() {
        let body = body_at(3, 3);
        assert!(!body.is_beyond_left(-3));
        assert!(body.is_beyond_left(-4));
        assert!(body.is_beyond_top(-4));
    }

    #[test]
    fn test_translate_updates_position() {
        let mut body = body_at(10, 300);
        body.translate(-2, 7);
        assert_eq!(body.position(), Point::new(8, 307));
        assert_eq!(body.center(), Point::new(13, 357));
    }
}
