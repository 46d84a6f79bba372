use super::body::{Body, Boundary};
use super::draw::{Canvas, Rgb};
use super::geometry::{Point, Rect};

/// A paddle never overshoots the arena: a move that would cross an edge is
/// dropped on that axis for the frame instead of being clamped to the edge.
#[derive(Debug, Clone)]
pub struct Paddle {
    pub body: Body,
    pub speed: i32,
}

impl Paddle {
    pub fn new(position: Point, size: (i32, i32), speed: i32, boundary: Boundary, color: Rgb) -> Self {
        let rect = Rect::new(position.x, position.y, size.0, size.1);
        Self {
            body: Body::new(rect, boundary, color),
            speed,
        }
    }

    pub fn rect(&self) -> &Rect {
        &self.body.rect
    }

    pub fn move_by(&mut self, mut dx: i32, mut dy: i32) {
        if self.body.is_beyond_left(dx) || self.body.is_beyond_right(dx) {
            dx = 0;
        }
        if self.body.is_beyond_top(dy) || self.body.is_beyond_bottom(dy) {
            dy = 0;
        }
        self.body.translate(dx, dy);
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.body.draw(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle_at(x: i32, y: i32) -> Paddle {
        Paddle::new(
            Point::new(x, y),
            (10, 100),
            4,
            Boundary::arena(600, 600),
            Rgb(255, 255, 255),
        )
    }

    #[test]
    fn test_moves_freely_inside_arena() {
        let mut paddle = paddle_at(10, 300);
        paddle.move_by(0, 4);
        assert_eq!(paddle.body.position(), Point::new(10, 304));
        paddle.move_by(0, -4);
        assert_eq!(paddle.body.position(), Point::new(10, 300));
    }

    #[test]
    fn test_blocked_move_is_dropped_not_clamped() {
        // 2px from the top: a 4px step would cross, so nothing happens
        let mut paddle = paddle_at(10, 2);
        paddle.move_by(0, -4);
        assert_eq!(paddle.body.position(), Point::new(10, 2));

        // Same at the bottom edge
        let mut paddle = paddle_at(10, 498);
        paddle.move_by(0, 4);
        assert_eq!(paddle.body.position(), Point::new(10, 498));
    }

    #[test]
    fn test_blocked_axis_does_not_stop_the_other() {
        let mut paddle = paddle_at(0, 300);
        paddle.move_by(-4, 4);
        assert_eq!(paddle.body.position(), Point::new(0, 304));

        let mut paddle = paddle_at(300, 0);
        paddle.move_by(4, -4);
        assert_eq!(paddle.body.position(), Point::new(304, 0));
    }

    #[test]
    fn test_movement_resumes_in_the_other_direction() {
        let mut paddle = paddle_at(10, 500);
        paddle.move_by(0, 4);
        assert_eq!(paddle.body.position().y, 500);
        paddle.move_by(0, -4);
        assert_eq!(paddle.body.position().y, 496);
    }
}
