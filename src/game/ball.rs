use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use super::body::{Body, Boundary};
use super::draw::{Canvas, Rgb};
use super::geometry::{Line, LineSegment, Point, Rect, Trajectory};
use crate::config::Settings;

/// Signed per-axis speed in pixels per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Velocity {
    pub x: i32,
    pub y: i32,
}

impl Velocity {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone)]
pub struct Ball {
    pub body: Body,
    pub velocity: Velocity,
}

impl Ball {
    pub fn new(position: Point, velocity: Velocity, size: i32, boundary: Boundary, color: Rgb) -> Self {
        let rect = Rect::new(position.x, position.y, size, size);
        Self {
            body: Body::new(rect, boundary, color),
            velocity,
        }
    }

    /// Serve a ball from the horizontal center at a random height and velocity
    pub fn random<R: Rng>(rng: &mut R, settings: &Settings) -> Self {
        let position = random_start(rng, settings);
        let velocity = random_velocity(rng, settings);
        Self::new(
            position,
            velocity,
            settings.ball.size,
            settings.boundary(),
            settings.palette.ball,
        )
    }

    pub fn rect(&self) -> &Rect {
        &self.body.rect
    }

    /// Advance one frame along the current velocity
    pub fn advance(&mut self) {
        self.body.translate(self.velocity.x, self.velocity.y);
    }

    pub fn bounce_x(&mut self) {
        self.velocity.x = -self.velocity.x;
    }

    pub fn bounce_y(&mut self) {
        self.velocity.y = -self.velocity.y;
    }

    /// Line the ball center travels along, None while moving vertically
    pub fn path(&self) -> Option<Line> {
        if self.velocity.x == 0 {
            return None;
        }
        let slope = self.velocity.y as f32 / self.velocity.x as f32;
        Some(Line::through(self.body.center(), slope))
    }

    /// Straight path from the ball center to the edge it is heading for
    pub fn trajectory(&self) -> Trajectory {
        let center = self.body.center();
        let boundary = &self.body.boundary;

        let Some(path) = self.path() else {
            let y = if self.velocity.y < 0 {
                boundary.top
            } else {
                boundary.bottom
            };
            return Trajectory::Vertical(LineSegment::new(center, Point::new(center.x, y)));
        };

        let x = if self.velocity.x < 0 {
            boundary.left
        } else {
            boundary.right
        };
        let end = Point::new(x, path.solve_y(x as f32).round() as i32);

        Trajectory::Sloped(LineSegment::new(center, end))
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.body.draw(canvas);
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} moving {}", self.body.position(), self.velocity)
    }
}

fn random_start<R: Rng>(rng: &mut R, settings: &Settings) -> Point {
    let x = (settings.arena.width as f32 / 2.0).round() as i32;
    // Never start below the floor, the bounce check would pin the ball there
    let y = rng.gen_range(0..=settings.arena.height - settings.ball.size);
    Point::new(x, y)
}

fn random_velocity<R: Rng>(rng: &mut R, settings: &Settings) -> Velocity {
    let quadrant = rng.gen_range(1..=4);
    let x_dir = if matches!(quadrant, 2 | 3) { -1.0 } else { 1.0 };
    let y_dir = if matches!(quadrant, 3 | 4) { -1.0 } else { 1.0 };

    // Settings validation guarantees at least one usable angle
    let angles = settings.ball.serve_angles();
    let theta = angles.choose(rng).copied().unwrap_or(settings.ball.angle_min);

    serve_velocity(theta, x_dir, y_dir, settings.ball.speed)
}

/// Velocity for a serve angle. The angle goes into cos/sin as-is, without a
/// degree to radian conversion, so nearby angles point in unrelated directions.
pub fn serve_velocity(theta: i32, x_dir: f32, y_dir: f32, speed: f32) -> Velocity {
    let theta = theta as f32;
    let vx = (x_dir * theta.cos() * speed).round() as i32;
    let vy = (y_dir * theta.sin() * speed).round() as i32;
    Velocity::new(vx, vy)
}
