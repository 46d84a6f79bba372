// Geometry primitives shared by the physics and the renderer
// All arena coordinates are integer pixels with the origin at the top-left

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Center rounded down, matching integer pixel placement
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Place the left edge at `x`
    pub fn set_left(&mut self, x: i32) {
        self.x = x;
    }

    /// Place the right edge at `x`
    pub fn set_right(&mut self, x: i32) {
        self.x = x - self.width;
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Infinite line `y = m * x + b`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub m: f32,
    pub b: f32,
}

impl Line {
    pub fn new(m: f32, b: f32) -> Self {
        Self { m, b }
    }

    /// Line with slope `m` passing through `point`
    pub fn through(point: Point, m: f32) -> Self {
        Self::new(m, -m * point.x as f32 + point.y as f32)
    }

    pub fn solve_y(&self, x: f32) -> f32 {
        self.m * x + self.b
    }

    /// Horizontal lines never reach any other `y`, so there is no answer
    pub fn solve_x(&self, y: f32) -> Option<f32> {
        if self.m == 0.0 {
            return None;
        }
        Some((y - self.b) / self.m)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {} * x + {}", self.m, self.b)
    }
}

/// Segment between two points, only ever drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSegment {
    pub a: Point,
    pub b: Point,
}

impl LineSegment {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment {} to {}", self.a, self.b)
    }
}

/// Projected path of the ball toward the boundary it is heading for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trajectory {
    /// Path toward the left or right edge, derived from the velocity slope
    Sloped(LineSegment),
    /// Zero horizontal speed: straight up or down, no slope exists
    Vertical(LineSegment),
}

impl Trajectory {
    pub fn segment(&self) -> LineSegment {
        match self {
            Trajectory::Sloped(segment) | Trajectory::Vertical(segment) => *segment,
        }
    }
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trajectory::Sloped(segment) => write!(f, "{}", segment),
            Trajectory::Vertical(segment) => write!(f, "vertical {}", segment),
        }
    }
}
