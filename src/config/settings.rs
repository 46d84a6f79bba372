// Validated, immutable game settings resolved from the configuration file

use anyhow::{bail, Context, Result};
use crossterm::event::KeyCode;

use super::keys::{key_label, parse_key};
use super::types::Config;
use crate::game::ball::serve_velocity;
use crate::game::body::Boundary;
use crate::game::draw::Rgb;
use crate::players::{ControlSet, Side};

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub arena: ArenaSettings,
    pub paddle: PaddleSettings,
    pub ball: BallSettings,
    pub palette: Palette,
    pub controls: Controls,
    pub target_fps: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaSettings {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleSettings {
    pub width: i32,
    pub height: i32,
    pub margin: i32,
    pub speed: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallSettings {
    pub size: i32,
    pub speed: f32,
    pub angle_min: i32,
    pub angle_max: i32,
}

impl BallSettings {
    /// Serve angles whose rounded velocity keeps both axes moving.
    /// The quadrant only flips signs, so one check per angle is enough.
    pub fn serve_angles(&self) -> Vec<i32> {
        (self.angle_min..=self.angle_max)
            .filter(|&theta| {
                let velocity = serve_velocity(theta, 1.0, 1.0, self.speed);
                velocity.x != 0 && velocity.y != 0
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub paddle: Rgb,
    pub ball: Rgb,
    pub text: Rgb,
    pub trajectory: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub left: ControlSet,
    pub right: ControlSet,
    pub pause: KeyCode,
    pub quit: KeyCode,
    pub restart: KeyCode,
    pub inspect: KeyCode,
}

impl Controls {
    pub fn for_side(&self, side: Side) -> ControlSet {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Every binding with its config name
    fn bindings(&self) -> [(&'static str, KeyCode); 12] {
        [
            ("left_up", self.left.up),
            ("left_down", self.left.down),
            ("left_left", self.left.left),
            ("left_right", self.left.right),
            ("right_up", self.right.up),
            ("right_down", self.right.down),
            ("right_left", self.right.left),
            ("right_right", self.right.right),
            ("pause", self.pause),
            ("quit", self.quit),
            ("restart", self.restart),
            ("inspect", self.inspect),
        ]
    }

    /// One key drives one action, otherwise a single press would do two things
    fn ensure_distinct(&self) -> Result<()> {
        let bindings = self.bindings();
        for (i, (name, code)) in bindings.iter().enumerate() {
            if let Some((other, _)) = bindings[..i].iter().find(|(_, seen)| seen == code) {
                bail!("{} and {} are both bound to {}", other, name, key_label(*code));
            }
        }
        Ok(())
    }
}

impl Settings {
    pub fn boundary(&self) -> Boundary {
        Boundary::arena(self.arena.width, self.arena.height)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena: ArenaSettings {
                width: 600,
                height: 600,
            },
            paddle: PaddleSettings {
                width: 10,
                height: 100,
                margin: 10,
                speed: 4,
            },
            ball: BallSettings {
                size: 15,
                speed: 5.0,
                angle_min: 35,
                angle_max: 55,
            },
            palette: Palette {
                background: Rgb(0, 0, 0),
                paddle: Rgb(255, 255, 255),
                ball: Rgb(255, 255, 255),
                text: Rgb(0, 200, 255),
                trajectory: Rgb(255, 0, 0),
            },
            controls: Controls {
                left: ControlSet {
                    up: KeyCode::Char('w'),
                    down: KeyCode::Char('s'),
                    left: KeyCode::Char('a'),
                    right: KeyCode::Char('d'),
                },
                right: ControlSet {
                    up: KeyCode::Up,
                    down: KeyCode::Down,
                    left: KeyCode::Left,
                    right: KeyCode::Right,
                },
                pause: KeyCode::Char(' '),
                quit: KeyCode::Char('q'),
                restart: KeyCode::Char('r'),
                inspect: KeyCode::Char('i'),
            },
            target_fps: 60,
        }
    }
}

fn key(name: &str, action: &str) -> Result<KeyCode> {
    parse_key(name).with_context(|| format!("unknown key {:?} bound to {}", name, action))
}

impl Config {
    /// Parse key names and check that the arena can hold what it is asked to
    pub fn resolve(&self) -> Result<Settings> {
        let kb = &self.keybindings;
        let controls = Controls {
            left: ControlSet {
                up: key(&kb.left_up, "left_up")?,
                down: key(&kb.left_down, "left_down")?,
                left: key(&kb.left_left, "left_left")?,
                right: key(&kb.left_right, "left_right")?,
            },
            right: ControlSet {
                up: key(&kb.right_up, "right_up")?,
                down: key(&kb.right_down, "right_down")?,
                left: key(&kb.right_left, "right_left")?,
                right: key(&kb.right_right, "right_right")?,
            },
            pause: key(&kb.pause, "pause")?,
            quit: key(&kb.quit, "quit")?,
            restart: key(&kb.restart, "restart")?,
            inspect: key(&kb.inspect, "inspect")?,
        };

        let physics = &self.physics;
        let display = &self.display;
        let settings = Settings {
            arena: ArenaSettings {
                width: self.arena.width,
                height: self.arena.height,
            },
            paddle: PaddleSettings {
                width: physics.paddle_width,
                height: physics.paddle_height,
                margin: physics.paddle_margin,
                speed: physics.paddle_speed,
            },
            ball: BallSettings {
                size: physics.ball_size,
                speed: physics.ball_speed,
                angle_min: physics.angle_min,
                angle_max: physics.angle_max,
            },
            palette: Palette {
                background: display.background_color.into(),
                paddle: display.paddle_color.into(),
                ball: display.ball_color.into(),
                text: display.text_color.into(),
                trajectory: display.trajectory_color.into(),
            },
            controls,
            target_fps: display.target_fps,
        };

        settings.controls.ensure_distinct()?;
        settings.validate()?;
        Ok(settings)
    }
}

/// Largest arena edge accepted from the file, keeps coordinate math in i32
const MAX_ARENA_SIZE: i32 = 100_000;

impl Settings {
    fn validate(&self) -> Result<()> {
        let arena = self.arena;
        let paddle = self.paddle;
        let ball = self.ball;

        if arena.width <= 0 || arena.height <= 0 {
            bail!("arena must be larger than 0x0, got {}x{}", arena.width, arena.height);
        }
        if paddle.width <= 0 || paddle.height <= 0 {
            bail!("paddle size must be positive, got {}x{}", paddle.width, paddle.height);
        }
        if ball.size <= 0 {
            bail!("ball size must be positive, got {}", ball.size);
        }
        if paddle.margin < 0 || paddle.speed < 0 {
            bail!("paddle margin and speed cannot be negative");
        }
        if arena.width > MAX_ARENA_SIZE || arena.height > MAX_ARENA_SIZE {
            bail!(
                "arena of {}x{} is larger than {}x{}",
                arena.width,
                arena.height,
                MAX_ARENA_SIZE,
                MAX_ARENA_SIZE
            );
        }
        // Both paddles side by side with their margins, and room to start at half height.
        // Widened so values straight from the file cannot overflow.
        let (margin, width, height) = (
            i64::from(paddle.margin),
            i64::from(paddle.width),
            i64::from(paddle.height),
        );
        if 2 * (margin + width) > i64::from(arena.width)
            || i64::from(arena.height / 2) + height > i64::from(arena.height)
        {
            bail!("paddles of {}x{} do not fit in the arena", paddle.width, paddle.height);
        }
        if ball.size > arena.width || ball.size > arena.height {
            bail!("ball of size {} does not fit in the arena", ball.size);
        }
        if paddle.speed > arena.height {
            bail!("paddle speed {} is more than the arena height", paddle.speed);
        }
        let max_ball_speed = arena.width.min(arena.height) as f32;
        if !(ball.speed > 0.0 && ball.speed <= max_ball_speed) {
            bail!("ball speed must be in (0, {}], got {}", max_ball_speed, ball.speed);
        }
        if ball.angle_min > ball.angle_max {
            bail!("empty serve angle range {}..={}", ball.angle_min, ball.angle_max);
        }
        if ball.serve_angles().is_empty() {
            bail!(
                "no serve angle in {}..={} moves the ball on both axes at speed {}",
                ball.angle_min,
                ball.angle_max,
                ball.speed
            );
        }
        if self.target_fps == 0 {
            bail!("target_fps must be at least 1");
        }
        Ok(())
    }
}
