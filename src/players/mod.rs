// Players: a paddle bound to a control policy
//
// Both kinds share the same last-command model. Only the way the command
// gets chosen differs: keyboard events for humans, ball tracking for bots.

mod bot;
mod human;

pub use bot::BotPlayer;
pub use human::HumanPlayer;

use crossterm::event::KeyCode;

use crate::config::Settings;
use crate::game::draw::Canvas;
use crate::game::geometry::Point;
use crate::game::paddle::Paddle;

/// Left/right keys are bound and tracked, but paddles only travel vertically
/// while this stays false
pub const HORIZONTAL_MOVEMENT_ENABLED: bool = false;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn both() -> [Side; 2] {
        [Side::Left, Side::Right]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Who drives a side's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PlayerKind {
    Human,
    Bot,
}

/// Logical directional commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
}

/// Keys bound to one side's commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlSet {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
}

impl ControlSet {
    pub fn command_for(&self, key: KeyCode) -> Option<Command> {
        if key == self.up {
            Some(Command::Up)
        } else if key == self.down {
            Some(Command::Down)
        } else if key == self.left {
            Some(Command::Left)
        } else if key == self.right {
            Some(Command::Right)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub side: Side,
    pub controls: ControlSet,
    pub paddle: Paddle,
    pub last_command: Option<Command>,
}

impl Player {
    pub fn new(side: Side, settings: &Settings) -> Self {
        let sizes = &settings.paddle;
        let x = match side {
            Side::Left => sizes.margin,
            Side::Right => settings.arena.width - sizes.margin - sizes.width,
        };
        let paddle = Paddle::new(
            Point::new(x, settings.arena.height / 2),
            (sizes.width, sizes.height),
            sizes.speed,
            settings.boundary(),
            settings.palette.paddle,
        );

        Self {
            side,
            controls: settings.controls.for_side(side),
            paddle,
            last_command: None,
        }
    }

    /// Move one step according to the last command
    pub fn step(&mut self) {
        let speed = self.paddle.speed;
        match self.last_command {
            Some(Command::Down) => self.paddle.move_by(0, speed),
            Some(Command::Up) => self.paddle.move_by(0, -speed),
            Some(Command::Left) if HORIZONTAL_MOVEMENT_ENABLED => self.paddle.move_by(-speed, 0),
            Some(Command::Right) if HORIZONTAL_MOVEMENT_ENABLED => self.paddle.move_by(speed, 0),
            _ => {}
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.paddle.draw(canvas);
    }
}
