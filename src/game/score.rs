// Score keeping plus the static, render-only parts of the arena

use super::draw::{Canvas, Draw, Rgb};
use super::geometry::Point;
use crate::config::Settings;
use crate::players::Side;

/// Height of the text row holding the score and the player titles
pub const HEADER_Y: i32 = 20;

#[derive(Debug, Clone)]
pub struct ScoreCard {
    left: u32,
    right: u32,
    text: String,
    position: Point,
    color: Rgb,
}

impl ScoreCard {
    pub fn new(settings: &Settings) -> Self {
        let mut card = Self {
            left: 0,
            right: 0,
            text: String::new(),
            position: Point::new(settings.arena.width / 2, HEADER_Y),
            color: settings.palette.text,
        };
        card.refresh_text();
        card
    }

    pub fn left(&self) -> u32 {
        self.left
    }

    pub fn right(&self) -> u32 {
        self.right
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn left_win(&mut self) {
        self.left += 1;
        self.refresh_text();
    }

    pub fn right_win(&mut self) {
        self.right += 1;
        self.refresh_text();
    }

    fn refresh_text(&mut self) {
        self.text = format!("{} | {}", self.left, self.right);
    }
}

impl Draw for ScoreCard {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_text(&self.text, self.position, self.color);
    }
}

/// Name shown above one side of the arena
#[derive(Debug, Clone)]
pub struct PlayerTitle {
    pub title: String,
    pub side: Side,
    position: Point,
    color: Rgb,
}

impl PlayerTitle {
    pub fn new(title: &str, side: Side, settings: &Settings) -> Self {
        let width = settings.arena.width as f32;
        let x = match side {
            Side::Left => (width / 5.0).round(),
            Side::Right => (width * 4.0 / 5.0).round(),
        };
        Self {
            title: title.to_string(),
            side,
            position: Point::new(x as i32, HEADER_Y),
            color: settings.palette.text,
        }
    }
}

impl Draw for PlayerTitle {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_text(&self.title, self.position, self.color);
    }
}

#[derive(Debug, Clone)]
pub struct Background {
    color: Rgb,
}

impl Background {
    pub fn new(settings: &Settings) -> Self {
        Self {
            color: settings.palette.background,
        }
    }
}

impl Draw for Background {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.clear(self.color);
    }
}
