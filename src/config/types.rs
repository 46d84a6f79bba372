// duopong configuration file types
// Every section falls back to the defaults below when absent

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub arena: ArenaConfig,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    // Left paddle
    pub left_up: String,
    pub left_down: String,
    pub left_left: String,
    pub left_right: String,
    // Right paddle
    pub right_up: String,
    pub right_down: String,
    pub right_left: String,
    pub right_right: String,
    // Match controls
    pub pause: String,
    pub quit: String,
    pub restart: String,
    pub inspect: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: "W".to_string(),
            left_down: "S".to_string(),
            left_left: "A".to_string(),
            left_right: "D".to_string(),
            right_up: "Up".to_string(),
            right_down: "Down".to_string(),
            right_left: "Left".to_string(),
            right_right: "Right".to_string(),
            pause: "Space".to_string(),
            quit: "Q".to_string(),
            restart: "R".to_string(),
            inspect: "I".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ArenaConfig {
    // Play field size in arena pixels
    pub width: i32,
    pub height: i32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub paddle_width: i32,
    pub paddle_height: i32,
    // Gap between a paddle and its side wall
    pub paddle_margin: i32,
    // Pixels per frame
    pub paddle_speed: i32,
    // The ball is square
    pub ball_size: i32,
    pub ball_speed: f32,
    // Serve angle range, inclusive
    pub angle_min: i32,
    pub angle_max: i32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            paddle_width: 10,
            paddle_height: 100,
            paddle_margin: 10,
            paddle_speed: 4,
            ball_size: 15,
            ball_speed: 5.0,
            angle_min: 35,
            angle_max: 55,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub target_fps: u64,
    // Colours as RGB values 0-255
    pub background_color: [u8; 3],
    pub paddle_color: [u8; 3],
    pub ball_color: [u8; 3],
    pub text_color: [u8; 3],
    pub trajectory_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            background_color: [0, 0, 0],
            paddle_color: [255, 255, 255],
            ball_color: [255, 255, 255],
            text_color: [0, 200, 255],
            trajectory_color: [255, 0, 0],
        }
    }
}
