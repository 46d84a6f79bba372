use crate::config::Settings;
use crate::game::input::InputEvent;

use super::{Player, Side};

/// Keyboard-driven player
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    pub player: Player,
}

impl HumanPlayer {
    pub const TITLE: &'static str = "Human";

    pub fn new(side: Side, settings: &Settings) -> Self {
        Self {
            player: Player::new(side, settings),
        }
    }

    /// A press of one of our keys makes it the active command. A release
    /// clears the slot only when it releases that same command, so the last
    /// key pressed keeps driving the paddle. Other events are ignored.
    pub fn react_to(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(key) => {
                if let Some(command) = self.player.controls.command_for(key) {
                    self.player.last_command = Some(command);
                }
            }
            InputEvent::KeyUp(key) => {
                let released = self.player.controls.command_for(key);
                if released.is_some() && released == self.player.last_command {
                    self.player.last_command = None;
                }
            }
            InputEvent::Quit => {}
        }
    }
}
