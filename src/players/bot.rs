// Reactive opponent that chases the ball's height

use crate::config::Settings;
use crate::game::ball::Ball;

use super::{Command, Player, Side};

/// Tracks the ball every frame.
///
/// - Moves toward the ball center's height, whatever direction the ball travels
/// - No prediction, no reaction delay, no speed changes
/// - Stops only when the centers line up exactly
#[derive(Debug, Clone)]
pub struct BotPlayer {
    pub player: Player,
}

impl BotPlayer {
    pub const TITLE: &'static str = "PongBot";

    pub fn new(side: Side, settings: &Settings) -> Self {
        Self {
            player: Player::new(side, settings),
        }
    }

    pub fn react_to(&mut self, ball: &Ball) {
        let distance = self.vertical_distance(ball);

        self.player.last_command = if distance > 0 {
            Some(Command::Down) // Ball below
        } else if distance < 0 {
            Some(Command::Up)
        } else {
            None
        };
    }

    /// Positive when the ball center is below the paddle center
    fn vertical_distance(&self, ball: &Ball) -> i32 {
        ball.body.center().y - self.player.paddle.body.center().y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ball::Velocity;
    use crate::game::draw::Rgb;
    use crate::game::geometry::Point;

    // Default paddle sits at y=300 with height 100, so its center is y=350
    fn bot_with_center_at(y: i32) -> BotPlayer {
        let mut bot = BotPlayer::new(Side::Right, &Settings::default());
        bot.player.paddle.body.rect.y = y - 50;
        bot
    }

    // Ball size 15: center is 7px below the top edge
    fn ball_with_center_at(y: i32) -> Ball {
        let settings = Settings::default();
        Ball::new(
            Point::new(300, y - 7),
            Velocity::new(5, 3),
            15,
            settings.boundary(),
            Rgb(0, 0, 0),
        )
    }

    #[test]
    fn test_ball_below_means_down() {
        let mut bot = bot_with_center_at(250);
        bot.react_to(&ball_with_center_at(300));
        assert_eq!(bot.player.last_command, Some(Command::Down));
    }

    #[test]
    fn test_ball_above_means_up() {
        let mut bot = bot_with_center_at(250);
        bot.react_to(&ball_with_center_at(200));
        assert_eq!(bot.player.last_command, Some(Command::Up));
    }

    #[test]
    fn test_level_ball_means_stop() {
        let mut bot = bot_with_center_at(250);
        bot.react_to(&ball_with_center_at(300));
        bot.react_to(&ball_with_center_at(250));
        assert_eq!(bot.player.last_command, None);
    }

    #[test]
    fn test_bot_closes_the_gap() {
        let mut bot = bot_with_center_at(250);
        let ball = ball_with_center_at(290);
        for _ in 0..10 {
            bot.react_to(&ball);
            bot.player.step();
        }
        assert_eq!(bot.player.paddle.body.center().y, 290);
        bot.react_to(&ball);
        assert_eq!(bot.player.last_command, None);
    }
}
