use super::ball::Ball;
use super::paddle::Paddle;
use super::score::ScoreCard;
use crate::players::Side;

/// What happened during one collision/scoring pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PhysicsEvents {
    pub paddle_collision: bool,
    pub wall_collision: bool,
    pub scored: Option<Side>,
}

impl PhysicsEvents {
    pub fn any(&self) -> bool {
        self.paddle_collision || self.wall_collision || self.scored.is_some()
    }
}

/// Resolve paddle hits, goals and wall bounces for the current positions.
///
/// Nothing moves here except the ball being pushed flush against a paddle it
/// overlaps; motion happens in a separate step afterwards.
pub fn resolve(ball: &mut Ball, left: &Paddle, right: &Paddle, score: &mut ScoreCard) -> PhysicsEvents {
    let mut events = PhysicsEvents::default();

    if left.rect().intersects(ball.rect()) {
        ball.velocity.x = ball.velocity.x.abs();
        ball.body.rect.set_left(left.rect().right());
        events.paddle_collision = true;
    }

    if right.rect().intersects(ball.rect()) {
        ball.velocity.x = -ball.velocity.x.abs();
        ball.body.rect.set_right(right.rect().left());
        events.paddle_collision = true;
    }

    // Goals: the ball bounces back into play from the wall it crossed
    if ball.body.is_beyond_left(0) {
        ball.bounce_x();
        score.right_win();
        events.scored = Some(Side::Right);
    } else if ball.body.is_beyond_right(0) {
        ball.bounce_x();
        score.left_win();
        events.scored = Some(Side::Left);
    }

    if ball.body.is_beyond_top(0) || ball.body.is_beyond_bottom(0) {
        ball.bounce_y();
        events.wall_collision = true;
    }

    events
}
