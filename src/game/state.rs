// Match controller: owns every entity and drives the per-frame pipeline

use std::io;
use std::time::Duration;

use rand::rngs::StdRng;

use super::ball::Ball;
use super::clock::FrameClock;
use super::draw::{Canvas, Draw};
use super::input::{EventSource, InputEvent};
use super::physics::{self, PhysicsEvents};
use super::score::{Background, PlayerTitle, ScoreCard};
use crate::config::Settings;
use crate::players::{BotPlayer, HumanPlayer, Player, PlayerKind, Side};

/// How long the pause loop waits for input before polling again
const PAUSE_POLL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    NotStarted,
    Running,
    Paused,
    Ended,
}

/// Why a match stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Quit,
    Restart,
}

/// Handle to an entity registered in a dispatch list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityId {
    Ball,
    Player(Side),
    Title(Side),
}

/// A side's player, whichever way it is controlled
#[derive(Debug, Clone)]
pub enum Contestant {
    Human(HumanPlayer),
    Bot(BotPlayer),
}

impl Contestant {
    fn new(kind: PlayerKind, side: Side, settings: &Settings) -> Self {
        match kind {
            PlayerKind::Human => Contestant::Human(HumanPlayer::new(side, settings)),
            PlayerKind::Bot => Contestant::Bot(BotPlayer::new(side, settings)),
        }
    }

    pub fn player(&self) -> &Player {
        match self {
            Contestant::Human(human) => &human.player,
            Contestant::Bot(bot) => &bot.player,
        }
    }

    pub fn player_mut(&mut self) -> &mut Player {
        match self {
            Contestant::Human(human) => &mut human.player,
            Contestant::Bot(bot) => &mut bot.player,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Contestant::Human(_) => HumanPlayer::TITLE,
            Contestant::Bot(_) => BotPlayer::TITLE,
        }
    }
}

/// Whatever shows a finished frame to the user
pub trait Screen {
    fn present(&mut self, game: &Match) -> io::Result<()>;
}

fn side_index(side: Side) -> usize {
    match side {
        Side::Left => 0,
        Side::Right => 1,
    }
}

pub struct Match {
    settings: Settings,
    lineup: [PlayerKind; 2],
    rng: StdRng,
    state: MatchState,
    frame: u64,

    background: Background,
    scorecard: ScoreCard,
    ball: Ball,
    players: [Contestant; 2],
    titles: [PlayerTitle; 2],

    // Dispatch lists, rebuilt by new_game
    to_draw: Vec<EntityId>,
    to_move: Vec<EntityId>,
    to_react: Vec<Side>,
}

impl Match {
    /// `lineup` holds the left and right player kinds, in that order
    pub fn new(settings: Settings, lineup: [PlayerKind; 2], mut rng: StdRng) -> Self {
        let ball = Ball::random(&mut rng, &settings);
        let players = Side::both().map(|side| Contestant::new(lineup[side_index(side)], side, &settings));
        let titles = Side::both().map(|side| {
            PlayerTitle::new(players[side_index(side)].title(), side, &settings)
        });

        Self {
            background: Background::new(&settings),
            scorecard: ScoreCard::new(&settings),
            ball,
            players,
            titles,
            settings,
            lineup,
            rng,
            state: MatchState::NotStarted,
            frame: 0,
            to_draw: Vec::new(),
            to_move: Vec::new(),
            to_react: Vec::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn scorecard(&self) -> &ScoreCard {
        &self.scorecard
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn contestant(&self, side: Side) -> &Contestant {
        &self.players[side_index(side)]
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Throw away every entity and start over from a fresh serve
    pub fn new_game(&mut self) {
        let settings = &self.settings;
        self.background = Background::new(settings);
        self.scorecard = ScoreCard::new(settings);
        self.ball = Ball::random(&mut self.rng, settings);

        let lineup = self.lineup;
        self.players = Side::both().map(|side| Contestant::new(lineup[side_index(side)], side, settings));
        let players = &self.players;
        self.titles = Side::both().map(|side| {
            PlayerTitle::new(players[side_index(side)].title(), side, settings)
        });

        self.to_draw = vec![EntityId::Ball];
        self.to_move = vec![EntityId::Ball];
        self.to_react.clear();
        for side in Side::both() {
            self.register_player(side);
        }

        self.frame = 0;
        self.state = MatchState::Running;
        tracing::info!(
            left = ?self.lineup[0],
            right = ?self.lineup[1],
            ball = %self.ball,
            "new match"
        );
    }

    fn register_player(&mut self, side: Side) {
        self.to_react.push(side);
        self.to_move.push(EntityId::Player(side));
        self.to_draw.push(EntityId::Player(side));
        self.to_draw.push(EntityId::Title(side));
    }

    /// Start a fresh match and run it to the end
    pub fn play<E: EventSource, S: Screen>(
        &mut self,
        input: &mut E,
        screen: &mut S,
        clock: &mut FrameClock,
    ) -> io::Result<MatchOutcome> {
        self.new_game();
        self.run(input, screen, clock)
    }

    /// Frame loop: simulate, present, wait for the next frame
    pub fn run<E: EventSource, S: Screen>(
        &mut self,
        input: &mut E,
        screen: &mut S,
        clock: &mut FrameClock,
    ) -> io::Result<MatchOutcome> {
        loop {
            if let Some(outcome) = self.step(input, screen)? {
                return Ok(outcome);
            }
            screen.present(self)?;
            clock.tick();
        }
    }

    /// Input, collisions and motion for one frame. Returns the outcome when
    /// the match ended during input handling, in which case the frame stops.
    pub fn step<E: EventSource, S: Screen>(
        &mut self,
        input: &mut E,
        screen: &mut S,
    ) -> io::Result<Option<MatchOutcome>> {
        let events = input.poll_events(Duration::ZERO)?;
        if let Some(outcome) = self.handle_input(&events, input, screen)? {
            self.state = MatchState::Ended;
            tracing::info!(?outcome, score = self.scorecard.text(), "match ended");
            return Ok(Some(outcome));
        }

        let physics_events = self.resolve_collisions();
        if physics_events.any() {
            tracing::trace!(frame = self.frame, ?physics_events, "collision");
        }
        if let Some(side) = physics_events.scored {
            tracing::info!(scorer = side.name(), score = self.scorecard.text(), "point");
        }

        self.advance();
        self.frame += 1;
        Ok(None)
    }

    fn handle_input<E: EventSource, S: Screen>(
        &mut self,
        events: &[InputEvent],
        input: &mut E,
        screen: &mut S,
    ) -> io::Result<Option<MatchOutcome>> {
        let controls = self.settings.controls;

        for event in events {
            match *event {
                InputEvent::Quit => return Ok(Some(MatchOutcome::Quit)),
                InputEvent::KeyDown(key) if key == controls.quit => {
                    return Ok(Some(MatchOutcome::Quit))
                }
                InputEvent::KeyDown(key) if key == controls.restart => {
                    return Ok(Some(MatchOutcome::Restart))
                }
                InputEvent::KeyDown(key) if key == controls.pause => {
                    if !self.pause(input, screen)? {
                        return Ok(Some(MatchOutcome::Quit));
                    }
                }
                InputEvent::KeyDown(key) if key == controls.inspect => self.log_inspect(),
                _ => {}
            }

            for &side in &self.to_react {
                if let Contestant::Human(human) = &mut self.players[side_index(side)] {
                    human.react_to(event);
                }
            }
        }

        for &side in &self.to_react {
            if let Contestant::Bot(bot) = &mut self.players[side_index(side)] {
                bot.react_to(&self.ball);
            }
        }

        Ok(None)
    }

    /// Blocks until the pause key comes again (true) or a quit arrives (false)
    fn pause<E: EventSource, S: Screen>(&mut self, input: &mut E, screen: &mut S) -> io::Result<bool> {
        self.state = MatchState::Paused;
        tracing::info!(frame = self.frame, "paused");
        screen.present(self)?;

        let controls = self.settings.controls;
        loop {
            for event in input.poll_events(PAUSE_POLL)? {
                match event {
                    InputEvent::Quit => return Ok(false),
                    InputEvent::KeyDown(key) if key == controls.quit => return Ok(false),
                    InputEvent::KeyDown(key) if key == controls.pause => {
                        self.state = MatchState::Running;
                        tracing::info!("resumed");
                        return Ok(true);
                    }
                    _ => {}
                }
            }
        }
    }

    fn resolve_collisions(&mut self) -> PhysicsEvents {
        let [left, right] = &self.players;
        physics::resolve(
            &mut self.ball,
            &left.player().paddle,
            &right.player().paddle,
            &mut self.scorecard,
        )
    }

    fn advance(&mut self) {
        for id in &self.to_move {
            match *id {
                EntityId::Ball => self.ball.advance(),
                EntityId::Player(side) => self.players[side_index(side)].player_mut().step(),
                EntityId::Title(_) => {}
            }
        }
    }

    fn log_inspect(&self) {
        let [left, right] = &self.players;
        let path = self.ball.path();
        let midline = self.settings.arena.height as f32 / 2.0;
        tracing::debug!(
            frame = self.frame,
            ball = %self.ball,
            path = ?path.map(|line| line.to_string()),
            crosses_midline_at = ?path.and_then(|line| line.solve_x(midline)),
            trajectory = %self.ball.trajectory(),
            left_paddle = %left.player().paddle.body.position(),
            right_paddle = %right.player().paddle.body.position(),
            score = self.scorecard.text(),
            "inspect"
        );
    }
}

impl Draw for Match {
    fn draw(&self, canvas: &mut dyn Canvas) {
        self.background.draw(canvas);
        self.scorecard.draw(canvas);

        for id in &self.to_draw {
            match *id {
                EntityId::Ball => self.ball.draw(canvas),
                EntityId::Player(side) => self.players[side_index(side)].player().draw(canvas),
                EntityId::Title(side) => self.titles[side_index(side)].draw(canvas),
            }
        }

        let path = self.ball.trajectory().segment();
        canvas.draw_line(path.a, path.b, self.settings.palette.trajectory);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ball::Velocity;
    use crate::game::draw::testing::{DrawOp, RecordingCanvas};
    use crate::game::geometry::Point;
    use crate::game::input::testing::ScriptedEvents;
    use crate::players::Command;
    use crossterm::event::KeyCode;
    use rand::SeedableRng;

    /// Counts presents and remembers the state seen each time
    #[derive(Default)]
    struct CountingScreen {
        states: Vec<MatchState>,
    }

    impl Screen for CountingScreen {
        fn present(&mut self, game: &Match) -> io::Result<()> {
            self.states.push(game.state());
            Ok(())
        }
    }

    fn new_match(lineup: [PlayerKind; 2]) -> Match {
        let mut game = Match::new(Settings::default(), lineup, StdRng::seed_from_u64(1));
        game.new_game();
        game
    }

    fn human_vs_bot() -> Match {
        new_match([PlayerKind::Human, PlayerKind::Bot])
    }

    fn place_ball(game: &mut Match, x: i32, y: i32, vx: i32, vy: i32) {
        let settings = Settings::default();
        game.ball = Ball::new(
            Point::new(x, y),
            Velocity::new(vx, vy),
            settings.ball.size,
            settings.boundary(),
            settings.palette.ball,
        );
    }

    fn key_down(c: char) -> InputEvent {
        InputEvent::KeyDown(KeyCode::Char(c))
    }

    #[test]
    fn test_new_game_registers_everything() {
        let mut game = Match::new(
            Settings::default(),
            [PlayerKind::Human, PlayerKind::Bot],
            StdRng::seed_from_u64(3),
        );
        assert_eq!(game.state(), MatchState::NotStarted);

        game.new_game();
        assert_eq!(game.state(), MatchState::Running);
        assert_eq!(
            game.to_draw,
            vec![
                EntityId::Ball,
                EntityId::Player(Side::Left),
                EntityId::Title(Side::Left),
                EntityId::Player(Side::Right),
                EntityId::Title(Side::Right),
            ]
        );
        assert_eq!(
            game.to_move,
            vec![EntityId::Ball, EntityId::Player(Side::Left), EntityId::Player(Side::Right)]
        );
        assert_eq!(game.to_react, vec![Side::Left, Side::Right]);
        assert!(matches!(game.contestant(Side::Left), Contestant::Human(_)));
        assert!(matches!(game.contestant(Side::Right), Contestant::Bot(_)));
        assert_eq!(game.titles[1].title, "PongBot");
    }

    #[test]
    fn test_new_game_resets_score_and_serve() {
        let mut game = human_vs_bot();
        game.scorecard.left_win();
        game.new_game();

        assert_eq!(game.scorecard().text(), "0 | 0");
        assert_eq!(game.ball().body.position().x, 300);
        assert_ne!(game.ball().velocity.x, 0);
        assert_ne!(game.ball().velocity.y, 0);
        assert_eq!(game.frame_count(), 0);
    }

    #[test]
    fn test_ball_flies_reflects_and_scores() {
        let mut game = human_vs_bot();
        let mut input = ScriptedEvents::default();
        let mut screen = CountingScreen::default();
        place_ball(&mut game, 100, 100, -5, -7);

        // Pure velocity addition until the top wall is crossed
        for n in 1..=15 {
            assert_eq!(game.step(&mut input, &mut screen).unwrap(), None);
            assert_eq!(game.ball().body.position(), Point::new(100 - 5 * n, 100 - 7 * n));
        }

        // Crossed the top: only the vertical sign flips
        game.step(&mut input, &mut screen).unwrap();
        assert_eq!(game.ball().velocity, Velocity::new(-5, 7));
        assert_eq!(game.ball().body.position(), Point::new(20, 2));

        for _ in 17..=21 {
            game.step(&mut input, &mut screen).unwrap();
        }
        assert_eq!(game.ball().body.position(), Point::new(-5, 37));
        assert_eq!(game.scorecard().text(), "0 | 0");

        // Beyond the left wall: one point for the right side
        game.step(&mut input, &mut screen).unwrap();
        assert_eq!((game.scorecard().left(), game.scorecard().right()), (0, 1));
        assert_eq!(game.scorecard().text(), "0 | 1");
        assert_eq!(game.ball().velocity, Velocity::new(5, 7));
        assert_eq!(game.ball().body.position(), Point::new(0, 44));
        assert_eq!(game.frame_count(), 22);

        // Nothing was shown during plain steps
        assert!(screen.states.is_empty());
    }

    #[test]
    fn test_quit_stops_the_frame() {
        let mut game = human_vs_bot();
        place_ball(&mut game, 300, 300, 5, 3);
        let mut input = ScriptedEvents::new(vec![vec![InputEvent::Quit, key_down('s')]]);
        let mut screen = CountingScreen::default();

        let outcome = game.step(&mut input, &mut screen).unwrap();
        assert_eq!(outcome, Some(MatchOutcome::Quit));
        assert_eq!(game.state(), MatchState::Ended);

        // Neither the rest of the input nor motion happened
        assert_eq!(game.ball().body.position(), Point::new(300, 300));
        assert_eq!(game.contestant(Side::Left).player().last_command, None);
    }

    #[test]
    fn test_quit_and_restart_keys() {
        let mut game = human_vs_bot();
        let mut screen = CountingScreen::default();

        let mut input = ScriptedEvents::new(vec![vec![key_down('q')]]);
        assert_eq!(
            game.step(&mut input, &mut screen).unwrap(),
            Some(MatchOutcome::Quit)
        );

        game.new_game();
        let mut input = ScriptedEvents::new(vec![vec![key_down('r')]]);
        assert_eq!(
            game.step(&mut input, &mut screen).unwrap(),
            Some(MatchOutcome::Restart)
        );
    }

    #[test]
    fn test_pause_freezes_until_pause_key() {
        let mut game = human_vs_bot();
        place_ball(&mut game, 300, 300, 5, 3);
        let mut input = ScriptedEvents::new(vec![
            vec![key_down(' ')],
            // Swallowed while paused
            vec![key_down('s')],
            vec![],
            vec![key_down(' ')],
        ]);
        let mut screen = CountingScreen::default();

        assert_eq!(game.step(&mut input, &mut screen).unwrap(), None);
        assert_eq!(game.state(), MatchState::Running);
        assert_eq!(input.polls, 4);
        assert_eq!(screen.states, vec![MatchState::Paused]);

        // The frame finished after resuming
        assert_eq!(game.ball().body.position(), Point::new(305, 303));
        assert_eq!(game.contestant(Side::Left).player().last_command, None);
    }

    #[test]
    fn test_quit_while_paused_ends_the_match() {
        let mut game = human_vs_bot();
        let mut input = ScriptedEvents::new(vec![vec![key_down(' ')], vec![InputEvent::Quit]]);
        let mut screen = CountingScreen::default();

        assert_eq!(
            game.step(&mut input, &mut screen).unwrap(),
            Some(MatchOutcome::Quit)
        );
        assert_eq!(game.state(), MatchState::Ended);
    }

    #[test]
    fn test_human_input_moves_left_paddle() {
        let mut game = human_vs_bot();
        let mut screen = CountingScreen::default();
        let mut input = ScriptedEvents::new(vec![
            vec![key_down('s')],
            vec![],
            vec![InputEvent::KeyUp(KeyCode::Char('s'))],
        ]);

        for _ in 0..3 {
            game.step(&mut input, &mut screen).unwrap();
        }

        let left = game.contestant(Side::Left).player();
        assert_eq!(left.paddle.body.position(), Point::new(10, 308));
        assert_eq!(left.last_command, None);
    }

    #[test]
    fn test_bot_follows_the_ball() {
        let mut game = human_vs_bot();
        let mut input = ScriptedEvents::default();
        let mut screen = CountingScreen::default();
        // Ball center far above the right paddle center (350)
        place_ball(&mut game, 300, 100, 1, 1);

        game.step(&mut input, &mut screen).unwrap();
        let bot = game.contestant(Side::Right).player();
        assert_eq!(bot.last_command, Some(Command::Up));
        assert_eq!(bot.paddle.body.position(), Point::new(580, 296));
    }

    #[test]
    fn test_two_humans_use_their_own_keys() {
        let mut game = new_match([PlayerKind::Human, PlayerKind::Human]);
        let mut screen = CountingScreen::default();
        let mut input = ScriptedEvents::new(vec![vec![key_down('w'), InputEvent::KeyDown(KeyCode::Down)]]);

        game.step(&mut input, &mut screen).unwrap();

        assert_eq!(game.contestant(Side::Left).player().paddle.body.position().y, 296);
        assert_eq!(game.contestant(Side::Right).player().paddle.body.position().y, 304);
        assert_eq!(game.titles[1].title, "Human");
    }

    #[test]
    fn test_draw_order() {
        let mut game = human_vs_bot();
        place_ball(&mut game, 100, 100, 4, 2);
        let settings = Settings::default();
        let palette = settings.palette;

        let mut canvas = RecordingCanvas::default();
        game.draw(&mut canvas);

        let ball_rect = *game.ball().rect();
        let left_rect = *game.contestant(Side::Left).player().paddle.rect();
        let right_rect = *game.contestant(Side::Right).player().paddle.rect();
        assert_eq!(
            canvas.ops,
            vec![
                DrawOp::Clear(palette.background),
                DrawOp::Text("0 | 0".into(), Point::new(300, 20), palette.text),
                DrawOp::Rect(ball_rect, palette.ball),
                DrawOp::Rect(left_rect, palette.paddle),
                DrawOp::Text("Human".into(), Point::new(120, 20), palette.text),
                DrawOp::Rect(right_rect, palette.paddle),
                DrawOp::Text("PongBot".into(), Point::new(480, 20), palette.text),
                // Center (107, 107), slope 0.5 to x=600
                DrawOp::Line(Point::new(107, 107), Point::new(600, 354), palette.trajectory),
            ]
        );
    }

    #[test]
    fn test_play_presents_every_frame_until_quit() {
        let mut game = Match::new(
            Settings::default(),
            [PlayerKind::Bot, PlayerKind::Bot],
            StdRng::seed_from_u64(9),
        );
        let mut input = ScriptedEvents::new(vec![vec![], vec![], vec![], vec![InputEvent::Quit]]);
        let mut screen = CountingScreen::default();
        let mut clock = FrameClock::unthrottled();

        let outcome = game.play(&mut input, &mut screen, &mut clock).unwrap();

        assert_eq!(outcome, MatchOutcome::Quit);
        assert_eq!(screen.states, vec![MatchState::Running; 3]);
        assert_eq!(game.frame_count(), 3);
    }
}
