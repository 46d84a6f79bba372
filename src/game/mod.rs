pub mod ball;
pub mod body;
pub mod clock;
pub mod draw;
pub mod geometry;
pub mod input;
pub mod paddle;
pub mod physics;
pub mod score;
pub mod state;

pub use clock::FrameClock;
pub use input::TerminalEvents;
pub use state::{Match, MatchOutcome};
