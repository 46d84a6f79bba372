mod config;
mod debug;
mod game;
mod players;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};

use config::{load_config, to_commented_toml, Settings};
use game::{FrameClock, Match, MatchOutcome, TerminalEvents};
use players::PlayerKind;
use ui::TerminalScreen;

/// duopong - two-paddle terminal pong
#[derive(Parser, Debug)]
#[command(name = "duopong", version, about)]
struct Cli {
    /// Who controls the left paddle
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    left: PlayerKind,

    /// Who controls the right paddle
    #[arg(long, value_enum, default_value_t = PlayerKind::Bot)]
    right: PlayerKind,

    /// Seed for a reproducible serve sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Configuration file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a debug log to the temp directory
    #[arg(long)]
    debug: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    debug::init(cli.debug).context("failed to open the debug log")?;

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    let settings = config.resolve().context("invalid configuration")?;

    if cli.print_config {
        print!("{}", to_commented_toml(&config)?);
        return Ok(());
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::info!(seed = ?cli.seed, left = ?cli.left, right = ?cli.right, "starting duopong");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Key release events need the kitty protocol, otherwise input falls back
    // to a hold timeout
    let reports_releases = supports_keyboard_enhancement().unwrap_or(false);
    if reports_releases {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    tracing::debug!(reports_releases, "keyboard setup");

    let backend = CrosstermBackend::new(stdout);
    let mut screen = TerminalScreen::new(Terminal::new(backend)?);

    // Run game
    let result = run_matches(settings, [cli.left, cli.right], rng, reports_releases, &mut screen);

    // Restore terminal
    let terminal = screen.terminal_mut();
    if reports_releases {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Play matches until one ends with a quit
fn run_matches(
    settings: Settings,
    lineup: [PlayerKind; 2],
    rng: StdRng,
    reports_releases: bool,
    screen: &mut TerminalScreen<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let mut clock = FrameClock::new(settings.target_fps);
    tracing::debug!(frame_duration = ?clock.frame_duration(), "frame pacing");
    let mut input = TerminalEvents::new(reports_releases);
    let mut game = Match::new(settings, lineup, rng);

    loop {
        match game.play(&mut input, screen, &mut clock)? {
            MatchOutcome::Quit => break,
            MatchOutcome::Restart => tracing::info!("restarting"),
        }
    }

    let score = game.scorecard();
    tracing::info!(
        left = score.left(),
        right = score.right(),
        frames = game.frame_count(),
        "goodbye"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_human_vs_bot() {
        let cli = Cli::try_parse_from(["duopong"]).unwrap();
        assert_eq!(cli.left, PlayerKind::Human);
        assert_eq!(cli.right, PlayerKind::Bot);
        assert_eq!(cli.seed, None);
        assert!(!cli.debug);
        assert!(!cli.print_config);
    }

    #[test]
    fn test_cli_accepts_lineup_and_seed() {
        let cli = Cli::try_parse_from([
            "duopong", "--left", "bot", "--right", "human", "--seed", "42", "--debug",
        ])
        .unwrap();
        assert_eq!(cli.left, PlayerKind::Bot);
        assert_eq!(cli.right, PlayerKind::Human);
        assert_eq!(cli.seed, Some(42));
        assert!(cli.debug);
    }

    #[test]
    fn test_cli_rejects_unknown_player_kind() {
        assert!(Cli::try_parse_from(["duopong", "--left", "robot"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
