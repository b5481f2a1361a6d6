//! Terminal Tetris runner (default binary).
//!
//! Wires the pieces together: crossterm input, the game session, and the
//! framebuffer-based terminal renderer. Logs go to a file so they never touch the
//! screen.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use term_tetris::core::{Difficulty, GameConfig, Session, SessionControl};
use term_tetris::input::handle_key_event;
use term_tetris::term::TerminalRenderer;
use term_tetris::types::MAX_STARTING_LEVEL;

const LOG_FILE: &str = "term-tetris.log";

/// Frame pacing for the render/input loop (about 60 FPS)
const FRAME: Duration = Duration::from_millis(16);

#[derive(Parser, Debug)]
#[command(version, about = "Falling-block puzzle game for the terminal", long_about = None)]
struct Cli {
    /// JSON config file; missing file means defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Speed preset: easy, normal, hard or expert.
    #[arg(short, long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,

    /// Starting level (shortens the initial drop interval).
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_STARTING_LEVEL as i64))]
    level: Option<u32>,

    /// Initial drop interval in seconds.
    #[arg(long)]
    speed: Option<f64>,

    /// Piece sequence seed, for replaying the same game.
    #[arg(short, long)]
    seed: Option<u32>,

    /// Log at debug level.
    #[arg(long)]
    debug: bool,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(s).ok_or_else(|| {
        let names: Vec<&str> = Difficulty::ALL.iter().map(|d| d.as_str()).collect();
        format!("unknown difficulty '{s}' (expected one of: {})", names.join(", "))
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug)?;

    let config = build_config(&cli)?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, ?config, "starting session");

    // Restore the terminal before the panic message is printed.
    std::panic::set_hook(Box::new(|panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stderr = io::stderr();
        let _ = crossterm::execute!(
            stderr,
            crossterm::style::ResetColor,
            crossterm::cursor::Show,
            crossterm::terminal::LeaveAlternateScreen
        );
        eprint!("{panic_info}\n\n");
    }));

    let mut term = TerminalRenderer::stdout().context("failed to query terminal size")?;
    term.enter().context("failed to enter raw mode")?;

    let result = run(&mut term, Session::new(config, seed));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(debug: bool) -> Result<()> {
    let log_file = File::create(LOG_FILE).with_context(|| format!("failed to create {LOG_FILE}"))?;
    let default_level = if debug { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Config file (if any), then difficulty preset, then individual flags.
fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load_or_default(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(difficulty) = cli.difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(level) = cli.level {
        config.starting_level = level;
    }
    if let Some(speed) = cli.speed {
        config.initial_drop_interval = speed;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn run(term: &mut TerminalRenderer, mut session: Session) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        session.render(term).context("failed to draw frame")?;

        // Input with timeout until the next frame.
        let timeout = FRAME.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(action) = handle_key_event(key) {
                        debug!(action = action.as_str(), "input");
                        if session.handle_action(action) == SessionControl::Quit {
                            break;
                        }
                    }
                }
                Event::Resize(width, height) => term.resize(width, height),
                _ => {}
            }
        }

        let now = Instant::now();
        session.tick(now - last_tick);
        last_tick = now;

        if let Some(summary) = session.take_finished() {
            info!(
                score = summary.score,
                level = summary.level,
                lines = summary.lines,
                seconds = summary.duration.as_secs(),
                "final score"
            );
        }
    }

    info!(games = session.games_played(), "session ended");
    Ok(())
}
