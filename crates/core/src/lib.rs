//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules, state management and simulation logic.
//! It has no dependencies on the terminal or the input layer, which makes it:
//!
//! - **Deterministic**: the same seed produces identical piece sequences
//! - **Testable**: every rule is exercised without a screen
//! - **Portable**: anything implementing [`Renderer`] can draw it
//!
//! # Module Structure
//!
//! - [`board`]: the well, with collision checks and line clearing
//! - [`shapes`]: static offset table for the 7 tetrominoes in 4 rotations
//! - [`piece`]: a positioned, rotated tetromino
//! - [`game_state`]: active piece, hold, ghost, scoring and timing
//! - [`session`]: quit/restart around a game and the finished-game summary
//! - [`clock`]: gravity cadence driven by caller-supplied elapsed time
//! - [`rng`]: seeded uniform and 7-bag piece generation
//! - [`scoring`]: line clear points and level progression
//! - [`config`]: tunables, difficulty presets and JSON config files
//! - [`snapshot`]: the read-only view handed to renderers
//! - [`render`]: the renderer capability
//!
//! # Game Rules
//!
//! - **Gravity**: the piece falls one row per drop interval; every drop shortens
//!   the interval slightly and every level-up shortens it more, down to a floor
//! - **Rotation**: clockwise only, with a short list of wall kicks tried from the
//!   original anchor
//! - **Ghost Piece**: shows where the current piece will land
//! - **Hold**: store one piece for later use (once per lock)
//! - **Scoring**: 100/300/500/800 per 1/2/3/4 lines, times the level
//!
//! # Example
//!
//! ```
//! use term_tetris_core::{GameConfig, GameState};
//! use term_tetris_core::types::GameAction;
//!
//! let mut game = GameState::new(GameConfig::default(), 12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateClockwise);
//! game.apply_action(GameAction::HardDrop);
//!
//! // One piece is on the floor and a fresh one has spawned.
//! assert_eq!(game.board().count_filled_cells(), 4);
//! assert_eq!(game.current().y, 0);
//! ```
//!
//! # Timing
//!
//! Nothing here sleeps or owns a timer. Call
//! [`GameState::tick`](game_state::GameState::tick) with the time elapsed since the
//! previous call; the frame rate is entirely up to the caller.

pub mod board;
pub mod clock;
pub mod config;
pub mod game_state;
pub mod piece;
pub mod render;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use term_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::DropClock;
pub use config::{ConfigError, Difficulty, GameConfig};
pub use game_state::{landing_position, GameState, GameSummary, LockEvent, TickOutcome};
pub use piece::Piece;
pub use render::Renderer;
pub use rng::{PieceGenerator, RandomizerKind, SimpleRng};
pub use scoring::{calculate_score, ScoreResult};
pub use session::{Session, SessionControl};
pub use snapshot::{GameSnapshot, PieceSnapshot};
