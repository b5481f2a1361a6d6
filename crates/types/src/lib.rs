//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond lookups, making them
//! usable in any context (engine, input mapping, rendering).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (a session may configure others):
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn position**: (4, 0), i.e. column `width / 2 - 1`
//!
//! # Speed Constants
//!
//! Timing values are in seconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_DROP_INTERVAL_SECS` | 1.0 | Gravity at level 1 |
//! | `SPEED_INCREASE_SECS` | 0.05 | Interval reduction after every gravity drop |
//! | `LEVEL_SPEED_INCREASE_SECS` | 0.1 | Interval reduction on level-up |
//! | `MIN_DROP_INTERVAL_SECS` | 0.05 | Floor for the drop interval |
//!
//! # Examples
//!
//! ```
//! use term_tetris_types::{PieceKind, Cell, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! // Kinds round-trip through their table position
//! assert_eq!(PieceKind::from_index(PieceKind::T.index()), PieceKind::T);
//!
//! // Cells carry the kind that filled them
//! assert_eq!(Cell::Occupied(PieceKind::I).kind(), Some(PieceKind::I));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Largest board width a configuration may ask for
pub const MAX_BOARD_WIDTH: usize = 64;

/// Largest board height a configuration may ask for
pub const MAX_BOARD_HEIGHT: usize = 64;

/// Default spawn column (center of the default board)
pub const START_X: i32 = BOARD_WIDTH as i32 / 2 - 1;

/// Default spawn row (top of the board)
pub const START_Y: i32 = 0;

/// Seconds per gravity drop at level 1
pub const INITIAL_DROP_INTERVAL_SECS: f64 = 1.0;

/// Drop interval reduction applied after each gravity drop
pub const SPEED_INCREASE_SECS: f64 = 0.05;

/// Drop interval reduction applied on each level-up
pub const LEVEL_SPEED_INCREASE_SECS: f64 = 0.1;

/// The drop interval never goes below this
pub const MIN_DROP_INTERVAL_SECS: f64 = 0.05;

/// Lines needed per level step (threshold is `level * LINES_PER_LEVEL`)
pub const LINES_PER_LEVEL: u32 = 10;

/// Highest level a session may start at
pub const MAX_STARTING_LEVEL: u32 = 10;

/// Line clear scoring table, indexed by lines cleared (4 or more pays the last entry).
///
/// Points awarded are `LINE_SCORES[lines] * level`.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Kick offsets tried, in order, when an in-place rotation collides.
///
/// Each offset is applied to the pre-rotation anchor (not accumulated).
pub const WALL_KICK_OFFSETS: [(i32, i32); 5] = [(-1, 0), (1, 0), (0, -1), (-1, -1), (1, -1)];

/// How many of [`WALL_KICK_OFFSETS`] are tried by default
pub const WALL_KICK_ATTEMPTS: usize = 3;

/// Color key for empty cells
pub const EMPTY_COLOR: &str = "#000000";

/// Color key for the ghost piece
pub const GHOST_COLOR: &str = "#333333";

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, straight bar
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, S-shaped
/// - **T**: Purple, T-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Position of this kind in [`PieceKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Inverse of [`PieceKind::index`], wrapping modulo 7
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Convert to single uppercase letter
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }

    /// Hex color key used by renderers
    ///
    /// ```
    /// use term_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.color(), "#00FFFF");
    /// ```
    pub fn color(&self) -> &'static str {
        match self {
            PieceKind::I => "#00FFFF",
            PieceKind::J => "#0000FF",
            PieceKind::L => "#FF7F00",
            PieceKind::O => "#FFFF00",
            PieceKind::S => "#00FF00",
            PieceKind::T => "#800080",
            PieceKind::Z => "#FF0000",
        }
    }
}

/// A cell on the game board
///
/// Occupied cells remember which kind filled them so renderers can color them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PieceKind),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    /// Kind that filled this cell, if any
    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(kind) => Some(*kind),
        }
    }

    /// Hex color key for this cell
    pub fn color(&self) -> &'static str {
        match self {
            Cell::Empty => EMPTY_COLOR,
            Cell::Occupied(kind) => kind.color(),
        }
    }
}

/// Discrete logical actions fed to the engine
///
/// The input collaborator produces these; the engine consumes exactly one per call.
/// `Quit` is interpreted by the caller, the engine never terminates itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot fall
    MoveDown,
    /// Rotate piece 90° clockwise (with wall kicks)
    RotateClockwise,
    /// Drop piece to its ghost position and lock it
    HardDrop,
    /// Hold current piece (once per lock)
    Hold,
    /// Toggle pause state
    Pause,
    /// Start a fresh game after game over
    Restart,
    /// Leave the game loop
    Quit,
}

impl GameAction {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::RotateClockwise => "rotateClockwise",
            GameAction::HardDrop => "hardDrop",
            GameAction::Hold => "hold",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
            GameAction::Quit => "quit",
        }
    }
}

/// Top-level game state machine
///
/// `Playing <-> Paused` via pause, `Playing -> GameOver` when a spawn collides,
/// `GameOver -> Playing` via restart (a fresh game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "game_over",
        }
    }
}
