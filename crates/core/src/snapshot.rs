//! Read-only view of a game, handed to renderers after each mutation

use std::time::Duration;

use crate::piece::Piece;
use crate::types::{Cell, GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i32,
    pub y: i32,
    /// Absolute cells, may include rows above the board
    pub cells: [(i32, i32); 4],
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            cells: value.occupied_cells(),
        }
    }
}

impl PieceSnapshot {
    pub fn covers(&self, x: i32, y: i32) -> bool {
        self.cells.contains(&(x, y))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major board cells (`y * width + x`)
    pub board: Vec<Cell>,
    pub current: PieceSnapshot,
    pub ghost: PieceSnapshot,
    pub next: PieceKind,
    pub held: Option<PieceKind>,
    pub can_hold: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub paused: bool,
    pub game_over: bool,
    pub drop_interval: Duration,
    pub play_time: Duration,
}

impl GameSnapshot {
    /// Board cell at (x, y), empty when out of range
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return Cell::Empty;
        }
        self.board[y as usize * self.width + x as usize]
    }

    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::GameOver
        } else if self.paused {
            GameStatus::Paused
        } else {
            GameStatus::Playing
        }
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let piece = PieceSnapshot::from(Piece::new(PieceKind::I, 0, 0));
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            board: vec![Cell::Empty; BOARD_WIDTH * BOARD_HEIGHT],
            current: piece,
            ghost: piece,
            next: PieceKind::I,
            held: None,
            can_hold: true,
            score: 0,
            level: 1,
            lines: 0,
            paused: false,
            game_over: false,
            drop_interval: Duration::ZERO,
            play_time: Duration::ZERO,
        }
    }
}
