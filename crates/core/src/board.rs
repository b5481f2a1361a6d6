//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or filled with a piece kind.
//! Uses a flat row-major vector (`y * width + x`) for cache locality; dimensions are
//! fixed at construction and never change afterwards.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom (row 0 is the top).
//!
//! Piece cells above the board (`y < 0`) are legal: a freshly spawned or kicked piece may
//! poke out of the top. Anything left of, right of, or below the grid is not.

use crate::piece::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_COLOR};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat vector of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    ///
    /// Out-of-range coordinates read as [`Cell::Empty`].
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.index(x, y)
            .map(|idx| self.cells[idx])
            .unwrap_or(Cell::Empty)
    }

    /// Color key of the cell at (x, y), the empty color when out of range
    pub fn color_key(&self, x: i32, y: i32) -> &'static str {
        match self.index(x, y) {
            Some(idx) => self.cells[idx].color(),
            None => EMPTY_COLOR,
        }
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).is_occupied()
    }

    /// Whether a single mino may sit at (x, y)
    ///
    /// Rows above the board are open; walls and floor are not.
    fn mino_fits(&self, x: i32, y: i32) -> bool {
        if x < 0 || x as usize >= self.width || (y >= 0 && y as usize >= self.height) {
            return false;
        }
        y < 0 || !self.is_occupied(x, y)
    }

    /// Check if every cell of `piece` is inside the walls, above the floor, and free
    pub fn is_valid_position(&self, piece: &Piece) -> bool {
        piece
            .occupied_cells()
            .iter()
            .all(|&(x, y)| self.mino_fits(x, y))
    }

    /// Commit a piece to the board
    ///
    /// Returns false, leaving the board untouched, if the position is not valid.
    /// Cells above the top row are dropped.
    pub fn place(&mut self, piece: &Piece) -> bool {
        if !self.is_valid_position(piece) {
            return false;
        }

        for (x, y) in piece.occupied_cells() {
            if y >= 0 {
                self.set(x, y, Cell::Occupied(piece.kind));
            }
        }

        true
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(Cell::is_occupied))
            .unwrap_or(false)
    }

    /// Check if a row has no filled cell (false when out of range)
    pub fn row_is_empty(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(Cell::is_empty))
            .unwrap_or(false)
    }

    /// Slice of one row
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // `max(1)` keeps `chunks` happy on a zero-width board.
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Non-full rows keep their relative order and slide down; the same number of
    /// empty rows appear at the top. Scans bottom to top with a read and a write cursor,
    /// which is equivalent to removing each full row and re-checking the row that
    /// slid into its place.
    pub fn clear_lines(&mut self) -> usize {
        let width = self.width;
        let mut cleared = 0;
        let mut write_y = self.height;

        for read_y in (0..self.height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = Cell::Empty;
        }

        cleared
    }

    /// Top-out rule: any filled cell in row 0
    pub fn is_game_over(&self) -> bool {
        self.row(0)
            .map(|row| row.iter().any(Cell::is_occupied))
            .unwrap_or(false)
    }

    /// Indices of full rows, top to bottom
    pub fn filled_rows(&self) -> Vec<usize> {
        (0..self.height).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Number of filled cells on the board
    pub fn count_filled_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    /// Topmost row containing a filled cell, `None` on an empty board
    pub fn highest_filled_row(&self) -> Option<usize> {
        (0..self.height).find(|&y| !self.row_is_empty(y))
    }

    /// Get a reference to the internal cells (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
