//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, pieces, RNG, scoring and the
//! drop clock. It handles piece movement, rotation with wall kicks, hold, locking,
//! line clears, level progression and the playing/paused/game-over state machine.
//!
//! Every operation is total. An illegal move is reverted, not reported as an error;
//! the only terminal outcome is game over, reached when a spawned piece collides.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::clock::DropClock;
use crate::config::GameConfig;
use crate::piece::Piece;
use crate::rng::PieceGenerator;
use crate::scoring::calculate_score;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{GameAction, GameStatus, PieceKind};

/// What a call to [`GameState::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing, or the drop interval has not elapsed yet
    Idle,
    /// Gravity moved the piece down one row
    Fell,
    /// Gravity could not move the piece, so it locked and the next piece spawned
    Locked,
}

/// Emitted after every lock (consumed by observers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub points: u32,
    pub leveled_up: bool,
}

/// Final figures of a game, for whoever keeps score history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub duration: Duration,
}

/// Where `piece` would land if dropped straight down.
///
/// A piece that is already in an invalid position is returned unchanged.
pub fn landing_position(board: &Board, piece: &Piece) -> Piece {
    let mut ghost = *piece;
    if !board.is_valid_position(&ghost) {
        return ghost;
    }

    loop {
        let below = ghost.translated(0, 1);
        if !board.is_valid_position(&below) {
            return ghost;
        }
        ghost = below;
    }
}

#[track_caller]
fn debug_assert_valid(config: &GameConfig) {
    if cfg!(debug_assertions) {
        if let Err(err) = config.validate() {
            panic!("invalid game config: {err}");
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    current: Piece,
    /// Preview of the next piece, anchored at the spawn position
    next: Piece,
    held: Option<PieceKind>,
    ghost: Piece,
    can_hold: bool,
    score: u32,
    level: u32,
    lines: u32,
    clock: DropClock,
    generator: PieceGenerator,
    paused: bool,
    game_over: bool,
    play_time: Duration,
    /// Last lock (consumed by observers).
    last_lock: Option<LockEvent>,
}

impl GameState {
    /// Create a new game on an empty board with the given RNG seed.
    ///
    /// `config` must pass [`GameConfig::validate`]; debug builds assert it.
    pub fn new(config: GameConfig, seed: u32) -> Self {
        debug_assert_valid(&config);
        let board = Board::new(config.board_width, config.board_height);
        let mut generator = PieceGenerator::new(config.randomizer, seed);
        let current = generator.draw();
        let next = generator.draw();
        Self::assemble(config, board, generator, current, next)
    }

    /// Create a game from a prepared board with chosen current and next pieces.
    ///
    /// Pieces after `next` come from the seeded generator. If the board is already
    /// topped out, or `current` does not fit at the spawn position, the game starts over.
    /// The same [`GameConfig::validate`] requirement as [`GameState::new`] applies.
    pub fn from_setup(
        config: GameConfig,
        board: Board,
        current: PieceKind,
        next: PieceKind,
        seed: u32,
    ) -> Self {
        debug_assert_valid(&config);
        let generator = PieceGenerator::new(config.randomizer, seed);
        Self::assemble(config, board, generator, current, next)
    }

    fn assemble(
        config: GameConfig,
        board: Board,
        generator: PieceGenerator,
        current: PieceKind,
        next: PieceKind,
    ) -> Self {
        let spawn = Piece::new(current, config.spawn_x, config.spawn_y);
        let clock = DropClock::new(config.starting_drop_interval(), config.min_drop_interval());
        let level = config.starting_level.max(1);

        let mut state = Self {
            next: Piece::new(next, config.spawn_x, config.spawn_y),
            config,
            board,
            current: spawn,
            held: None,
            ghost: spawn,
            can_hold: true,
            score: 0,
            level,
            lines: 0,
            clock,
            generator,
            paused: false,
            game_over: false,
            play_time: Duration::ZERO,
            last_lock: None,
        };
        state.spawn(current);
        state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn held(&self) -> Option<PieceKind> {
        self.held
    }

    /// Landing projection of the current piece, kept up to date after every move
    pub fn ghost(&self) -> Piece {
        self.ghost
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval(&self) -> Duration {
        self.clock.interval()
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Time spent playing (ticks while paused or over are not counted)
    pub fn play_time(&self) -> Duration {
        self.play_time
    }

    /// Current generator state; seeding a new game with it continues the sequence
    pub fn seed(&self) -> u32 {
        self.generator.seed()
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

    pub fn is_playing(&self) -> bool {
        !self.paused && !self.game_over
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            score: self.score,
            level: self.level,
            lines: self.lines,
            duration: self.play_time,
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_lock(&mut self) -> Option<LockEvent> {
        self.last_lock.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.current = PieceSnapshot::from(self.current);
        out.ghost = PieceSnapshot::from(self.ghost);
        out.next = self.next.kind;
        out.held = self.held;
        out.can_hold = self.can_hold;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.drop_interval = self.clock.interval();
        out.play_time = self.play_time;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn refresh_ghost(&mut self) {
        self.ghost = landing_position(&self.board, &self.current);
    }

    /// Put a fresh `kind` at the spawn position; game over if it does not fit.
    fn spawn(&mut self, kind: PieceKind) -> bool {
        self.current = Piece::new(kind, self.config.spawn_x, self.config.spawn_y);

        if !self.board.is_valid_position(&self.current) || self.board.is_game_over() {
            self.game_over = true;
            info!(
                score = self.score,
                level = self.level,
                lines = self.lines,
                kind = kind.as_str(),
                "game over"
            );
        }

        self.refresh_ghost();
        !self.game_over
    }

    /// Promote the preview piece to current and draw a new preview
    fn spawn_from_next(&mut self) -> bool {
        let kind = self.next.kind;
        self.next = Piece::new(self.generator.draw(), self.config.spawn_x, self.config.spawn_y);
        self.spawn(kind)
    }

    /// Shift the current piece sideways, reverting if it collides
    fn shift(&mut self, dx: i32) -> bool {
        if !self.is_playing() {
            return false;
        }

        self.current.translate(dx, 0);
        if !self.board.is_valid_position(&self.current) {
            self.current.translate(-dx, 0);
            return false;
        }

        self.refresh_ghost();
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    /// Move the current piece down one row, locking it if it cannot fall.
    ///
    /// Returns whether a lock happened (and therefore a new piece appeared).
    pub fn move_down(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }

        self.current.translate(0, 1);
        if !self.board.is_valid_position(&self.current) {
            self.current.translate(0, -1);
            self.lock_piece();
            return true;
        }

        self.refresh_ghost();
        false
    }

    /// Drop the current piece to its ghost position and lock it
    pub fn hard_drop(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }

        self.current.x = self.ghost.x;
        self.current.y = self.ghost.y;
        self.lock_piece();
        true
    }

    /// Rotate clockwise, trying the configured wall kicks if the rotation collides.
    ///
    /// Kicks are offsets from the pre-rotation anchor, tried in order. If none fits the
    /// piece is left exactly as it was.
    pub fn rotate_clockwise(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }

        let original = self.current;
        self.current.rotate_clockwise();

        if !self.board.is_valid_position(&self.current) {
            let kicked = self.config.wall_kicks().iter().any(|&(dx, dy)| {
                self.current.x = original.x + dx;
                self.current.y = original.y + dy;
                self.board.is_valid_position(&self.current)
            });

            if !kicked {
                self.current = original;
                return false;
            }
        }

        self.refresh_ghost();
        true
    }

    /// Swap the current piece with the held one (once per lock)
    pub fn hold(&mut self) -> bool {
        if !self.is_playing() || !self.can_hold {
            return false;
        }

        let current_kind = self.current.kind;
        match self.held.replace(current_kind) {
            // Fresh instance of the held kind at spawn.
            Some(held_kind) => {
                self.spawn(held_kind);
            }
            None => {
                self.spawn_from_next();
            }
        }

        self.can_hold = false;
        self.refresh_ghost();
        true
    }

    /// Commit the current piece, clear lines, score, and bring in the next piece
    fn lock_piece(&mut self) {
        let piece = self.current;
        if !self.board.place(&piece) {
            // Unreachable while the current piece is kept valid.
            warn!(kind = piece.kind.as_str(), x = piece.x, y = piece.y, "lock at invalid position");
        }

        let cleared = self.board.clear_lines();
        let result = calculate_score(cleared, self.level, self.lines, self.config.lines_per_level);

        self.score = self.score.saturating_add(result.points);
        self.lines = result.total_lines;
        if result.leveled_up {
            self.level = result.level;
            self.clock.speed_up(self.config.level_speed_increase());
            info!(
                level = self.level,
                drop_interval_ms = self.clock.interval().as_millis() as u64,
                "level up"
            );
        }

        debug!(
            kind = piece.kind.as_str(),
            lines_cleared = cleared,
            points = result.points,
            score = self.score,
            "piece locked"
        );

        self.last_lock = Some(LockEvent {
            kind: piece.kind,
            lines_cleared: cleared as u32,
            points: result.points,
            leveled_up: result.leveled_up,
        });

        self.spawn_from_next();
        self.can_hold = true;
    }

    /// Toggle pause (ignored once the game is over)
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Advance the game clock.
    ///
    /// When the accumulated time reaches the drop interval the piece falls one row and
    /// the interval shrinks by the per-tick increment.
    pub fn tick(&mut self, elapsed: Duration) -> TickOutcome {
        if !self.is_playing() {
            return TickOutcome::Idle;
        }

        self.play_time = self.play_time.saturating_add(elapsed);
        if !self.clock.advance(elapsed) {
            return TickOutcome::Idle;
        }

        let locked = self.move_down();
        self.clock.speed_up(self.config.speed_increase());

        if locked {
            TickOutcome::Locked
        } else {
            TickOutcome::Fell
        }
    }

    /// Apply a game action
    ///
    /// Returns whether the action had an effect. `Restart` and `Quit` belong to the
    /// owner of the game (see [`crate::Session`]) and are ignored here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => {
                if !self.is_playing() {
                    return false;
                }
                self.move_down();
                true
            }
            GameAction::RotateClockwise => self.rotate_clockwise(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Hold => self.hold(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart | GameAction::Quit => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn game(current: PieceKind, next: PieceKind) -> GameState {
        GameState::from_setup(GameConfig::default(), Board::default(), current, next, 12345)
    }

    fn fill_row_except(board: &mut Board, y: i32, gaps: &[i32]) {
        for x in 0..board.width() as i32 {
            if !gaps.contains(&x) {
                board.set(x, y, Cell::Occupied(PieceKind::Z));
            }
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(GameConfig::default(), 12345);

        assert!(!state.game_over);
        assert!(!state.paused);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lines, 0);
        assert!(state.held.is_none());
        assert!(state.can_hold);
        assert_eq!((state.current.x, state.current.y), (4, 0));
        assert_eq!(state.current.rotation, 0);
        assert_eq!(state.drop_interval(), Duration::from_secs(1));
        assert_eq!(state.status(), GameStatus::Playing);
    }

    #[test]
    fn test_move_left_right() {
        let mut state = game(PieceKind::O, PieceKind::T);

        assert!(state.move_left());
        assert_eq!(state.current.x, 3);
        assert!(state.move_right());
        assert!(state.move_right());
        assert_eq!(state.current.x, 5);
    }

    #[test]
    fn test_move_reverts_at_wall() {
        let mut state = game(PieceKind::O, PieceKind::T);

        let mut moved = 0;
        for _ in 0..10 {
            if state.move_left() {
                moved += 1;
            }
        }
        assert_eq!(moved, 4);
        assert_eq!(state.current.x, 0);

        for _ in 0..20 {
            state.move_right();
        }
        // O is 2 wide: anchor stops at width - 2.
        assert_eq!(state.current.x, 8);
    }

    #[test]
    fn test_move_down_then_lock() {
        let mut state = game(PieceKind::O, PieceKind::T);

        for _ in 0..18 {
            assert!(!state.move_down());
        }
        assert_eq!(state.current.y, 18);
        assert!(state.move_down());

        assert_eq!(state.board.cell(4, 18), Cell::Occupied(PieceKind::O));
        assert_eq!(state.board.cell(5, 19), Cell::Occupied(PieceKind::O));
        assert_eq!(state.current.kind, PieceKind::T);
        assert_eq!((state.current.x, state.current.y), (4, 0));

        let event = state.take_last_lock().unwrap();
        assert_eq!(event.kind, PieceKind::O);
        assert_eq!(event.lines_cleared, 0);
        assert!(state.take_last_lock().is_none());
    }

    #[test]
    fn test_hard_drop_uses_ghost() {
        let mut state = game(PieceKind::I, PieceKind::O);
        let ghost = state.ghost();
        assert_eq!((ghost.x, ghost.y), (4, 16));

        assert!(state.hard_drop());
        for y in 16..20 {
            assert_eq!(state.board.cell(4, y), Cell::Occupied(PieceKind::I));
        }
        assert_eq!(state.current.kind, PieceKind::O);
    }

    #[test]
    fn test_ghost_tracks_moves() {
        let mut board = Board::default();
        board.set(2, 10, Cell::Occupied(PieceKind::L));
        let mut state = GameState::from_setup(GameConfig::default(), board, PieceKind::O, PieceKind::T, 1);

        assert_eq!(state.ghost().y, 18);
        state.move_left();
        state.move_left();
        // O now covers columns 2-3, blocked by (2, 10).
        assert_eq!(state.ghost().y, 8);
    }

    #[test]
    fn test_ghost_of_invalid_piece_is_unchanged() {
        let mut board = Board::default();
        board.set(0, 5, Cell::Occupied(PieceKind::J));
        let overlapping = Piece::new(PieceKind::O, 0, 4);
        assert!(!board.is_valid_position(&overlapping));
        assert_eq!(landing_position(&board, &overlapping), overlapping);

        let outside = Piece::new(PieceKind::I, -3, 0);
        assert_eq!(landing_position(&board, &outside), outside);
    }

    #[test]
    fn test_rotate_in_open_space() {
        let mut state = game(PieceKind::T, PieceKind::O);
        assert!(state.rotate_clockwise());
        assert_eq!(state.current.rotation, 1);
        assert_eq!((state.current.x, state.current.y), (4, 0));
    }

    #[test]
    fn test_rotate_at_right_wall_without_room_reverts() {
        let mut state = game(PieceKind::I, PieceKind::O);
        for _ in 0..10 {
            state.move_right();
        }
        assert_eq!(state.current.x, 9);

        // Horizontal I needs x..x+3 and none of the three kicks gets it back on the board.
        let rotated = state.rotate_clockwise();
        assert!(!rotated);
        assert_eq!(state.current.rotation, 0);
        assert_eq!(state.current.x, 9);
    }

    #[test]
    fn test_rotate_kick_uses_pre_rotation_anchor() {
        // Horizontal I flush left on row 0; (0, 1) blocks the vertical shape in place.
        let mut board = Board::default();
        board.set(0, 1, Cell::Occupied(PieceKind::S));
        let mut state = GameState::from_setup(GameConfig::default(), board, PieceKind::I, PieceKind::O, 3);

        assert!(state.rotate_clockwise());
        for _ in 0..4 {
            assert!(state.move_left());
        }
        assert_eq!((state.current.x, state.current.y, state.current.rotation), (0, 0, 1));

        // In place collides with (0,1), (-1,0) leaves the board, (1,0) fits.
        assert!(state.rotate_clockwise());
        assert_eq!((state.current.x, state.current.y, state.current.rotation), (1, 0, 2));
    }

    #[test]
    fn test_rotate_fails_when_no_kick_fits() {
        // Vertical gap one column wide: an I standing in it cannot lie down.
        let mut board = Board::default();
        for y in 10..20 {
            for x in 0..10 {
                if x != 4 {
                    board.set(x, y, Cell::Occupied(PieceKind::Z));
                }
            }
        }
        let mut state = GameState::from_setup(GameConfig::default(), board, PieceKind::I, PieceKind::O, 3);
        for _ in 0..12 {
            state.move_down();
        }
        let before = state.current;
        assert_eq!(before.y, 12);

        assert!(!state.rotate_clockwise());
        assert_eq!(state.current, before);
    }

    #[test]
    fn test_hold_empty_then_swap() {
        let mut state = game(PieceKind::T, PieceKind::S);

        assert!(state.hold());
        assert_eq!(state.held, Some(PieceKind::T));
        assert_eq!(state.current.kind, PieceKind::S);
        assert!(!state.can_hold);

        // Blocked until the next lock.
        assert!(!state.hold());

        state.hard_drop();
        assert!(state.can_hold);
        let after_lock = state.current.kind;

        state.move_right();
        assert!(state.hold());
        assert_eq!(state.current.kind, PieceKind::T);
        assert_eq!((state.current.x, state.current.y, state.current.rotation), (4, 0, 0));
        assert_eq!(state.held, Some(after_lock));
    }

    #[test]
    fn test_line_clear_scores_and_counts() {
        let mut board = Board::default();
        fill_row_except(&mut board, 19, &[4, 5]);
        fill_row_except(&mut board, 18, &[4, 5]);
        let mut state = GameState::from_setup(GameConfig::default(), board, PieceKind::O, PieceKind::T, 9);

        state.hard_drop();
        assert_eq!(state.lines, 2);
        assert_eq!(state.score, 300);
        assert_eq!(state.board.count_filled_cells(), 0);
    }

    #[test]
    fn test_level_up_speeds_up_drop() {
        let config = GameConfig {
            lines_per_level: 1,
            ..GameConfig::default()
        };
        let mut board = Board::default();
        fill_row_except(&mut board, 19, &[4, 5]);
        let mut state = GameState::from_setup(config, board, PieceKind::O, PieceKind::T, 9);

        state.hard_drop();
        assert_eq!(state.lines, 1);
        assert_eq!(state.level, 2);
        assert_eq!(state.score, 100);
        assert_eq!(state.drop_interval(), Duration::from_secs(1) - Duration::from_secs_f64(0.1));
        assert!(state.take_last_lock().unwrap().leveled_up);
    }

    #[test]
    fn test_tick_drops_and_accelerates() {
        let mut state = game(PieceKind::O, PieceKind::T);
        let interval = state.drop_interval();

        assert_eq!(state.tick(Duration::from_millis(500)), TickOutcome::Idle);
        assert_eq!(state.current.y, 0);
        assert_eq!(state.tick(Duration::from_millis(500)), TickOutcome::Fell);
        assert_eq!(state.current.y, 1);
        assert!(state.drop_interval() < interval);
        assert_eq!(state.play_time(), Duration::from_secs(1));
    }

    #[test]
    fn test_tick_locks_at_bottom() {
        let mut state = game(PieceKind::O, PieceKind::T);
        let mut outcome = TickOutcome::Idle;
        for _ in 0..100 {
            outcome = state.tick(Duration::from_secs(2));
            if outcome == TickOutcome::Locked {
                break;
            }
        }
        assert_eq!(outcome, TickOutcome::Locked);
        assert_eq!(state.current.kind, PieceKind::T);
    }

    #[test]
    fn test_drop_interval_never_below_floor() {
        let mut state = game(PieceKind::O, PieceKind::T);
        for _ in 0..200 {
            state.tick(Duration::from_secs(5));
            if state.game_over {
                break;
            }
        }
        assert!(state.drop_interval() >= state.config().min_drop_interval());
    }

    #[test]
    fn test_pause_blocks_actions_and_ticks() {
        let mut state = game(PieceKind::O, PieceKind::T);
        assert!(state.toggle_pause());
        assert_eq!(state.status(), GameStatus::Paused);

        let before = state.snapshot();
        assert!(!state.move_left());
        assert!(!state.rotate_clockwise());
        assert!(!state.hold());
        assert!(!state.hard_drop());
        assert!(!state.move_down());
        assert_eq!(state.tick(Duration::from_secs(10)), TickOutcome::Idle);
        assert_eq!(state.snapshot(), before);

        assert!(state.apply_action(GameAction::Pause));
        assert_eq!(state.status(), GameStatus::Playing);
    }

    #[test]
    fn test_spawn_onto_topped_out_board_is_game_over() {
        let mut board = Board::default();
        board.set(0, 0, Cell::Occupied(PieceKind::L));
        let before = board.clone();

        let mut state = GameState::from_setup(GameConfig::default(), board, PieceKind::T, PieceKind::O, 5);
        assert!(state.game_over);
        assert_eq!(state.board, before);

        // Everything is a no-op now, pause included.
        assert!(!state.toggle_pause());
        assert!(!state.move_left());
        assert!(!state.apply_action(GameAction::HardDrop));
        assert_eq!(state.board, before);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid game config")]
    fn test_unvalidated_config_rejected_in_debug() {
        let config = GameConfig {
            lines_per_level: 0,
            ..GameConfig::default()
        };
        let _ = GameState::new(config, 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid game config")]
    fn test_oversized_setup_rejected_in_debug() {
        let config = GameConfig::default().with_board_size(40_000, 4);
        let _ = GameState::from_setup(config, Board::default(), PieceKind::T, PieceKind::O, 1);
    }

    #[test]
    fn test_restart_and_quit_are_not_handled_here() {
        let mut state = game(PieceKind::O, PieceKind::T);
        assert!(!state.apply_action(GameAction::Restart));
        assert!(!state.apply_action(GameAction::Quit));
    }
}
