//! Session tests - quit/restart routing, finished-game summaries and rendering

use std::convert::Infallible;
use std::time::Duration;

use term_tetris::core::{
    Board, GameConfig, GameSnapshot, GameState, Renderer, Session, SessionControl, TickOutcome,
};
use term_tetris::types::{Cell, GameAction, GameStatus, PieceKind};

#[derive(Default)]
struct Recorder {
    frames: Vec<GameSnapshot>,
}

impl Renderer for Recorder {
    type Error = Infallible;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<(), Infallible> {
        self.frames.push(snapshot.clone());
        Ok(())
    }
}

struct Broken;

impl Renderer for Broken {
    type Error = String;

    fn render(&mut self, _snapshot: &GameSnapshot) -> Result<(), String> {
        Err("display gone".to_string())
    }
}

/// An O that locks on the first gravity step and leaves no room for the next one.
fn about_to_top_out() -> Session {
    let mut board = Board::default();
    for y in 2..20 {
        board.set(4, y, Cell::Occupied(PieceKind::L));
    }
    let state = GameState::from_setup(GameConfig::default(), board, PieceKind::O, PieceKind::O, 77);
    Session::with_state(state)
}

#[test]
fn test_quit_is_returned_to_caller() {
    let mut session = Session::new(GameConfig::default(), 3);
    assert_eq!(session.handle_action(GameAction::MoveLeft), SessionControl::Continue);
    assert_eq!(session.handle_action(GameAction::Quit), SessionControl::Quit);
    // The game itself is untouched by quitting.
    assert_eq!(session.state().status(), GameStatus::Playing);
}

#[test]
fn test_restart_only_in_game_over() {
    let mut session = Session::new(GameConfig::default(), 3);
    session.handle_action(GameAction::HardDrop);
    assert_eq!(session.state().board().count_filled_cells(), 4);

    session.handle_action(GameAction::Restart);
    assert_eq!(session.state().board().count_filled_cells(), 4);
    assert_eq!(session.games_played(), 1);

    session.handle_action(GameAction::Pause);
    session.handle_action(GameAction::Restart);
    assert_eq!(session.state().status(), GameStatus::Paused);
    assert_eq!(session.games_played(), 1);
}

#[test]
fn test_tick_records_summary_on_game_over_edge() {
    let mut session = about_to_top_out();
    assert!(session.take_finished().is_none());

    assert_eq!(session.tick(Duration::from_secs(1)), TickOutcome::Locked);
    assert!(session.state().game_over());

    let summary = session.take_finished().unwrap();
    assert_eq!(summary.score, 0);
    assert_eq!(summary.level, 1);
    assert_eq!(summary.lines, 0);
    assert_eq!(summary.duration, Duration::from_secs(1));

    // Exactly once, even though later ticks still see a finished game.
    session.tick(Duration::from_secs(1));
    assert!(session.take_finished().is_none());
}

#[test]
fn test_action_that_ends_game_records_summary() {
    let mut session = about_to_top_out();
    session.handle_action(GameAction::HardDrop);
    assert!(session.state().game_over());
    assert!(session.take_finished().is_some());

    session.handle_action(GameAction::HardDrop);
    assert!(session.take_finished().is_none());
}

#[test]
fn test_restart_replaces_the_game() {
    let mut session = about_to_top_out();
    session.handle_action(GameAction::HardDrop);
    assert!(session.state().game_over());
    let old_seed = session.state().seed();

    assert_eq!(session.handle_action(GameAction::Restart), SessionControl::Continue);
    let state = session.state();
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.board().count_filled_cells(), 0);
    assert_eq!(state.score(), 0);
    assert_eq!(state.play_time(), Duration::ZERO);
    assert_eq!(session.games_played(), 2);

    // Seeded from where the previous generator stopped.
    let replay = GameState::new(session.config().clone(), old_seed);
    assert_eq!(replay.current(), state.current());
    assert_eq!(replay.next(), state.next());
}

#[test]
fn test_render_hands_out_current_snapshot() {
    let mut session = Session::new(GameConfig::default(), 11);
    let mut recorder = Recorder::default();

    session.render(&mut recorder).unwrap();
    session.handle_action(GameAction::MoveRight);
    session.render(&mut recorder).unwrap();

    assert_eq!(recorder.frames.len(), 2);
    assert_eq!(recorder.frames[1].current.x, recorder.frames[0].current.x + 1);
    assert_eq!(recorder.frames[1], session.state().snapshot());
}

#[test]
fn test_render_through_trait_object_and_errors() {
    let session = Session::new(GameConfig::default(), 11);

    let mut recorder = Recorder::default();
    let dyn_renderer: &mut dyn Renderer<Error = Infallible> = &mut recorder;
    session.render(dyn_renderer).unwrap();
    assert_eq!(recorder.frames.len(), 1);

    assert_eq!(session.render(&mut Broken), Err("display gone".to_string()));
}
