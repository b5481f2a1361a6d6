//! Session module - owns one game at a time plus the out-of-game controls
//!
//! A [`GameState`] only knows about moving pieces. The session adds what sits around a
//! game: quitting, restarting after a game over, and remembering how the last game
//! ended.

use std::time::Duration;

use tracing::info;

use crate::config::GameConfig;
use crate::game_state::{GameState, GameSummary, TickOutcome};
use crate::render::Renderer;
use crate::types::{GameAction, GameStatus};

/// Whether the caller should keep running the session loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    state: GameState,
    games_played: u32,
    finished: Option<GameSummary>,
}

impl Session {
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let state = GameState::new(config.clone(), seed);
        let mut session = Self {
            config,
            state,
            games_played: 1,
            finished: None,
        };
        // A board that tops out on the first spawn still produces a summary.
        session.record_if_over();
        session
    }

    /// Wrap an already prepared game
    pub fn with_state(state: GameState) -> Self {
        let mut session = Self {
            config: state.config().clone(),
            state,
            games_played: 1,
            finished: None,
        };
        session.record_if_over();
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of games started in this session, the current one included
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Route an action to the game, or handle it here if it is a session control
    pub fn handle_action(&mut self, action: GameAction) -> SessionControl {
        match action {
            GameAction::Quit => {
                info!(score = self.state.score(), "quit requested");
                return SessionControl::Quit;
            }
            GameAction::Restart => {
                if self.state.status() == GameStatus::GameOver {
                    self.restart();
                }
            }
            other => {
                let was_over = self.state.game_over();
                self.state.apply_action(other);
                if !was_over {
                    self.record_if_over();
                }
            }
        }
        SessionControl::Continue
    }

    /// Advance the current game by `elapsed`
    pub fn tick(&mut self, elapsed: Duration) -> TickOutcome {
        let was_over = self.state.game_over();
        let outcome = self.state.tick(elapsed);
        if !was_over {
            self.record_if_over();
        }
        outcome
    }

    /// Summary of the game that just ended, handed out once
    pub fn take_finished(&mut self) -> Option<GameSummary> {
        self.finished.take()
    }

    /// Draw the current game
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<(), R::Error> {
        renderer.render(&self.state.snapshot())
    }

    fn restart(&mut self) {
        // Continue the piece sequence rather than replaying the previous game.
        let seed = self.state.seed();
        self.state = GameState::new(self.config.clone(), seed);
        self.games_played += 1;
        info!(game = self.games_played, seed, "new game");
        self.record_if_over();
    }

    fn record_if_over(&mut self) {
        if !self.state.game_over() {
            return;
        }
        let summary = self.state.summary();
        info!(
            score = summary.score,
            level = summary.level,
            lines = summary.lines,
            duration_secs = summary.duration.as_secs_f64(),
            "game finished"
        );
        self.finished = Some(summary);
    }
}
