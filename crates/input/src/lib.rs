//! Terminal input module.
//!
//! Independent of any rendering. It maps `crossterm` key events into
//! [`crate::types::GameAction`]; what the actions do is up to the session.

pub mod map;

pub use term_tetris_types as types;

pub use map::{handle_key_event, should_quit};
