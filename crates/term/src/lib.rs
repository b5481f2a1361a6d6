//! Terminal game renderer.
//!
//! A small, game-oriented rendering layer. It avoids widget toolkits and instead
//! lays each snapshot out into a framebuffer that is flushed to the terminal.
//!
//! - [`fb`]: styled character cells
//! - [`game_view`]: snapshot to framebuffer, no I/O
//! - [`renderer`]: diffing terminal writer implementing the core `Renderer` trait

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
