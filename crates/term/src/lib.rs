//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render each screen (intro, board, level complete, game over) from plain
//!   game state, with no I/O in the view layer
//! - Handle double-width CJK glyphs so the native-word cards line up

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use word_match_core as core;
pub use word_match_types as types;

pub use fb::{char_width, str_width, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, HudView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
