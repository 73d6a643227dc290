//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into screen-level [`UiCommand`]s and provides a
//! [`BoardCursor`] for keyboard-driven card selection. Resolving a command
//! against the current screen (confirm means "start", "advance", or
//! "activate the card under the cursor") is the main loop's job.

pub mod cursor;
pub mod map;

pub use word_match_types as types;

pub use cursor::BoardCursor;
pub use map::{handle_key_event, should_quit, UiCommand};
