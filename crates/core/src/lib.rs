//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management for the
//! word-matching game. It has **zero dependencies** on UI, audio, or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical card layouts
//! - **Testable**: The whole state machine runs headlessly
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`deck`]: card construction from word pairs and the matching rule
//! - [`game_state`]: the screen/level state machine, scoring, and timing
//! - [`rng`]: seeded LCG with a uniform Fisher-Yates shuffle
//!
//! # Game Rules
//!
//! - Each level presents one foreign-side and one native-side card per pair,
//!   in shuffled order.
//! - Selecting two cards evaluates them: same pair and different sides is a
//!   match (`10 * level` points); anything else is a mismatch (-5 points,
//!   floored at zero).
//! - Matched cards are hidden after a short delay; mismatched cards revert
//!   to idle after a slightly longer one.
//! - Clearing all pairs completes the level; running out of levels ends the
//!   game. That is the only termination path - there are no errors.
//!
//! # Example
//!
//! ```
//! use word_match_core::GameState;
//! use word_match_core::types::GameAction;
//!
//! let mut game = GameState::default();
//! game.apply_action(GameAction::Start);
//!
//! // Activate the first two cards (match or mismatch depends on the shuffle).
//! game.apply_action(GameAction::Activate(0));
//! game.apply_action(GameAction::Activate(1));
//!
//! // Drive time forward; delays and the level timer advance here.
//! game.tick(1000);
//! assert_eq!(game.elapsed_seconds(), 1);
//! ```
//!
//! # Timing
//!
//! The host calls [`GameState::tick`] with elapsed wall-clock milliseconds.
//! All delayed effects (hide/revert, level completion) and the once-per-second
//! play timer are driven from that single entry point; nothing in the core
//! schedules callbacks or reads a clock.

pub mod deck;
pub mod game_state;
pub mod rng;

pub use word_match_types as types;
pub use word_match_vocab as vocab;

// Re-export commonly used types for convenience
pub use deck::{build_deck, is_match, Card};
pub use game_state::GameState;
pub use rng::SimpleRng;
