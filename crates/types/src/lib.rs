//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, vocabulary tables, terminal rendering).
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `TIMER_INTERVAL_MS` | 1000 | One elapsed-time second |
//! | `MATCH_HIDE_DELAY_MS` | 500 | Delay before a matched pair is hidden |
//! | `MISMATCH_REVERT_DELAY_MS` | 800 | Delay before a mismatched pair reverts |
//!
//! # Scoring
//!
//! - A correct match awards `MATCH_POINTS_PER_LEVEL * level` points.
//! - A mismatch deducts `MISMATCH_PENALTY` points, clamped at zero.
//!
//! # Examples
//!
//! ```
//! use word_match_types::{format_mm_ss, Phase, Side};
//!
//! assert_eq!(Side::Foreign.opposite(), Side::Native);
//! assert_eq!(Phase::Intro.as_str(), "intro");
//! assert_eq!(format_mm_ss(75), "01:15");
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// One timer second in milliseconds.
///
/// The elapsed-time counter advances once per this interval while playing.
pub const TIMER_INTERVAL_MS: u32 = 1000;

/// Delay before a matched pair of cards is hidden (500ms)
pub const MATCH_HIDE_DELAY_MS: u32 = 500;

/// Delay before a mismatched pair of cards reverts to idle (800ms)
pub const MISMATCH_REVERT_DELAY_MS: u32 = 800;

/// Points awarded per level for a correct match (`10 * level`)
pub const MATCH_POINTS_PER_LEVEL: u32 = 10;

/// Points deducted for a mismatch (clamped at a floor of zero)
pub const MISMATCH_PENALTY: u32 = 5;

/// Card grid width in columns for board layout
pub const BOARD_COLUMNS: usize = 4;

/// One word pair: a foreign-language term and its native translation.
///
/// Pairs are immutable and sourced from static vocabulary tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordPair {
    pub foreign: &'static str,
    pub native: &'static str,
}

impl WordPair {
    pub const fn new(foreign: &'static str, native: &'static str) -> Self {
        Self { foreign, native }
    }
}

/// Which side of a word pair a card shows
///
/// Every pair produces exactly one card of each side. Two cards match only
/// when their pair keys are equal and their sides differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Foreign,
    Native,
}

impl Side {
    /// The other side of a pair
    ///
    /// # Examples
    ///
    /// ```
    /// use word_match_types::Side;
    ///
    /// assert_eq!(Side::Foreign.opposite(), Side::Native);
    /// assert_eq!(Side::Native.opposite(), Side::Foreign);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Side::Foreign => Side::Native,
            Side::Native => Side::Foreign,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Foreign => "foreign",
            Side::Native => "native",
        }
    }
}

/// Identity of a word pair within its level.
///
/// Cards carry the index of their pair in the level's pair list; equality of
/// two keys plus side inequality is the whole matching rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairKey(pub u16);

/// Lifecycle state of a single card
///
/// - **Idle**: face up, selectable
/// - **Selected**: chosen as one half of a candidate pair
/// - **Matched**: successfully paired; no longer selectable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Idle,
    Selected,
    Matched,
}

impl CardState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardState::Idle => "idle",
            CardState::Selected => "selected",
            CardState::Matched => "matched",
        }
    }
}

/// Screens of the game state machine
///
/// Transition graph:
///
/// ```text
/// Intro --start--> Playing --all pairs matched--> LevelComplete
/// LevelComplete --advance--> Playing (next level) | GameOver (no next level)
/// Playing | LevelComplete | GameOver --restart--> Intro
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Playing,
    LevelComplete,
    GameOver,
}

impl Phase {
    /// Convert to camelCase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use word_match_types::Phase;
    ///
    /// assert_eq!(Phase::LevelComplete.as_str(), "levelComplete");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Intro => "intro",
            Phase::Playing => "playing",
            Phase::LevelComplete => "levelComplete",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Each action corresponds to one external stimulus: the three screen-level
/// controls plus activating a card by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Begin a new game: reset score and level, load level 1
    Start,
    /// Leave the level-complete screen for the next level (or game over)
    Advance,
    /// Abandon the current game and return to the intro screen
    Restart,
    /// Activate the card at the given deck index
    Activate(usize),
}

/// Audio/visual cue requested from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueKind {
    Correct,
    Wrong,
    LevelComplete,
}

impl CueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CueKind::Correct => "correct",
            CueKind::Wrong => "wrong",
            CueKind::LevelComplete => "levelComplete",
        }
    }
}

/// Format a second count as zero-padded `MM:SS`.
///
/// Minutes are not wrapped; 100 minutes renders as `100:00`.
///
/// # Examples
///
/// ```
/// use word_match_types::format_mm_ss;
///
/// assert_eq!(format_mm_ss(0), "00:00");
/// assert_eq!(format_mm_ss(59), "00:59");
/// assert_eq!(format_mm_ss(61), "01:01");
/// ```
pub fn format_mm_ss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
