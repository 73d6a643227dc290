//! Vocabulary source - static per-level word pair tables
//!
//! Levels are keyed by a 1-based contiguous id. The controller treats a
//! missing id as "no more levels" and ends the game; this is the only
//! failure mode of the whole system and it is not an error.
//!
//! Level tables live in one module per level so they can be tuned
//! independently. Pair counts grow with the level.

use word_match_types::WordPair;

pub mod level1;
pub mod level2;
pub mod level3;
pub mod level4;
pub mod level5;

/// Built-in level tables, in play order.
static BUILTIN_LEVELS: &[&[WordPair]] = &[
    level1::LEVEL1,
    level2::LEVEL2,
    level3::LEVEL3,
    level4::LEVEL4,
    level5::LEVEL5,
];

/// Read-only mapping from level id to its word pairs.
///
/// # Examples
///
/// ```
/// use word_match_vocab::Vocabulary;
///
/// let vocab = Vocabulary::builtin();
/// assert!(vocab.level(1).is_some());
/// assert!(vocab.level(0).is_none());
/// assert!(vocab.level(vocab.level_count() as u32 + 1).is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    levels: &'static [&'static [WordPair]],
}

impl Vocabulary {
    /// The built-in vocabulary shipped with the game.
    pub fn builtin() -> Self {
        Self {
            levels: BUILTIN_LEVELS,
        }
    }

    /// A vocabulary over caller-provided tables (used by tests and demos).
    pub fn from_levels(levels: &'static [&'static [WordPair]]) -> Self {
        Self { levels }
    }

    /// Look up the pairs for a 1-based level id.
    ///
    /// Returns `None` for id 0 and for any id past the last defined level.
    pub fn level(&self, id: u32) -> Option<&'static [WordPair]> {
        if id == 0 {
            return None;
        }
        self.levels.get(id as usize - 1).copied()
    }

    /// Number of defined levels.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}
