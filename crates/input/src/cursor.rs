//! Keyboard cursor over the card grid.
//!
//! Card selection is keyboard-driven: the player walks a cursor across the
//! grid and confirms. The cursor knows only the slot count and column width;
//! whether the slot under it is still selectable is the core's decision.

use word_match_types::BOARD_COLUMNS;

/// Cursor position over a row-major card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardCursor {
    index: usize,
    count: usize,
    columns: usize,
}

impl BoardCursor {
    /// Cursor over `count` slots laid out in the default column width.
    pub fn new(count: usize) -> Self {
        Self::with_columns(count, BOARD_COLUMNS)
    }

    pub fn with_columns(count: usize, columns: usize) -> Self {
        Self {
            index: 0,
            count,
            columns: columns.max(1),
        }
    }

    /// Current slot index. Only meaningful while `count > 0`.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Re-target the cursor at a new board, clamping the position.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        if count == 0 {
            self.index = 0;
        } else if self.index >= count {
            self.index = count - 1;
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn move_left(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.count > 0 && self.index + 1 < self.count {
            self.index += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.index >= self.columns {
            self.index -= self.columns;
        }
    }

    pub fn move_down(&mut self) {
        if self.count > 0 && self.index + self.columns < self.count {
            self.index += self.columns;
        }
    }
}
