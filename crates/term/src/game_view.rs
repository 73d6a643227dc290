//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Card, GameState};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{format_mm_ss, CardState, CueKind, Phase, Side, BOARD_COLUMNS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Presentation state owned by the main loop, not the game core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudView {
    /// Card slot under the keyboard cursor, if a board is showing.
    pub cursor: Option<usize>,
    /// Short-lived feedback banner for the most recent cue.
    pub flash: Option<CueKind>,
}

/// A lightweight terminal renderer for the word-matching game.
pub struct GameView {
    /// Card width in terminal columns, borders included.
    card_w: u16,
    /// Card height in terminal rows, borders included.
    card_h: u16,
    /// Horizontal gap between cards.
    gap_x: u16,
    /// Vertical gap between card rows.
    gap_y: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            card_w: 14,
            card_h: 3,
            gap_x: 2,
            gap_y: 1,
        }
    }
}

impl GameView {
    pub fn new(card_w: u16, card_h: u16) -> Self {
        Self {
            card_w: card_w.max(4),
            card_h: card_h.max(3),
            ..Self::default()
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        state: &GameState,
        hud: &HudView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        match state.phase() {
            Phase::Intro => self.draw_intro(viewport, fb),
            Phase::Playing => self.draw_board(state, hud, viewport, fb),
            Phase::LevelComplete => self.draw_level_complete(state, viewport, fb),
            Phase::GameOver => self.draw_game_over(state, viewport, fb),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, hud: &HudView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, hud, viewport, &mut fb);
        fb
    }

    fn draw_intro(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        let mid_y = viewport.height / 2;
        let title = CellStyle {
            fg: Rgb::new(240, 220, 80),
            bold: true,
            ..CellStyle::default()
        };
        let body = CellStyle::default();
        let hint = CellStyle {
            dim: true,
            ..CellStyle::default()
        };

        fb.put_str_centered(0, mid_y.saturating_sub(3), viewport.width, "WORD MATCH", title);
        fb.put_str_centered(
            0,
            mid_y.saturating_sub(1),
            viewport.width,
            "Match each word with its translation.",
            body,
        );
        fb.put_str_centered(
            0,
            mid_y.saturating_add(2),
            viewport.width,
            "ENTER - start    Q - quit",
            hint,
        );
    }

    fn draw_board(
        &self,
        state: &GameState,
        hud: &HudView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        self.draw_status_line(state, viewport, fb);

        if let Some(cue) = hud.flash {
            let (text, fg) = match cue {
                CueKind::Correct => ("MATCH!", Rgb::new(100, 220, 120)),
                CueKind::Wrong => ("WRONG", Rgb::new(220, 80, 80)),
                CueKind::LevelComplete => ("LEVEL CLEAR", Rgb::new(240, 220, 80)),
            };
            let style = CellStyle {
                fg,
                bold: true,
                ..CellStyle::default()
            };
            fb.put_str_centered(0, 2, viewport.width, text, style);
        }

        let cards = state.cards();
        if cards.is_empty() {
            return;
        }

        let columns = BOARD_COLUMNS as u16;
        let rows = (cards.len() as u16 + columns - 1) / columns;
        let grid_w = columns * self.card_w + (columns - 1) * self.gap_x;
        let grid_h = rows * self.card_h + (rows - 1) * self.gap_y;

        let start_x = viewport.width.saturating_sub(grid_w) / 2;
        let body_h = viewport.height.saturating_sub(4);
        let start_y = 4 + body_h.saturating_sub(grid_h) / 2;

        for (i, card) in cards.iter().enumerate() {
            if card.hidden {
                continue;
            }
            let col = (i % BOARD_COLUMNS) as u16;
            let row = (i / BOARD_COLUMNS) as u16;
            let x = start_x + col * (self.card_w + self.gap_x);
            let y = start_y + row * (self.card_h + self.gap_y);
            let under_cursor = hud.cursor == Some(i);
            self.draw_card(fb, x, y, card, under_cursor);
        }
    }

    fn draw_status_line(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        let status = format!(
            "LEVEL {}   SCORE {}   TIME {}   PAIRS {}/{}",
            state.level(),
            state.score(),
            format_mm_ss(state.elapsed_seconds()),
            state.matched_pairs(),
            state.total_pairs(),
        );
        let style = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        fb.put_str_centered(0, 1, viewport.width, &status, style);
    }

    fn draw_card(&self, fb: &mut FrameBuffer, x: u16, y: u16, card: &Card, under_cursor: bool) {
        let border = if under_cursor {
            CellStyle {
                fg: Rgb::new(255, 255, 255),
                bold: true,
                ..CellStyle::default()
            }
        } else {
            match card.state {
                CardState::Selected => CellStyle {
                    fg: Rgb::new(240, 220, 80),
                    bold: true,
                    ..CellStyle::default()
                },
                CardState::Matched => CellStyle {
                    fg: Rgb::new(100, 220, 120),
                    dim: true,
                    ..CellStyle::default()
                },
                CardState::Idle => CellStyle {
                    fg: Rgb::new(120, 120, 130),
                    ..CellStyle::default()
                },
            }
        };

        let text = match card.state {
            CardState::Matched => CellStyle {
                fg: Rgb::new(100, 220, 120),
                dim: true,
                ..CellStyle::default()
            },
            _ => match card.side {
                Side::Foreign => CellStyle {
                    fg: Rgb::new(80, 220, 220),
                    ..CellStyle::default()
                },
                Side::Native => CellStyle {
                    fg: Rgb::new(255, 165, 0),
                    ..CellStyle::default()
                },
            },
        };

        fb.draw_box(x, y, self.card_w, self.card_h, border);
        let inner_x = x + 1;
        let inner_w = self.card_w - 2;
        let text_y = y + self.card_h / 2;
        fb.put_str_centered(inner_x, text_y, inner_w, card.text, text);
    }

    fn draw_level_complete(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        let mid_y = viewport.height / 2;
        let title = CellStyle {
            fg: Rgb::new(100, 220, 120),
            bold: true,
            ..CellStyle::default()
        };
        let body = CellStyle::default();
        let hint = CellStyle {
            dim: true,
            ..CellStyle::default()
        };

        let heading = format!("LEVEL {} COMPLETE", state.completed_level());
        fb.put_str_centered(0, mid_y.saturating_sub(3), viewport.width, &heading, title);
        fb.put_str_centered(
            0,
            mid_y.saturating_sub(1),
            viewport.width,
            &format!("TIME  {}", format_mm_ss(state.level_time_seconds())),
            body,
        );
        fb.put_str_centered(
            0,
            mid_y,
            viewport.width,
            &format!("SCORE {}", state.level_score()),
            body,
        );
        fb.put_str_centered(
            0,
            mid_y.saturating_add(3),
            viewport.width,
            "ENTER - next level    Q - quit",
            hint,
        );
    }

    fn draw_game_over(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        let mid_y = viewport.height / 2;
        let title = CellStyle {
            fg: Rgb::new(220, 80, 80),
            bold: true,
            ..CellStyle::default()
        };
        let body = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let hint = CellStyle {
            dim: true,
            ..CellStyle::default()
        };

        fb.put_str_centered(0, mid_y.saturating_sub(3), viewport.width, "GAME OVER", title);
        fb.put_str_centered(
            0,
            mid_y.saturating_sub(1),
            viewport.width,
            &format!("FINAL SCORE {}", state.score()),
            body,
        );
        fb.put_str_centered(
            0,
            mid_y.saturating_add(2),
            viewport.width,
            "R - play again    Q - quit",
            hint,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{vocab::Vocabulary, GameState};
    use crate::types::GameAction;

    fn fb_text(fb: &FrameBuffer) -> String {
        let mut out = String::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap_or_default();
                if !cell.is_wide_continuation() {
                    out.push(cell.ch);
                }
            }
            out.push('\n');
        }
        out
    }

    fn playing_state() -> GameState {
        let mut state = GameState::new(Vocabulary::builtin(), 7);
        state.apply_action(GameAction::Start);
        state
    }

    #[test]
    fn intro_screen_shows_title_and_hints() {
        let state = GameState::new(Vocabulary::builtin(), 1);
        let fb = GameView::default().render(&state, &HudView::default(), Viewport::new(80, 24));
        let text = fb_text(&fb);
        assert!(text.contains("WORD MATCH"));
        assert!(text.contains("ENTER - start"));
    }

    #[test]
    fn playing_screen_shows_status_and_cards() {
        let state = playing_state();
        let fb = GameView::default().render(&state, &HudView::default(), Viewport::new(80, 24));
        let text = fb_text(&fb);

        assert!(text.contains("LEVEL 1"));
        assert!(text.contains("SCORE 0"));
        assert!(text.contains("TIME 00:00"));
        assert!(text.contains("PAIRS 0/4"));

        // Every visible card's word should be on screen.
        for card in state.cards() {
            assert!(text.contains(card.text), "missing card text {}", card.text);
        }
    }

    #[test]
    fn hidden_cards_are_not_drawn() {
        let mut state = playing_state();
        let cards = state.cards();
        let first = 0;
        let partner = cards
            .iter()
            .position(|c| c.pair == cards[0].pair && c.side != cards[0].side)
            .unwrap();
        let word = cards[first].text;

        state.apply_action(GameAction::Activate(first));
        state.apply_action(GameAction::Activate(partner));
        state.tick(500);

        let fb = GameView::default().render(&state, &HudView::default(), Viewport::new(80, 24));
        assert!(!fb_text(&fb).contains(word));
    }

    #[test]
    fn flash_banner_renders_cue_text() {
        let state = playing_state();
        let hud = HudView {
            cursor: Some(0),
            flash: Some(CueKind::Correct),
        };
        let fb = GameView::default().render(&state, &hud, Viewport::new(80, 24));
        assert!(fb_text(&fb).contains("MATCH!"));
    }

    #[test]
    fn level_complete_screen_shows_snapshot() {
        let mut state = playing_state();
        // Match all four pairs.
        for _ in 0..state.total_pairs() {
            let (a, b) = {
                let cards = state.cards();
                let a = cards
                    .iter()
                    .position(|c| c.state == CardState::Idle)
                    .unwrap();
                let b = cards
                    .iter()
                    .position(|c| c.pair == cards[a].pair && c.side != cards[a].side)
                    .unwrap();
                (a, b)
            };
            state.apply_action(GameAction::Activate(a));
            state.apply_action(GameAction::Activate(b));
            state.tick(500);
        }
        assert_eq!(state.phase(), Phase::LevelComplete);

        let fb = GameView::default().render(&state, &HudView::default(), Viewport::new(80, 24));
        let text = fb_text(&fb);
        assert!(text.contains("LEVEL 1 COMPLETE"));
        assert!(text.contains("SCORE 40"));
        // Four 500ms hide delays tick the play timer past one second.
        assert!(text.contains("TIME  00:01"));
    }

    #[test]
    fn game_over_screen_shows_final_score() {
        let mut state = GameState::new(Vocabulary::from_levels(&[]), 1);
        state.apply_action(GameAction::Start);
        assert_eq!(state.phase(), Phase::GameOver);

        let fb = GameView::default().render(&state, &HudView::default(), Viewport::new(80, 24));
        let text = fb_text(&fb);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("FINAL SCORE 0"));
        assert!(text.contains("R - play again"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let state = playing_state();
        let fb = GameView::default().render(&state, &HudView::default(), Viewport::new(10, 3));
        assert_eq!(fb.width(), 10);
        assert_eq!(fb.height(), 3);
    }
}
