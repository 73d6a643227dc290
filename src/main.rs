//! Terminal word-match runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout).

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use word_match::core::GameState;
use word_match::input::{handle_key_event, should_quit, BoardCursor, UiCommand};
use word_match::term::{FrameBuffer, GameView, HudView, TerminalRenderer, Viewport};
use word_match::types::{GameAction, Phase, TICK_MS};
use word_match::vocab::Vocabulary;

/// How long a match/mismatch banner stays on screen.
const FLASH_TTL_MS: u32 = 900;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut state = GameState::new(Vocabulary::builtin(), clock_seed());

    let view = GameView::default();
    let mut cursor = BoardCursor::new(0);
    let mut hud = HudView::default();
    let mut flash_ttl_ms: u32 = 0;
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut was_playing = false;

    loop {
        // A fresh board means the cursor targets a new deck.
        let playing = state.phase() == Phase::Playing;
        if playing && !was_playing {
            cursor = BoardCursor::new(state.cards().len());
        }
        was_playing = playing;
        hud.cursor = playing.then(|| cursor.index());

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&state, &hud, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(cmd) = handle_key_event(key) {
                        dispatch(cmd, &mut state, &mut cursor);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            state.tick(TICK_MS);

            flash_ttl_ms = flash_ttl_ms.saturating_sub(TICK_MS);
            if flash_ttl_ms == 0 {
                hud.flash = None;
            }
            for cue in state.take_cues() {
                term.beep()?;
                hud.flash = Some(cue);
                flash_ttl_ms = FLASH_TTL_MS;
            }
        }
    }
}

/// Resolve a screen-level command against the current screen.
fn dispatch(cmd: UiCommand, state: &mut GameState, cursor: &mut BoardCursor) {
    match cmd {
        UiCommand::CursorLeft => cursor.move_left(),
        UiCommand::CursorRight => cursor.move_right(),
        UiCommand::CursorUp => cursor.move_up(),
        UiCommand::CursorDown => cursor.move_down(),
        UiCommand::Confirm => match state.phase() {
            Phase::Intro => {
                state.apply_action(GameAction::Start);
            }
            Phase::Playing => {
                state.apply_action(GameAction::Activate(cursor.index()));
            }
            Phase::LevelComplete => {
                state.apply_action(GameAction::Advance);
            }
            Phase::GameOver => {}
        },
        UiCommand::Restart => {
            state.apply_action(GameAction::Restart);
        }
    }
}

/// Wall-clock shuffle seed. Determinism only matters in tests, which pass
/// their own seeds.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
