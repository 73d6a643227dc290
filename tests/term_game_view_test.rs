use word_match::core::GameState;
use word_match::term::{FrameBuffer, GameView, HudView, Viewport};
use word_match::types::{CueKind, GameAction, Phase};
use word_match::vocab::Vocabulary;

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap();
            if !cell.is_wide_continuation() {
                all.push(cell.ch);
            }
        }
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_intro_screen() {
    let state = GameState::new(Vocabulary::builtin(), 1);
    let view = GameView::default();

    let fb = view.render(&state, &HudView::default(), Viewport::new(80, 24));
    let all = screen_text(&fb);

    assert!(all.contains("WORD MATCH"));
    assert!(all.contains("ENTER - start"));
}

#[test]
fn term_view_renders_one_box_per_visible_card() {
    let mut state = GameState::new(Vocabulary::builtin(), 9);
    state.apply_action(GameAction::Start);

    let view = GameView::default();
    let fb = view.render(&state, &HudView::default(), Viewport::new(80, 24));

    let corners = screen_text(&fb).matches('┌').count();
    assert_eq!(corners, state.cards().len());
}

#[test]
fn term_view_shows_status_line_while_playing() {
    let mut state = GameState::new(Vocabulary::builtin(), 9);
    state.apply_action(GameAction::Start);
    state.tick(65_000);

    let view = GameView::default();
    let fb = view.render(&state, &HudView::default(), Viewport::new(80, 24));
    let all = screen_text(&fb);

    assert!(all.contains("LEVEL 1"));
    assert!(all.contains("TIME 01:05"));
    assert!(all.contains("PAIRS 0/4"));
}

#[test]
fn term_view_renders_flash_banner_from_hud() {
    let mut state = GameState::new(Vocabulary::builtin(), 9);
    state.apply_action(GameAction::Start);

    let hud = HudView {
        cursor: Some(0),
        flash: Some(CueKind::Wrong),
    };
    let view = GameView::default();
    let fb = view.render(&state, &hud, Viewport::new(80, 24));

    assert!(screen_text(&fb).contains("WRONG"));
}

#[test]
fn term_view_renders_game_over_with_final_score() {
    let mut state = GameState::new(Vocabulary::from_levels(&[]), 1);
    state.apply_action(GameAction::Start);
    assert_eq!(state.phase(), Phase::GameOver);

    let view = GameView::default();
    let fb = view.render(&state, &HudView::default(), Viewport::new(80, 24));
    let all = screen_text(&fb);

    assert!(all.contains("GAME OVER"));
    assert!(all.contains("FINAL SCORE 0"));
}
