//! Integration tests for the full game flow: intro through game over.

use word_match::core::GameState;
use word_match::types::{CueKind, GameAction, Phase};
use word_match::vocab::Vocabulary;

fn playing_state(seed: u32) -> GameState {
    let mut state = GameState::new(Vocabulary::builtin(), seed);
    state.apply_action(GameAction::Start);
    assert_eq!(state.phase(), Phase::Playing);
    state
}

/// Indices of an unmatched pair: some idle card and its partner.
fn find_pair(state: &GameState) -> (usize, usize) {
    let cards = state.cards();
    let a = cards
        .iter()
        .position(|c| c.state == word_match::types::CardState::Idle)
        .expect("an idle card exists");
    let b = cards
        .iter()
        .position(|c| c.pair == cards[a].pair && c.side != cards[a].side)
        .expect("its partner exists");
    (a, b)
}

/// Indices of two idle cards from different pairs.
fn find_mismatch(state: &GameState) -> (usize, usize) {
    let cards = state.cards();
    let a = cards
        .iter()
        .position(|c| c.state == word_match::types::CardState::Idle)
        .expect("an idle card exists");
    let b = cards
        .iter()
        .position(|c| c.state == word_match::types::CardState::Idle && c.pair != cards[a].pair)
        .expect("a card from another pair exists");
    (a, b)
}

fn clear_level(state: &mut GameState) {
    let total = state.total_pairs();
    for _ in 0..total {
        let (a, b) = find_pair(state);
        state.apply_action(GameAction::Activate(a));
        state.apply_action(GameAction::Activate(b));
        state.tick(500);
    }
}

#[test]
fn full_game_reaches_game_over_with_accumulated_score() {
    let mut state = playing_state(42);
    let levels = Vocabulary::builtin().level_count() as u32;

    let mut expected_score = 0;
    for level in 1..=levels {
        assert_eq!(state.level(), level);
        expected_score += state.total_pairs() as u32 * 10 * level;

        clear_level(&mut state);
        assert_eq!(state.phase(), Phase::LevelComplete);
        assert_eq!(state.completed_level(), level);
        assert_eq!(state.score(), expected_score);

        state.apply_action(GameAction::Advance);
    }

    // Advancing past the last level ends the game, keeping the score.
    assert_eq!(state.phase(), Phase::GameOver);
    assert_eq!(state.score(), expected_score);

    // Further advances are no-ops.
    assert!(!state.apply_action(GameAction::Advance));
    assert_eq!(state.phase(), Phase::GameOver);
}

#[test]
fn match_awards_level_scaled_points_and_cues() {
    let mut state = playing_state(7);

    let (a, b) = find_pair(&state);
    state.apply_action(GameAction::Activate(a));
    state.apply_action(GameAction::Activate(b));

    // Points are awarded at evaluation time, not when the cards hide.
    assert_eq!(state.score(), 10);
    assert_eq!(state.matched_pairs(), 1);

    let cues = state.take_cues();
    assert!(cues.contains(&CueKind::Correct));

    // The matched cards disappear only after the hide delay.
    assert!(!state.cards()[a].hidden);
    state.tick(499);
    assert!(!state.cards()[a].hidden);
    state.tick(1);
    assert!(state.cards()[a].hidden);
    assert!(state.cards()[b].hidden);
}

#[test]
fn mismatch_penalty_never_drops_score_below_zero() {
    let mut state = playing_state(7);

    let (a, b) = find_mismatch(&state);
    state.apply_action(GameAction::Activate(a));
    state.apply_action(GameAction::Activate(b));

    assert_eq!(state.score(), 0, "penalty clamps at zero");
    assert!(state.take_cues().contains(&CueKind::Wrong));

    // Both cards flip back after the revert delay.
    state.tick(800);
    assert_eq!(
        state.cards()[a].state,
        word_match::types::CardState::Idle
    );
    assert_eq!(
        state.cards()[b].state,
        word_match::types::CardState::Idle
    );
}

#[test]
fn restart_returns_to_intro_and_start_resets_score() {
    let mut state = playing_state(11);

    let (a, b) = find_pair(&state);
    state.apply_action(GameAction::Activate(a));
    state.apply_action(GameAction::Activate(b));
    state.tick(500);
    assert_eq!(state.score(), 10);

    state.apply_action(GameAction::Restart);
    assert_eq!(state.phase(), Phase::Intro);
    // The score survives the trip to the intro screen...
    assert_eq!(state.score(), 10);

    // ...and resets when a new game begins.
    state.apply_action(GameAction::Start);
    assert_eq!(state.score(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.matched_pairs(), 0);
}

#[test]
fn delayed_effects_do_not_leak_across_restart() {
    let mut state = playing_state(11);

    let (a, b) = find_pair(&state);
    state.apply_action(GameAction::Activate(a));
    state.apply_action(GameAction::Activate(b));

    // Restart while the hide is still pending, then start a fresh game.
    state.apply_action(GameAction::Restart);
    state.apply_action(GameAction::Start);
    state.tick(500);

    assert!(
        state.cards().iter().all(|c| !c.hidden),
        "stale hide from the previous deck must not fire"
    );
    assert_eq!(state.matched_pairs(), 0);
}

#[test]
fn timer_counts_whole_seconds_and_resets_per_level() {
    let mut state = playing_state(3);

    state.tick(999);
    assert_eq!(state.elapsed_seconds(), 0);
    state.tick(1);
    assert_eq!(state.elapsed_seconds(), 1);
    state.tick(2500);
    assert_eq!(state.elapsed_seconds(), 3);

    clear_level(&mut state);
    assert_eq!(state.phase(), Phase::LevelComplete);
    let frozen = state.elapsed_seconds();
    state.tick(5000);
    assert_eq!(state.elapsed_seconds(), frozen, "timer stops off the board");

    state.apply_action(GameAction::Advance);
    assert_eq!(state.elapsed_seconds(), 0, "each level times itself");
}

#[test]
fn start_is_only_accepted_on_the_intro_screen() {
    let mut state = playing_state(5);
    assert!(!state.apply_action(GameAction::Start));
    assert_eq!(state.phase(), Phase::Playing);
    assert_eq!(state.level(), 1);
}
