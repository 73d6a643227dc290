//! Game state module - the level/match state machine
//!
//! This ties together the vocabulary, the deck, and scoring. All state
//! transitions happen on discrete stimuli: an applied [`GameAction`] or a
//! [`GameState::tick`] call. The host owns the clock; the core never sleeps
//! or schedules callbacks. Delayed effects (hiding a matched pair, reverting
//! a mismatched one, the level-complete transition) are queued with a due
//! time and a generation tag and run from `tick`, so a resolve scheduled
//! before a level load or restart can never touch the new deck.

use arrayvec::ArrayVec;

use word_match_vocab::Vocabulary;

use crate::deck::{build_deck, is_match, Card};
use crate::rng::SimpleRng;
use crate::types::{
    CardState, CueKind, GameAction, Phase, MATCH_HIDE_DELAY_MS, MATCH_POINTS_PER_LEVEL,
    MISMATCH_PENALTY, MISMATCH_REVERT_DELAY_MS, TIMER_INTERVAL_MS,
};

/// What a scheduled resolve does to its pair of cards when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResolveKind {
    /// Hide both matched cards; completes the level if it was the last pair.
    HideMatched,
    /// Return both mismatched cards to idle.
    RevertToIdle,
}

/// A fire-and-forget delayed effect, tagged with the generation it was
/// scheduled in. Stale generations are dropped unapplied.
#[derive(Debug, Clone, Copy)]
struct PendingResolve {
    due_ms: u64,
    cards: [usize; 2],
    kind: ResolveKind,
    generation: u32,
}

/// Complete game state.
///
/// Created once at program start, mutated only through [`apply_action`] and
/// [`tick`].
///
/// [`apply_action`]: GameState::apply_action
/// [`tick`]: GameState::tick
#[derive(Debug, Clone)]
pub struct GameState {
    vocab: Vocabulary,
    rng: SimpleRng,
    phase: Phase,
    /// Current level id, 1-based. Meaningful while playing or level-complete.
    level: u32,
    score: u32,
    /// Seconds elapsed in the current level.
    elapsed_seconds: u32,
    timer_running: bool,
    timer_accum_ms: u32,
    /// Monotonic internal clock, advanced by `tick` only.
    clock_ms: u64,
    matched_pairs: usize,
    total_pairs: usize,
    cards: Vec<Card>,
    /// The 0-or-1 pending selection of the matching protocol.
    selected: Option<usize>,
    /// Bumped on every level load and restart; guards stale resolves.
    generation: u32,
    pending: Vec<PendingResolve>,
    cues: ArrayVec<CueKind, 8>,
    // Snapshot shown on the level-complete screen.
    completed_level: u32,
    level_time_seconds: u32,
    level_score: u32,
}

impl GameState {
    /// Create a new game over the given vocabulary, with a shuffle seed.
    pub fn new(vocab: Vocabulary, seed: u32) -> Self {
        Self {
            vocab,
            rng: SimpleRng::new(seed),
            phase: Phase::Intro,
            level: 1,
            score: 0,
            elapsed_seconds: 0,
            timer_running: false,
            timer_accum_ms: 0,
            clock_ms: 0,
            matched_pairs: 0,
            total_pairs: 0,
            cards: Vec::new(),
            selected: None,
            generation: 0,
            pending: Vec::new(),
            cues: ArrayVec::new(),
            completed_level: 0,
            level_time_seconds: 0,
            level_score: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Index of the pending selection, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn timer_running(&self) -> bool {
        self.timer_running
    }

    /// Level id shown on the level-complete screen.
    pub fn completed_level(&self) -> u32 {
        self.completed_level
    }

    /// Level time snapshot shown on the level-complete screen.
    pub fn level_time_seconds(&self) -> u32 {
        self.level_time_seconds
    }

    /// Score snapshot shown on the level-complete screen.
    pub fn level_score(&self) -> u32 {
        self.level_score
    }

    /// Drain cues queued since the last call (presentation layer contract).
    pub fn take_cues(&mut self) -> ArrayVec<CueKind, 8> {
        std::mem::take(&mut self.cues)
    }

    /// Apply a game action. Returns whether the action had any effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => {
                if self.phase != Phase::Intro {
                    return false;
                }
                self.start();
                true
            }
            GameAction::Advance => {
                // Only ever accepted on the level-complete screen, which also
                // makes the final-level transition idempotent: once the game
                // is over, further advances are no-ops.
                if self.phase != Phase::LevelComplete {
                    return false;
                }
                self.advance_level();
                true
            }
            GameAction::Restart => {
                if self.phase == Phase::Intro {
                    return false;
                }
                self.restart();
                true
            }
            GameAction::Activate(idx) => self.activate_card(idx),
        }
    }

    /// Advance time by `elapsed_ms`: run due resolves and the play timer.
    ///
    /// Returns true if anything observable changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.clock_ms += elapsed_ms as u64;
        let mut changed = self.run_due_resolves();

        if self.timer_running && self.phase == Phase::Playing {
            self.timer_accum_ms += elapsed_ms;
            while self.timer_accum_ms >= TIMER_INTERVAL_MS {
                self.timer_accum_ms -= TIMER_INTERVAL_MS;
                self.elapsed_seconds += 1;
                changed = true;
            }
        }

        changed
    }

    /// Begin a new game: fresh score, level 1, running timer.
    fn start(&mut self) {
        self.score = 0;
        if self.load_level(1) {
            self.phase = Phase::Playing;
            self.start_timer();
        }
    }

    /// Load the next level, or end the game if there is none.
    fn advance_level(&mut self) {
        self.stop_timer();
        let next = self.level + 1;
        if self.load_level(next) {
            self.phase = Phase::Playing;
            self.start_timer();
        }
    }

    /// Return to the intro screen, abandoning the current level.
    ///
    /// Score and level values survive; they reset only on the next start.
    fn restart(&mut self) {
        self.stop_timer();
        self.generation = self.generation.wrapping_add(1);
        self.pending.clear();
        self.cards.clear();
        self.selected = None;
        self.matched_pairs = 0;
        self.total_pairs = 0;
        self.phase = Phase::Intro;
    }

    /// Load a level's deck. Routes to game over when the id is undefined.
    fn load_level(&mut self, id: u32) -> bool {
        let Some(pairs) = self.vocab.level(id) else {
            self.end_game();
            return false;
        };

        self.level = id;
        self.matched_pairs = 0;
        self.total_pairs = pairs.len();
        self.generation = self.generation.wrapping_add(1);
        self.pending.clear();
        self.selected = None;
        self.cards = build_deck(pairs);
        self.rng.shuffle(&mut self.cards);
        true
    }

    /// Terminal transition: stop the timer and show the final score.
    fn end_game(&mut self) {
        self.stop_timer();
        self.phase = Phase::GameOver;
    }

    /// (Re-)start the per-level timer from zero.
    fn start_timer(&mut self) {
        self.elapsed_seconds = 0;
        self.timer_accum_ms = 0;
        self.timer_running = true;
    }

    /// Stop the timer. Stopping an already-stopped timer is a no-op.
    fn stop_timer(&mut self) {
        self.timer_running = false;
    }

    /// The card matching protocol.
    ///
    /// First activation of a round stores the pending selection; the second
    /// evaluates the pair. Activating a matched card or the pending selection
    /// itself is ignored.
    fn activate_card(&mut self, idx: usize) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let Some(card) = self.cards.get(idx) else {
            return false;
        };
        if card.state == CardState::Matched {
            return false;
        }
        if self.selected == Some(idx) {
            return false;
        }

        self.cards[idx].state = CardState::Selected;

        // Pending selection is cleared before evaluating, whatever the
        // outcome, so the next two activations form a fresh round.
        let Some(first) = self.selected.take() else {
            self.selected = Some(idx);
            return true;
        };

        if is_match(&self.cards[first], &self.cards[idx]) {
            self.resolve_match(first, idx);
        } else {
            self.resolve_mismatch(first, idx);
        }
        true
    }

    fn resolve_match(&mut self, a: usize, b: usize) {
        self.cards[a].state = CardState::Matched;
        self.cards[b].state = CardState::Matched;
        self.score += MATCH_POINTS_PER_LEVEL * self.level;
        self.matched_pairs += 1;
        let _ = self.cues.try_push(CueKind::Correct);
        self.schedule(ResolveKind::HideMatched, [a, b], MATCH_HIDE_DELAY_MS);
    }

    fn resolve_mismatch(&mut self, a: usize, b: usize) {
        self.score = self.score.saturating_sub(MISMATCH_PENALTY);
        let _ = self.cues.try_push(CueKind::Wrong);
        self.schedule(ResolveKind::RevertToIdle, [a, b], MISMATCH_REVERT_DELAY_MS);
    }

    fn schedule(&mut self, kind: ResolveKind, cards: [usize; 2], delay_ms: u32) {
        self.pending.push(PendingResolve {
            due_ms: self.clock_ms + delay_ms as u64,
            cards,
            kind,
            generation: self.generation,
        });
    }

    /// Fire every resolve whose due time has passed.
    fn run_due_resolves(&mut self) -> bool {
        let mut changed = false;
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due_ms <= self.clock_ms {
                let resolve = self.pending.remove(i);
                changed |= self.apply_resolve(resolve);
            } else {
                i += 1;
            }
        }
        changed
    }

    fn apply_resolve(&mut self, resolve: PendingResolve) -> bool {
        if resolve.generation != self.generation {
            // The level or game moved on; never resurrect old cards.
            return false;
        }

        match resolve.kind {
            ResolveKind::HideMatched => {
                for idx in resolve.cards {
                    if let Some(card) = self.cards.get_mut(idx) {
                        if card.state == CardState::Matched {
                            card.hidden = true;
                        }
                    }
                }
                if self.phase == Phase::Playing && self.matched_pairs == self.total_pairs {
                    self.complete_level();
                }
                true
            }
            ResolveKind::RevertToIdle => {
                for idx in resolve.cards {
                    // A card re-selected (or matched) during the delay keeps
                    // its newer state.
                    if self.selected == Some(idx) {
                        continue;
                    }
                    if let Some(card) = self.cards.get_mut(idx) {
                        if card.state == CardState::Selected {
                            card.state = CardState::Idle;
                        }
                    }
                }
                true
            }
        }
    }

    /// All pairs matched: snapshot the level results and change screens.
    fn complete_level(&mut self) {
        self.stop_timer();
        self.completed_level = self.level;
        self.level_time_seconds = self.elapsed_seconds;
        self.level_score = self.score;
        let _ = self.cues.try_push(CueKind::LevelComplete);
        self.phase = Phase::LevelComplete;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Vocabulary::builtin(), 1)
    }
}
