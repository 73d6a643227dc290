//! Deck module - card construction and the matching rule
//!
//! A deck is built fresh every time a level loads and discarded when the
//! level ends. Each word pair contributes exactly two cards: one showing the
//! foreign term, one showing the native term, both tagged with the same
//! [`PairKey`].

use word_match_types::{CardState, PairKey, Side, WordPair};

/// A single on-screen token showing one side of a word pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    /// The term this card displays.
    pub text: &'static str,
    /// Which side of its pair this card shows.
    pub side: Side,
    /// Identity of the pair this card belongs to.
    pub pair: PairKey,
    /// Selection lifecycle state.
    pub state: CardState,
    /// Set once the hide delay after a successful match has elapsed.
    pub hidden: bool,
}

impl Card {
    fn new(text: &'static str, side: Side, pair: PairKey) -> Self {
        Self {
            text,
            side,
            pair,
            state: CardState::Idle,
            hidden: false,
        }
    }
}

/// Build the 2N cards for a level's pair list, in table order.
///
/// The caller shuffles; construction itself is deterministic so tests can
/// reason about indices.
pub fn build_deck(pairs: &[WordPair]) -> Vec<Card> {
    let mut deck = Vec::with_capacity(pairs.len() * 2);
    for (i, pair) in pairs.iter().enumerate() {
        let key = PairKey(i as u16);
        deck.push(Card::new(pair.foreign, Side::Foreign, key));
        deck.push(Card::new(pair.native, Side::Native, key));
    }
    deck
}

/// Two cards match iff they belong to the same pair and show different sides.
pub fn is_match(a: &Card, b: &Card) -> bool {
    a.pair == b.pair && a.side != b.side
}
