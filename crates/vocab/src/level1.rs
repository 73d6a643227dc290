//! Level 1 - everyday nouns (4 pairs).

use word_match_types::WordPair;

pub const LEVEL1: &[WordPair] = &[
    WordPair::new("apple", "苹果"),
    WordPair::new("book", "书"),
    WordPair::new("cat", "猫"),
    WordPair::new("dog", "狗"),
];
