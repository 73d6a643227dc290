//! Level 2 - nature (5 pairs).

use word_match_types::WordPair;

pub const LEVEL2: &[WordPair] = &[
    WordPair::new("water", "水"),
    WordPair::new("fire", "火"),
    WordPair::new("mountain", "山"),
    WordPair::new("moon", "月亮"),
    WordPair::new("sun", "太阳"),
];
