//! Level 4 - food and drink (7 pairs).

use word_match_types::WordPair;

pub const LEVEL4: &[WordPair] = &[
    WordPair::new("breakfast", "早饭"),
    WordPair::new("lunch", "午饭"),
    WordPair::new("dinner", "晚饭"),
    WordPair::new("vegetable", "蔬菜"),
    WordPair::new("fruit", "水果"),
    WordPair::new("coffee", "咖啡"),
    WordPair::new("tea", "茶"),
];
