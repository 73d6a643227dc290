//! Level 5 - time and seasons (8 pairs).

use word_match_types::WordPair;

pub const LEVEL5: &[WordPair] = &[
    WordPair::new("yesterday", "昨天"),
    WordPair::new("today", "今天"),
    WordPair::new("tomorrow", "明天"),
    WordPair::new("morning", "早上"),
    WordPair::new("evening", "晚上"),
    WordPair::new("weather", "天气"),
    WordPair::new("spring", "春天"),
    WordPair::new("winter", "冬天"),
];
