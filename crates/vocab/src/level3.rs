//! Level 3 - people and places (6 pairs).

use word_match_types::WordPair;

pub const LEVEL3: &[WordPair] = &[
    WordPair::new("teacher", "老师"),
    WordPair::new("student", "学生"),
    WordPair::new("friend", "朋友"),
    WordPair::new("family", "家人"),
    WordPair::new("school", "学校"),
    WordPair::new("library", "图书馆"),
];
