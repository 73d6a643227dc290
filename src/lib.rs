//! Word Match (workspace facade crate).
//!
//! This package keeps the `word_match::{core,input,term,types,vocab}` public
//! API stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use word_match_core as core;
pub use word_match_input as input;
pub use word_match_term as term;
pub use word_match_types as types;
pub use word_match_vocab as vocab;
