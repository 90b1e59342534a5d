//! Text preparation for synthesis.
//!
//! Splits chapter bodies into sentences and rebuilds the model input from them.

mod sentences;

pub use sentences::{join_sentences, split_into_sentences};
