//! Text adapters for replay-cursor.
//!
//! Feeds Unicode-segmented text into the cursor context and the overlapping
//! subsequence scanner.

pub mod unicode;

pub use unicode::{grapheme_cursor, grapheme_ngrams, word_shingles};
