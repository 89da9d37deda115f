//! # replay-cursor
//!
//! Multiple, possibly overlapping passes over a one-shot iterator without
//! materializing it.
//!
//! A [`StatefulCursor`] sits between a forward-only source and its consumer
//! and keeps a small replay buffer of elements that were pulled but not yet
//! delivered. Reads can be abandoned at any point; the next read resumes
//! exactly where delivery stopped.
//!
//! ## Features
//!
//! - **Resume**: continue delivery with no replay
//! - **Compensate**: continue delivery and replay the last `n` delivered
//!   elements on the next read, creating overlapping windows
//! - **Partitioning** and **overlapping subsequence scanning** built purely on
//!   those two reads
//! - **Unicode aware** grapheme and word n-grams
//!
//! ```
//! use replay_cursor::StatefulCursor;
//!
//! let mut cursor = StatefulCursor::new(vec![1, 2, 3, 4, 5, 6]);
//! let seen = cursor.compensate(1)?.take_while(|&i| i < 4).count();
//! assert_eq!(seen, 3);
//! assert_eq!(cursor.resume().collect::<Vec<_>>(), vec![4, 5, 6]);
//! # Ok::<(), replay_cursor::Error>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod chunking;
pub mod core;
pub mod error;
pub mod text;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core types
pub use crate::core::{Compensate, ReplayBuffer, Resume, SourceCursor, StatefulCursor};

// Re-export chunking types
pub use chunking::{
    Partitions, ScanConfig, StatefulExt, Subsequences, partition, scan_subsequences, scan_with,
};
