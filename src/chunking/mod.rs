//! Algorithms built on the cursor context.
//!
//! Both strategies use only the public read contract of
//! [`StatefulCursor`](crate::core::StatefulCursor):
//!
//! - **Partition**: consecutive, non-overlapping groups of a fixed size
//! - **Subsequence**: overlapping tokens manufactured from lookback reads

pub mod partition;
pub mod subsequence;
pub mod traits;

pub use partition::{Partitions, partition};
pub use subsequence::{Subsequences, scan_subsequences, scan_with};
pub use traits::{ScanConfig, StatefulExt};

/// Default maximum token length for subsequence scanning.
pub const DEFAULT_MAX_LENGTH: usize = 2;

/// Shortest token length that still overlaps its neighbour.
pub const MIN_TOKEN_LENGTH: usize = 2;
