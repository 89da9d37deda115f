//! Error types for replay-cursor operations.
//!
//! All errors are argument range violations detected before a read, a
//! partitioning pass, or a scan touches the wrapped source. Failures raised
//! by the source itself are not represented here: a fallible source yields
//! `Result` items which are forwarded to the caller untouched.

use thiserror::Error;

/// Result type alias for replay-cursor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Argument errors raised by cursor reads and the algorithms built on them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A compensating read was requested with an empty lookback window.
    #[error("window size must be at least 1, got {size}")]
    WindowSize {
        /// Requested window size.
        size: usize,
    },

    /// A partition size of zero was requested.
    #[error("partition size must be at least 1, got {size}")]
    PartitionSize {
        /// Requested partition size.
        size: usize,
    },

    /// A subsequence scan was requested with tokens too short to overlap.
    #[error("maximum token length must be at least 2, got {length}")]
    TokenLength {
        /// Requested maximum token length.
        length: usize,
    },
}
