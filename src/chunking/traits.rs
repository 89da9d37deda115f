//! Extension trait and scan configuration.
//!
//! [`StatefulExt`] gives every `IntoIterator` method-syntax access to the
//! cursor context and to partitioning. [`ScanConfig`] bundles the knobs for
//! subsequence scanning so callers can carry them around or deserialize them.

use serde::{Deserialize, Serialize};

use crate::chunking::partition::{Partitions, partition};
use crate::core::StatefulCursor;
use crate::error::{Error, Result};

/// Method-syntax constructors for cursor contexts.
///
/// # Examples
///
/// ```
/// use replay_cursor::chunking::StatefulExt;
///
/// let mut cursor = vec!['a', 'b', 'c'].stateful();
/// assert_eq!(cursor.resume().next(), Some('a'));
///
/// let groups: Vec<_> = (1..=5).partitions(2)?.collect();
/// assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// # Ok::<(), replay_cursor::Error>(())
/// ```
pub trait StatefulExt: IntoIterator + Sized {
    /// Wraps the iterator in a [`StatefulCursor`].
    fn stateful(self) -> StatefulCursor<Self::IntoIter> {
        StatefulCursor::new(self)
    }

    /// Splits the iterator into groups of `size` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PartitionSize`] if `size` is zero.
    fn partitions(self, size: usize) -> Result<Partitions<Self::IntoIter>> {
        partition(self, size)
    }
}

impl<S: IntoIterator> StatefulExt for S {}

/// Settings for subsequence scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum token length; consecutive tokens overlap by one less.
    pub max_length: usize,

    /// Maximum tokens to produce (0 = unlimited).
    pub max_tokens: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanConfig {
    /// Creates a configuration producing unlimited pairs.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_length: super::DEFAULT_MAX_LENGTH,
            max_tokens: 0,
        }
    }

    /// Creates a configuration with a custom token length.
    #[must_use]
    pub const fn with_max_length(max_length: usize) -> Self {
        Self {
            max_length,
            ..Self::new()
        }
    }

    /// Sets the maximum number of tokens.
    #[must_use]
    pub const fn max_tokens(mut self, max: usize) -> Self {
        self.max_tokens = max;
        self
    }

    /// Checks that tokens are long enough to overlap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TokenLength`] if `max_length` is below 2.
    pub const fn validate(&self) -> Result<()> {
        if self.max_length < super::MIN_TOKEN_LENGTH {
            return Err(Error::TokenLength {
                length: self.max_length,
            });
        }
        Ok(())
    }
}
