//! Core cursor types for replay-cursor.
//!
//! This module contains the source adapter, the replay buffer, and the
//! stateful cursor context that ties them together. These are pure data
//! structures with no I/O dependencies.

pub mod context;
pub mod replay;
pub mod source;

pub use context::{Compensate, Resume, StatefulCursor};
pub use replay::ReplayBuffer;
pub use source::SourceCursor;
