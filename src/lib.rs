//! # Bounded-integer capture with constant-time rank queries
//!
//! This library records a multiset of small non-negative integers and answers
//! three aggregate queries over it: how many values are less than `x`, how
//! many are greater than `x`, and how many fall inside an inclusive range.
//!
//! ## Core Algorithm
//!
//! 1. **Occurrence table**: every insertion bumps one counter in a fixed
//!    `[0, MAX]` table, O(1)
//! 2. **Sorted run**: a snapshot walks the table once and emits each value
//!    `count` times, an O(n) counting sort with no comparisons
//! 3. **Rank index**: one left-to-right pass over the run records the first
//!    and last rank of every value in `[min, max]`, interpolating gaps
//! 4. **Queries**: `less`, `greater` and `between` are single index lookups
//!
//! Result: O(1) ingestion, O(n + MAX) snapshot, O(1) per query.
//!
//! ## Usage Example
//!
//! ```
//! use tallyrank::Recorder;
//!
//! let mut capture = Recorder::new();
//! for value in [3, 9, 3, 4, 6] {
//!     capture.insert(value)?;
//! }
//! let stats = capture.snapshot()?;
//! assert_eq!(stats.less(4)?, 2);
//! assert_eq!(stats.greater(4)?, 2);
//! assert_eq!(stats.between(3, 6)?, 4);
//! # Ok::<(), tallyrank::CaptureError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod capture; // Occurrence table and recorder
pub mod config; // Construction-time options
pub mod index; // Gap-interpolating rank index
pub mod number; // Dynamically typed numeric arguments
pub mod stats; // Immutable query engine
pub mod validate; // Argument checks shared by every public operation
/// Python bindings for exposing the recorder to external runtimes.
#[cfg(feature = "python-bindings")]
pub mod python_bindings;

// Re-exports for convenience
pub use capture::{OccurrenceTable, Recorder};
pub use config::{CaptureConfig, ConfigError, DEFAULT_MAX_VALUE, MAX_DOMAIN_LIMIT};
pub use index::{IndexError, RankBounds, RankIndex};
pub use number::Number;
pub use stats::Snapshot;

use thiserror::Error;

/// Errors surfaced by insertions, snapshots and queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CaptureError {
    /// Argument is not an integral value.
    #[error("argument '{value}' is not an integral value")]
    InvalidType {
        /// Rendering of the rejected argument.
        value: String,
    },

    /// Insertion outside the recorder's `[0, max]` domain.
    #[error("value {value} is outside the accepted range [0, {max}]")]
    OutOfRange {
        /// Rejected value, as the caller passed it.
        value: Number,
        /// Inclusive upper bound of the domain.
        max: u32,
    },

    /// Snapshot requested before any value was recorded.
    #[error("cannot build statistics from an empty dataset")]
    EmptyDataset,

    /// Rank index construction rejected the sorted run.
    #[error("rank index error: {0}")]
    Index(#[from] IndexError),
}
