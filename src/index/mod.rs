//! Rank index over a sorted run.
//!
//! For every integer `v` between the smallest and largest value of the run the
//! index stores the 0-based rank of `v`'s first and last occurrence. Values that
//! never occur inherit the boundaries of the gap they fall in:
//!
//! ```text
//! run:    [3, 3, 4, 6, 9]
//! value:   3     4     5     6     7     8     9
//! first:   0     2     3     3     4     4     4
//! last:    1     2     2     3     3     3     4
//! ```
//!
//! so `first` is always the number of elements strictly below `v` and
//! `len - last - 1` the number strictly above it.

use thiserror::Error;

use crate::MAX_DOMAIN_LIMIT;

/// Error type returned by rank index construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The run had no elements, so it has no minimum or maximum.
    #[error("sorted run must be non-empty")]
    EmptyRun,

    /// The run was not in non-decreasing order.
    #[error("value {value} at position {position} is smaller than its predecessor {previous}")]
    Unsorted {
        /// Position of the offending element.
        position: usize,
        /// The offending element.
        value: u32,
        /// Element preceding it.
        previous: u32,
    },

    /// `[min, max]` covers more integers than any recorder domain can hold.
    #[error("run spans {span} values, more than the limit of {limit}")]
    SpanTooLarge {
        /// Number of integers in `[min, max]`.
        span: u64,
        /// Largest accepted span, `MAX_DOMAIN_LIMIT + 1`.
        limit: u64,
    },
}

/// First and last rank of one value in the sorted run.
///
/// For a value that does not occur, `first == last + 1`: the pair describes the
/// empty gap between its recorded neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RankBounds {
    /// Rank of the first occurrence; equals the count of smaller elements.
    pub first: usize,
    /// Rank of the last occurrence.
    pub last: usize,
}

impl RankBounds {
    /// Number of occurrences these bounds cover.
    pub fn occurrences(&self) -> usize {
        (self.last + 1).saturating_sub(self.first)
    }

    /// Whether the value occurs at least once.
    pub fn is_recorded(&self) -> bool {
        self.first <= self.last
    }
}

/// Per-value rank boundaries for every integer in `[min, max]` of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RankIndex {
    min: u32,
    bounds: Vec<RankBounds>,
}

impl RankIndex {
    /// Build the index with a single left-to-right pass over `sorted`.
    ///
    /// Cost is O(len + (max - min)); no element is visited twice. Runs spanning
    /// more than `MAX_DOMAIN_LIMIT + 1` integers are rejected before anything is
    /// allocated.
    pub fn build(sorted: &[u32]) -> Result<Self, IndexError> {
        let (&min, &last_value) = match (sorted.first(), sorted.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(IndexError::EmptyRun),
        };

        let span = u64::from(last_value.saturating_sub(min)) + 1;
        let limit = u64::from(MAX_DOMAIN_LIMIT) + 1;
        if span > limit {
            return Err(IndexError::SpanTooLarge { span, limit });
        }

        let mut bounds = Vec::with_capacity(span as usize);
        let mut current = min;
        let mut first = 0;

        for (rank, &value) in sorted.iter().enumerate().skip(1) {
            if value == current {
                continue;
            }
            if value < current {
                return Err(IndexError::Unsorted {
                    position: rank,
                    value,
                    previous: current,
                });
            }

            bounds.push(RankBounds {
                first,
                last: rank - 1,
            });
            let gap = RankBounds {
                first: rank,
                last: rank - 1,
            };
            bounds.extend(std::iter::repeat(gap).take((value - current - 1) as usize));

            current = value;
            first = rank;
        }

        bounds.push(RankBounds {
            first,
            last: sorted.len() - 1,
        });

        Ok(Self { min, bounds })
    }

    /// Smallest value of the run.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Largest value of the run.
    pub fn max(&self) -> u32 {
        self.min + (self.bounds.len() - 1) as u32
    }

    /// Number of integers covered, `max - min + 1`.
    pub fn span(&self) -> usize {
        self.bounds.len()
    }

    /// Bounds for `value`, or `None` when it lies outside `[min, max]`.
    #[inline]
    pub fn bounds(&self, value: i64) -> Option<RankBounds> {
        let offset = value.checked_sub(i64::from(self.min))?;
        let offset = usize::try_from(offset).ok()?;
        self.bounds.get(offset).copied()
    }

    /// Iterate `(value, bounds)` pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, RankBounds)> + '_ {
        self.bounds
            .iter()
            .enumerate()
            .map(move |(offset, bounds)| (self.min + offset as u32, *bounds))
    }
}
