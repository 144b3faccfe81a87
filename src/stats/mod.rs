//! Immutable query engine produced by [`Recorder::snapshot`](crate::Recorder::snapshot).
//!
//! Every query is a bounds check against the run's minimum and maximum followed
//! by at most one rank index lookup, so answering costs O(1) regardless of how
//! many values were recorded or whether the queried value was ever seen.

use crate::index::RankIndex;
use crate::validate;
use crate::{CaptureError, Number};

/// Sorted run plus rank index, answering `less`, `greater` and `between`.
///
/// A snapshot never changes after construction and is `Send + Sync`, so it can
/// be shared read-only across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot {
    sorted: Vec<u32>,
    index: RankIndex,
}

impl Snapshot {
    pub(crate) fn new(sorted: Vec<u32>, index: RankIndex) -> Self {
        Self { sorted, index }
    }

    /// Build a snapshot directly from an ascending run.
    pub fn from_sorted(sorted: Vec<u32>) -> Result<Self, CaptureError> {
        if sorted.is_empty() {
            return Err(CaptureError::EmptyDataset);
        }
        let index = RankIndex::build(&sorted)?;
        Ok(Self::new(sorted, index))
    }

    /// Number of recorded values.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Always `false`; snapshots are never built from an empty dataset.
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Smallest recorded value.
    pub fn min(&self) -> u32 {
        self.index.min()
    }

    /// Largest recorded value.
    pub fn max(&self) -> u32 {
        self.index.max()
    }

    /// All recorded values in ascending order.
    pub fn sorted_values(&self) -> &[u32] {
        &self.sorted
    }

    /// The underlying rank index.
    pub fn rank_index(&self) -> &RankIndex {
        &self.index
    }

    /// Count of recorded values strictly less than `x`.
    pub fn less(&self, x: impl Into<Number>) -> Result<usize, CaptureError> {
        let x = validate::integral(x)?;
        Ok(self.count_below(x))
    }

    /// Count of recorded values strictly greater than `x`.
    pub fn greater(&self, x: impl Into<Number>) -> Result<usize, CaptureError> {
        let x = validate::integral(x)?;
        Ok(self.count_above(x))
    }

    /// Count of recorded values in `[lo, hi]`; reversed bounds are swapped.
    pub fn between(
        &self,
        lo: impl Into<Number>,
        hi: impl Into<Number>,
    ) -> Result<usize, CaptureError> {
        let (lo, hi) = self.checked_range(lo, hi)?;
        Ok(self.len() - self.count_above(hi) - self.count_below(lo))
    }

    /// Occurrences of exactly `x`.
    pub fn count(&self, x: impl Into<Number>) -> Result<usize, CaptureError> {
        let x = validate::integral(x)?;
        Ok(self.index.bounds(x).map_or(0, |bounds| bounds.occurrences()))
    }

    /// Recorded values strictly less than `x`, in ascending order.
    pub fn less_values(&self, x: impl Into<Number>) -> Result<&[u32], CaptureError> {
        let below = self.less(x)?;
        Ok(&self.sorted[..below])
    }

    /// Recorded values strictly greater than `x`, in ascending order.
    pub fn greater_values(&self, x: impl Into<Number>) -> Result<&[u32], CaptureError> {
        let above = self.greater(x)?;
        Ok(&self.sorted[self.len() - above..])
    }

    /// Recorded values in `[lo, hi]`, in ascending order.
    pub fn between_values(
        &self,
        lo: impl Into<Number>,
        hi: impl Into<Number>,
    ) -> Result<&[u32], CaptureError> {
        let (lo, hi) = self.checked_range(lo, hi)?;
        let start = self.count_below(lo);
        let end = self.len() - self.count_above(hi);
        Ok(&self.sorted[start..end])
    }

    /// BLAKE3 digest of the sorted run.
    ///
    /// Two snapshots share a fingerprint exactly when they hold the same
    /// multiset of values.
    pub fn fingerprint(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.sorted.len() as u64).to_le_bytes());
        for value in &self.sorted {
            hasher.update(&value.to_le_bytes());
        }
        hasher.finalize()
    }

    fn checked_range(
        &self,
        lo: impl Into<Number>,
        hi: impl Into<Number>,
    ) -> Result<(i64, i64), CaptureError> {
        let lo = validate::integral(lo);
        let hi = validate::integral(hi);
        let (lo, hi) = (lo?, hi?);
        Ok(if lo > hi { (hi, lo) } else { (lo, hi) })
    }

    fn count_below(&self, x: i64) -> usize {
        match self.index.bounds(x) {
            Some(bounds) => bounds.first,
            None if x < i64::from(self.min()) => 0,
            None => self.len(),
        }
    }

    fn count_above(&self, x: i64) -> usize {
        match self.index.bounds(x) {
            Some(bounds) => self.len() - bounds.last - 1,
            None if x < i64::from(self.min()) => self.len(),
            None => 0,
        }
    }
}
