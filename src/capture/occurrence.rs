/// Fixed-size counter table indexed by value.
///
/// Counter `v` equals the number of times `v` was recorded. The table length is
/// fixed at construction and counters only ever grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceTable {
    counts: Vec<usize>,
    total: usize,
}

impl OccurrenceTable {
    /// Allocate a zeroed table covering `[0, max_value]`.
    pub fn new(max_value: u32) -> Self {
        Self {
            counts: vec![0; max_value as usize + 1],
            total: 0,
        }
    }

    /// Record one occurrence of `value`.
    ///
    /// # Panics
    /// Panics if `value` lies outside the table; callers validate first.
    pub fn increment(&mut self, value: u32) {
        self.counts[value as usize] += 1;
        self.total += 1;
    }

    /// Occurrences of `value` (0 outside the table).
    pub fn count(&self, value: u32) -> usize {
        self.counts.get(value as usize).copied().unwrap_or(0)
    }

    /// Sum of all counters.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Read-only view of the counters.
    pub fn as_slice(&self) -> &[usize] {
        &self.counts
    }

    /// Expand the table into an ascending run with duplicates.
    ///
    /// Walks the counters once in index order, so the output is sorted without
    /// any comparisons.
    pub fn sorted_run(&self) -> Vec<u32> {
        let mut run = Vec::with_capacity(self.total);
        for (value, &count) in self.counts.iter().enumerate() {
            if count != 0 {
                run.extend(std::iter::repeat(value as u32).take(count));
            }
        }
        run
    }
}
