//! Ingestion side: the recorder and its occurrence table.
//!
//! A [`Recorder`] is a single-owner mutable object. Insertions take
//! `&mut self`; callers that ingest from several threads must serialise access
//! themselves (for example behind one `Mutex<Recorder>`).

mod occurrence;

pub use occurrence::OccurrenceTable;

use tracing::{debug, trace};

use crate::index::RankIndex;
use crate::stats::Snapshot;
use crate::validate;
use crate::{CaptureConfig, CaptureError, ConfigError, Number};

/// Accepts bounded integers and produces immutable [`Snapshot`]s.
#[derive(Debug, Clone)]
pub struct Recorder {
    config: CaptureConfig,
    table: OccurrenceTable,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    /// Create a recorder over the default `[0, 1000]` domain.
    pub fn new() -> Self {
        Self::from_checked(CaptureConfig::default())
    }

    /// Create a recorder from an explicit configuration.
    pub fn with_config(config: CaptureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_checked(config))
    }

    /// Create a recorder over `[0, max_value]`.
    pub fn with_max_value(max_value: u32) -> Result<Self, ConfigError> {
        Self::with_config(CaptureConfig::default().with_max_value(max_value))
    }

    fn from_checked(config: CaptureConfig) -> Self {
        debug!(max_value = config.max_value, "allocating occurrence table");
        Self {
            table: OccurrenceTable::new(config.max_value),
            config,
        }
    }

    /// Record one value.
    ///
    /// Fails with [`CaptureError::InvalidType`] for non-integral input and
    /// [`CaptureError::OutOfRange`] outside `[0, max_value]`; a failed call
    /// leaves the table untouched.
    pub fn insert(&mut self, value: impl Into<Number>) -> Result<(), CaptureError> {
        let value = validate::domain_value(value, self.config.max_value)?;
        self.table.increment(value);
        trace!(value, total = self.table.total(), "recorded value");
        Ok(())
    }

    /// Record every value from `values` in order.
    ///
    /// Stops at the first rejected value; values before it stay recorded.
    /// Returns how many values were recorded.
    pub fn extend<I>(&mut self, values: I) -> Result<usize, CaptureError>
    where
        I: IntoIterator,
        I::Item: Into<Number>,
    {
        let mut recorded = 0;
        for value in values {
            self.insert(value)?;
            recorded += 1;
        }
        Ok(recorded)
    }

    /// Occurrences of `value` recorded so far.
    pub fn count(&self, value: u32) -> usize {
        self.table.count(value)
    }

    /// Total number of recorded values.
    pub fn len(&self) -> usize {
        self.table.total()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.table.total() == 0
    }

    /// Inclusive upper bound of the accepted domain.
    pub fn max_value(&self) -> u32 {
        self.config.max_value
    }

    /// Configuration this recorder was built with.
    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Read-only view of the occurrence counters, indexed by value.
    pub fn occurrences(&self) -> &[usize] {
        self.table.as_slice()
    }

    /// Build an immutable query engine from the current state.
    ///
    /// The recorder is not modified and may keep accepting values; later
    /// insertions are not visible to snapshots already taken.
    pub fn snapshot(&self) -> Result<Snapshot, CaptureError> {
        if self.is_empty() {
            return Err(CaptureError::EmptyDataset);
        }

        let sorted = self.table.sorted_run();
        let index = RankIndex::build(&sorted)?;
        debug!(
            len = sorted.len(),
            min = index.min(),
            max = index.max(),
            span = index.span(),
            "built rank index"
        );
        Ok(Snapshot::new(sorted, index))
    }
}
