//! Construction-time configuration for a [`Recorder`](crate::Recorder).
//!
//! The value domain is fixed once a recorder exists: the lower bound is
//! always 0 and the inclusive upper bound is [`CaptureConfig::max_value`].

use thiserror::Error;

/// Inclusive upper bound used when no explicit domain is configured.
pub const DEFAULT_MAX_VALUE: u32 = 1000;

/// Largest accepted `max_value`; keeps the occurrence table allocation bounded.
pub const MAX_DOMAIN_LIMIT: u32 = 1 << 24;

/// Errors raised while validating a [`CaptureConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Requested domain would need an oversized occurrence table.
    #[error("max value {requested} exceeds the domain limit {limit}")]
    DomainTooLarge {
        /// Requested inclusive upper bound.
        requested: u32,
        /// Largest supported upper bound.
        limit: u32,
    },
}

/// Configuration parameters for a recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaptureConfig {
    /// Inclusive upper bound of the accepted value domain.
    pub max_value: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            max_value: DEFAULT_MAX_VALUE,
        }
    }
}

impl CaptureConfig {
    /// Replace the inclusive upper bound.
    pub fn with_max_value(mut self, max_value: u32) -> Self {
        self.max_value = max_value;
        self
    }

    /// Number of counters the occurrence table needs (`max_value + 1`).
    pub fn domain_len(&self) -> usize {
        self.max_value as usize + 1
    }

    /// Check the configuration before any table is allocated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_value > MAX_DOMAIN_LIMIT {
            return Err(ConfigError::DomainTooLarge {
                requested: self.max_value,
                limit: MAX_DOMAIN_LIMIT,
            });
        }
        Ok(())
    }
}
