//! Argument validation shared by every public operation.
//!
//! Checks run in a fixed order: the integral check first, then the domain
//! check. Nothing is mutated until both pass.

use crate::{CaptureError, Number};

/// Require `value` to be integral.
pub fn integral(value: impl Into<Number>) -> Result<i64, CaptureError> {
    let number = value.into();
    number.as_integral().ok_or_else(|| CaptureError::InvalidType {
        value: number.to_string(),
    })
}

/// Narrow `value` to a table slot when it lies in `[0, max]`.
pub fn in_domain(value: i64, max: u32) -> Option<u32> {
    u32::try_from(value).ok().filter(|&v| v <= max)
}

/// Run both checks in order.
///
/// A range failure reports the argument as given, so a whole float beyond the
/// `i64` range keeps its own rendering instead of the saturated integer.
pub fn domain_value(value: impl Into<Number>, max: u32) -> Result<u32, CaptureError> {
    let number = value.into();
    in_domain(integral(number)?, max).ok_or(CaptureError::OutOfRange { value: number, max })
}
