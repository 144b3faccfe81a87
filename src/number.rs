//! Numeric arguments accepted by insertions and queries.
//!
//! Callers at dynamic boundaries (CLI text, Python objects) can hand over
//! values that are not whole numbers. [`Number`] carries either kind so the
//! integral check happens inside the library rather than at every call site.

use std::fmt;
use std::str::FromStr;

use crate::CaptureError;

/// An integer or floating-point argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Integral value.
    Int(i64),
    /// Floating-point value; integral only when finite with no fractional part.
    Float(f64),
}

impl Number {
    /// Return the integral value, or `None` when the number has a fractional
    /// component or is not finite.
    ///
    /// Whole floats beyond the `i64` range saturate, which keeps them outside
    /// every recorder domain.
    pub fn as_integral(self) -> Option<i64> {
        match self {
            Number::Int(value) => Some(value),
            Number::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                Some(value as i64)
            }
            Number::Float(_) => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{value}"),
            Number::Float(value) => write!(f, "{value:?}"),
        }
    }
}

macro_rules! number_from_lossless {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Int(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! number_from_saturating {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Int(i64::try_from(value).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

number_from_lossless!(i8, i16, i32, i64, u8, u16, u32);
number_from_saturating!(u64, usize);

impl From<isize> for Number {
    fn from(value: isize) -> Self {
        Number::Int(value as i64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl FromStr for Number {
    type Err = CaptureError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(Number::Int(value));
        }
        trimmed
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|_| CaptureError::InvalidType {
                value: trimmed.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_floats_are_integral() {
        assert_eq!(Number::from(3.0).as_integral(), Some(3));
        assert_eq!(Number::from(-2.0f32).as_integral(), Some(-2));
        assert_eq!(Number::from(3.1).as_integral(), None);
        assert_eq!(Number::from(f64::NAN).as_integral(), None);
        assert_eq!(Number::from(f64::INFINITY).as_integral(), None);
    }

    #[test]
    fn huge_unsigned_values_saturate() {
        assert_eq!(Number::from(u64::MAX), Number::Int(i64::MAX));
        assert_eq!(Number::from(7usize), Number::Int(7));
    }

    #[test]
    fn parses_text_arguments() {
        assert_eq!("42".parse::<Number>().unwrap(), Number::Int(42));
        assert_eq!(" -1 ".parse::<Number>().unwrap(), Number::Int(-1));
        assert_eq!("3.1".parse::<Number>().unwrap(), Number::Float(3.1));
        assert_eq!(
            "seven".parse::<Number>(),
            Err(CaptureError::InvalidType {
                value: "seven".to_string()
            })
        );
    }

    #[test]
    fn display_keeps_float_marker() {
        assert_eq!(Number::Int(4).to_string(), "4");
        assert_eq!(Number::Float(3.0).to_string(), "3.0");
        assert_eq!(Number::Float(3.1).to_string(), "3.1");
    }
}
