//! Error types for parameter configuration.

use std::fmt;

use crate::types::ParamValue;

/// Errors raised while defining parameter descriptors or requesting ramps.
///
/// All variants are deterministic input errors surfaced at construction or
/// call time; nothing here is ever raised mid-render. Out-of-range value
/// writes are not errors at all — they clamp silently (see
/// [`NodeParameter::set`](crate::handle::NodeParameter::set)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterError {
    /// Descriptor range has inverted bounds.
    InvalidRange {
        lower: ParamValue,
        upper: ParamValue,
    },
    /// Descriptor default value lies outside its range.
    DefaultOutOfRange {
        default: ParamValue,
        lower: ParamValue,
        upper: ParamValue,
    },
    /// Ramp requested with a negative (or NaN) duration.
    InvalidDuration { seconds: f32 },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { lower, upper } => {
                write!(f, "invalid parameter range: lower bound {} exceeds upper bound {}", lower, upper)
            }
            Self::DefaultOutOfRange { default, lower, upper } => {
                write!(f, "default value {} outside parameter range [{}, {}]", default, lower, upper)
            }
            Self::InvalidDuration { seconds } => {
                write!(f, "invalid ramp duration: {} seconds", seconds)
            }
        }
    }
}

impl std::error::Error for ParameterError {}

/// Result type for parameter operations.
pub type ParameterResult<T> = Result<T, ParameterError>;
