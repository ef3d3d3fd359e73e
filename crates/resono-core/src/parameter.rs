//! Parameter descriptor metadata.
//!
//! A [`ParameterDef`] is the immutable, node-type-level description of one
//! tunable control: stable identifier, display name, engine address, default
//! value, closed numeric range, unit tag, and behavioral flags. Descriptors
//! are validated once at definition time and shared read-only by every
//! instance of a node type, which makes them concurrency-safe by
//! construction.
//!
//! # Thread Safety
//!
//! `ParameterDef` is plain immutable data (`Send + Sync`). Mutation after
//! construction is not possible through the public API.

use std::ops::RangeInclusive;

use crate::error::{ParameterError, ParameterResult};
use crate::types::{ParamValue, ParameterAddress};

/// Categorical unit tag for a parameter value.
///
/// Informational only — no numeric conversion or enforcement is tied to the
/// unit; it exists for UIs and hosts that display or group controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterUnit {
    /// Dimensionless value.
    #[default]
    Generic,
    /// Frequency in Hertz.
    Hertz,
    /// Time in seconds.
    Seconds,
    /// Time in milliseconds.
    Milliseconds,
    /// Ratio expressed as 0–1 or 0–100 depending on the control.
    Percent,
    /// Level in decibels.
    Decibels,
}

impl ParameterUnit {
    /// Display label for the unit (empty for generic values).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Generic => "",
            Self::Hertz => "Hz",
            Self::Seconds => "s",
            Self::Milliseconds => "ms",
            Self::Percent => "%",
            Self::Decibels => "dB",
        }
    }
}

/// Flags controlling how a host treats a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterFlags {
    /// Parameter may be written by host automation.
    pub automatable: bool,
    /// Engine accepts timed ramps for this parameter.
    pub rampable: bool,
    /// Parameter is display-only.
    pub readonly: bool,
}

impl Default for ParameterFlags {
    fn default() -> Self {
        Self {
            automatable: true,
            rampable: true,
            readonly: false,
        }
    }
}

/// Metadata describing a single tunable control on a node type.
///
/// Construct with [`ParameterDef::new`], which validates the range and
/// default, then refine with the `with_*` builders:
///
/// ```
/// use resono_core::parameter::{ParameterDef, ParameterUnit};
///
/// let cutoff = ParameterDef::new("cutoff", "Cutoff Frequency", 0x01, 500.0, 12.0..=20_000.0)
///     .unwrap()
///     .with_unit(ParameterUnit::Hertz);
/// assert_eq!(cutoff.clamp(-5.0), 12.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDef {
    identifier: &'static str,
    name: &'static str,
    address: ParameterAddress,
    default_value: ParamValue,
    min: ParamValue,
    max: ParamValue,
    unit: ParameterUnit,
    flags: ParameterFlags,
}

impl ParameterDef {
    /// Define a descriptor with generic unit and default flags.
    ///
    /// Fails with [`ParameterError::InvalidRange`] when the range bounds are
    /// inverted (or not comparable), and with
    /// [`ParameterError::DefaultOutOfRange`] when the default lies outside
    /// the range. Pure: no side effects beyond the returned value.
    pub fn new(
        identifier: &'static str,
        name: &'static str,
        address: ParameterAddress,
        default_value: ParamValue,
        range: RangeInclusive<ParamValue>,
    ) -> ParameterResult<Self> {
        let (min, max) = (*range.start(), *range.end());
        // NaN bounds fail the comparison and land here too.
        if !(min <= max) {
            return Err(ParameterError::InvalidRange { lower: min, upper: max });
        }
        if !(min <= default_value && default_value <= max) {
            return Err(ParameterError::DefaultOutOfRange {
                default: default_value,
                lower: min,
                upper: max,
            });
        }
        Ok(Self {
            identifier,
            name,
            address,
            default_value,
            min,
            max,
            unit: ParameterUnit::Generic,
            flags: ParameterFlags::default(),
        })
    }

    /// Set the unit tag.
    pub const fn with_unit(mut self, unit: ParameterUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Set the behavioral flags.
    pub const fn with_flags(mut self, flags: ParameterFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Short stable string key.
    pub const fn identifier(&self) -> &'static str {
        self.identifier
    }

    /// Human-readable label.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Engine-assigned parameter address.
    pub const fn address(&self) -> ParameterAddress {
        self.address
    }

    /// Default value; always within [`range`](Self::range).
    pub const fn default_value(&self) -> ParamValue {
        self.default_value
    }

    /// Closed valid range.
    pub const fn range(&self) -> RangeInclusive<ParamValue> {
        self.min..=self.max
    }

    /// Lower range bound.
    pub const fn min(&self) -> ParamValue {
        self.min
    }

    /// Upper range bound.
    pub const fn max(&self) -> ParamValue {
        self.max
    }

    /// Unit tag.
    pub const fn unit(&self) -> ParameterUnit {
        self.unit
    }

    /// Behavioral flags.
    pub const fn flags(&self) -> ParameterFlags {
        self.flags
    }

    /// Clamp a value into the descriptor range.
    ///
    /// A NaN input resolves to the default value: real-time callers must
    /// always receive *some* valid value, never a failure.
    pub fn clamp(&self, value: ParamValue) -> ParamValue {
        if value.is_nan() {
            return self.default_value;
        }
        value.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cutoff_def() -> ParameterDef {
        ParameterDef::new("cutoff", "Cutoff Frequency", 7, 500.0, 12.0..=20_000.0)
            .unwrap()
            .with_unit(ParameterUnit::Hertz)
    }

    #[test]
    fn test_valid_descriptor() {
        let def = cutoff_def();
        assert_eq!(def.identifier(), "cutoff");
        assert_eq!(def.name(), "Cutoff Frequency");
        assert_eq!(def.address(), 7);
        assert_eq!(def.default_value(), 500.0);
        assert_eq!(def.range(), 12.0..=20_000.0);
        assert_eq!(def.unit(), ParameterUnit::Hertz);
        assert!(def.flags().automatable);
        assert!(def.flags().rampable);
        assert!(!def.flags().readonly);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = ParameterDef::new("x", "X", 0, 7.0, 10.0..=5.0).unwrap_err();
        assert_eq!(err, ParameterError::InvalidRange { lower: 10.0, upper: 5.0 });
    }

    #[test]
    fn test_default_out_of_range_rejected() {
        let err = ParameterDef::new("x", "X", 0, 5.0, 0.0..=2.0).unwrap_err();
        assert_eq!(
            err,
            ParameterError::DefaultOutOfRange { default: 5.0, lower: 0.0, upper: 2.0 }
        );
    }

    #[test]
    fn test_nan_bounds_rejected() {
        assert!(ParameterDef::new("x", "X", 0, 0.0, f32::NAN..=1.0).is_err());
        assert!(ParameterDef::new("x", "X", 0, 0.0, 0.0..=f32::NAN).is_err());
        assert!(ParameterDef::new("x", "X", 0, f32::NAN, 0.0..=1.0).is_err());
    }

    #[test]
    fn test_degenerate_range_allowed() {
        // A single-point range is still a valid closed interval.
        let def = ParameterDef::new("x", "X", 0, 1.0, 1.0..=1.0).unwrap();
        assert_eq!(def.clamp(42.0), 1.0);
    }

    #[test]
    fn test_clamp() {
        let def = cutoff_def();
        assert_eq!(def.clamp(-5.0), 12.0);
        assert_eq!(def.clamp(99_999.0), 20_000.0);
        assert_eq!(def.clamp(440.0), 440.0);
        assert_eq!(def.clamp(f32::NAN), 500.0);
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(ParameterUnit::Generic.label(), "");
        assert_eq!(ParameterUnit::Hertz.label(), "Hz");
        assert_eq!(ParameterUnit::Seconds.label(), "s");
        assert_eq!(ParameterUnit::Percent.label(), "%");
        assert_eq!(ParameterUnit::Decibels.label(), "dB");
    }
}
