//! Capability interface to the native DSP engine.
//!
//! The engine owns the signal chain: it instantiates processing units,
//! renders audio, and performs the time-domain interpolation for ramps.
//! This layer reaches it exclusively through address-keyed set/ramp calls
//! and never inspects its internal state.

use crate::types::{ParamValue, ParameterAddress};

/// Boundary trait for the native DSP/audio-unit collaborator.
///
/// Implementations are invoked from time-critical callbacks and must be
/// non-blocking and bounded-time: no locks that can be contended by
/// non-real-time threads, no allocation, no I/O.
pub trait DspEngine: Send + Sync {
    /// Apply a value to the parameter at `address` immediately.
    fn set_parameter(&self, address: ParameterAddress, value: ParamValue);

    /// Begin a linear ramp of the parameter at `address` toward `target`
    /// over `duration_seconds`.
    ///
    /// A zero duration is a valid instantaneous ramp. Ramps carry no
    /// cancellation primitive: a ramp completes or is superseded by a later
    /// set/ramp on the same address.
    fn ramp_parameter(&self, address: ParameterAddress, target: ParamValue, duration_seconds: f32);

    /// Look up the engine-assigned address for a parameter identifier.
    ///
    /// Addresses are opaque to this layer. The default implementation
    /// returns `None` for engines without a lookup table.
    fn parameter_address(&self, identifier: &str) -> Option<ParameterAddress> {
        let _ = identifier;
        None
    }
}

/// Engine stub for tests and hosts without a native engine attached.
///
/// All calls are no-ops; parameter handles still clamp and record values
/// locally, so the binding layer behaves identically.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEngine;

impl DspEngine for NoEngine {
    fn set_parameter(&self, _address: ParameterAddress, _value: ParamValue) {}

    fn ramp_parameter(&self, _address: ParameterAddress, _target: ParamValue, _duration_seconds: f32) {}
}
