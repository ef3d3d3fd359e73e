//! Runtime parameter handles.
//!
//! A [`NodeParameter`] binds one descriptor to a current value and to the
//! engine collaborator. One handle exists per control per node instance;
//! the descriptor behind it is shared by all instances of the node type.
//!
//! # Thread Safety
//!
//! The current value is a bit-cast `f32` in an `AtomicU32` with `Relaxed`
//! ordering, so reads and writes are lock-free and safe from the audio
//! thread. There is no cross-thread ordering guarantee beyond "last write
//! observed eventually"; callers needing stronger guarantees add their own
//! synchronization.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::engine::DspEngine;
use crate::error::{ParameterError, ParameterResult};
use crate::parameter::ParameterDef;
use crate::types::ParamValue;

/// Per-instance handle for one tunable control.
///
/// Writes clamp silently into the descriptor range rather than failing:
/// a live control driven from a real-time callback must never throw
/// mid-render, it must always land on *some* valid value. The clamped value
/// actually stored is returned so hosts can observe the resolution.
pub struct NodeParameter {
    def: Arc<ParameterDef>,
    value: AtomicU32,
    engine: Arc<dyn DspEngine>,
}

impl NodeParameter {
    /// Create a handle initialized to the descriptor's default value.
    pub fn new(def: Arc<ParameterDef>, engine: Arc<dyn DspEngine>) -> Self {
        Self {
            value: AtomicU32::new(def.default_value().to_bits()),
            def,
            engine,
        }
    }

    /// The descriptor this handle is bound to.
    pub fn def(&self) -> &ParameterDef {
        &self.def
    }

    /// Shared descriptor, for constructing sibling handles.
    pub fn def_shared(&self) -> Arc<ParameterDef> {
        Arc::clone(&self.def)
    }

    /// Last-known value. Pure read, no side effects.
    ///
    /// Always within the descriptor range.
    #[inline]
    pub fn value(&self) -> ParamValue {
        f32::from_bits(self.value.load(Ordering::Relaxed))
    }

    /// Set the value instantaneously.
    ///
    /// Clamps into the descriptor range, stores, forwards the clamped value
    /// to the engine at the descriptor's address, and returns what was
    /// actually stored. Non-blocking and bounded-time.
    pub fn set(&self, value: ParamValue) -> ParamValue {
        let clamped = self.def.clamp(value);
        self.value.store(clamped.to_bits(), Ordering::Relaxed);
        self.engine.set_parameter(self.def.address(), clamped);
        clamped
    }

    /// Request a timed linear ramp toward `target`.
    ///
    /// The target is clamped exactly as [`set`](Self::set) clamps. Fails
    /// with [`ParameterError::InvalidDuration`] for negative (or NaN)
    /// durations; zero is a valid instantaneous ramp. The interpolation
    /// itself happens engine-side — this handle only records the ramp
    /// intent, so once the engine reports the ramp complete, [`value`]
    /// reads the clamped target.
    ///
    /// [`value`]: Self::value
    pub fn ramp(&self, target: ParamValue, duration_seconds: f32) -> ParameterResult<ParamValue> {
        if !(duration_seconds >= 0.0) {
            return Err(ParameterError::InvalidDuration { seconds: duration_seconds });
        }
        let clamped = self.def.clamp(target);
        self.engine.ramp_parameter(self.def.address(), clamped, duration_seconds);
        self.value.store(clamped.to_bits(), Ordering::Relaxed);
        Ok(clamped)
    }
}

impl fmt::Debug for NodeParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeParameter")
            .field("identifier", &self.def.identifier())
            .field("value", &self.value())
            .finish_non_exhaustive()
    }
}
