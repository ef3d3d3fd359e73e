//! # Resono
//!
//! Binding framework for a native audio DSP engine.
//!
//! Resono exposes a native signal-processing engine through typed parameter
//! metadata and a MIDI beat-observer contract. The engine itself — filters,
//! reverbs, oscillators, rendering, ramp interpolation — is an external
//! collaborator reached through the `DspEngine` trait; this framework owns
//! only the binding surface.
//!
//! ## Architecture
//!
//! ```text
//! Your node type (descriptor list + ParameterSet)
//!        ↓
//! NodeParameter handles (clamp, set, ramp intent)
//!        ↓
//! DspEngine (address-keyed set/ramp, out of scope)
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use resono::prelude::*;
//! use std::sync::Arc;
//!
//! struct HighPass {
//!     params: ParameterSet,
//! }
//!
//! impl HighPass {
//!     fn new(engine: Arc<dyn DspEngine>) -> ParameterResult<Self> {
//!         let defs = vec![
//!             ParameterDef::new("cutoff", "Cutoff Frequency", 0x01, 500.0, 12.0..=20_000.0)?
//!                 .with_unit(ParameterUnit::Hertz),
//!         ];
//!         Ok(Self { params: ParameterSet::from_defs(defs, &engine) })
//!     }
//! }
//!
//! impl HasParameters for HighPass {
//!     fn parameters(&self) -> &ParameterSet {
//!         &self.params
//!     }
//! }
//!
//! let node = HighPass::new(Arc::new(NoEngine)).unwrap();
//! let cutoff = node.parameters().by_identifier("cutoff").unwrap();
//! assert_eq!(cutoff.set(-5.0), 12.0);
//! ```

// Re-export sub-crate
pub use resono_core as core;

/// Prelude module for convenient imports.
///
/// Import everything you need to bind an engine:
/// ```rust,ignore
/// use resono::prelude::*;
/// ```
pub mod prelude {
    pub use resono_core::{
        // Engine boundary
        DspEngine, NoEngine,
        // Errors
        ParameterError, ParameterResult,
        // Parameter model
        HasParameters, NodeParameter, ParameterDef, ParameterFlags, ParameterSet, ParameterUnit,
        // MIDI beat observation
        same_observer, BeatClock, BeatObserver, SharedBeatObserver, QUANTA_PER_BEAT,
        QUANTA_PER_QUARTER_NOTE,
        // Core aliases
        ComponentCode, MidiByte, MidiTimeStamp, ParamValue, ParameterAddress,
    };
}
