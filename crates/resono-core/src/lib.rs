//! # resono-core
//!
//! Core abstractions for the Resono engine-binding framework.
//!
//! This crate is engine-agnostic: the signal-processing algorithms live in a
//! native DSP engine reached through the [`DspEngine`] capability trait, and
//! everything here is the metadata and dispatch plumbing a host needs to
//! parameterize that engine and follow its MIDI clock.
//!
//! ## Main Types
//!
//! - [`ParameterDef`] - Immutable per-control metadata (identifier, name,
//!   address, default, range, unit, flags)
//! - [`NodeParameter`] - Lock-free runtime handle binding a descriptor to a
//!   current value and the engine
//! - [`ParameterSet`] - Identifier-to-handle mapping owned by a node instance
//! - [`DspEngine`] - Capability trait for the native engine collaborator
//! - [`BeatObserver`] - Six-hook MIDI beat/clock observation contract
//! - [`BeatClock`] - Transport and clock event dispatcher
//! - [`ParameterError`] - Error types

pub mod engine;
pub mod error;
pub mod handle;
pub mod midi;
pub mod midi_clock;
pub mod parameter;
pub mod params;
pub mod types;

// Re-exports for convenience
pub use engine::{DspEngine, NoEngine};
pub use error::{ParameterError, ParameterResult};
pub use handle::NodeParameter;
pub use midi::{
    same_observer, BeatObserver, SharedBeatObserver, QUANTA_PER_BEAT, QUANTA_PER_QUARTER_NOTE,
};
pub use midi_clock::BeatClock;
pub use parameter::{ParameterDef, ParameterFlags, ParameterUnit};
pub use params::{HasParameters, ParameterSet};
pub use types::{ComponentCode, MidiByte, MidiTimeStamp, ParamValue, ParameterAddress};
