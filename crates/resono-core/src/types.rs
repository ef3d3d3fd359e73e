//! Core type aliases and small value types shared across the framework.

use std::fmt;

/// Plain parameter value as the native engine consumes it.
pub type ParamValue = f32;

/// Engine-assigned integer locating a parameter within a native processing
/// unit. Opaque to this layer; obtained from the engine, never computed.
pub type ParameterAddress = u64;

/// MIDI timestamp in host clock ticks.
pub type MidiTimeStamp = u64;

/// Single MIDI data byte.
pub type MidiByte = u8;

/// Four-character code identifying which native processing unit a node wraps.
///
/// Component codes are short opaque identifiers assigned by the engine
/// (e.g. `bthp` for a Butterworth high-pass). This layer only carries them
/// for display and engine lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentCode([u8; 4]);

impl ComponentCode {
    /// Create a component code from a four-byte literal, e.g. `b"bthp"`.
    pub const fn new(code: &[u8; 4]) -> Self {
        Self(*code)
    }

    /// Raw bytes of the code.
    pub const fn as_bytes(&self) -> [u8; 4] {
        self.0
    }
}

impl fmt::Display for ComponentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(s) => f.write_str(s),
            Err(_) => write!(f, "{:02x}{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2], self.0[3]),
        }
    }
}
