//! MIDI beat observation contract.
//!
//! [`BeatObserver`] mirrors the MIDI real-time clock stream: 24 clock
//! quanta per quarter note, with an app-level beat every 6 quanta. The six
//! hooks are deliberately narrow — one per granularity — so an implementer
//! overrides only the subset it needs without dispatching on an event tag:
//! a UI beat indicator cares about [`beat_event`] alone, a transport-state
//! display only about [`prepare_play`]/[`stop_transport`].
//!
//! All hooks have empty default bodies and run on the clock-delivery
//! thread; they must return promptly and never perform unbounded work.
//! Stateful observers use interior mutability (atomics) since hooks take
//! `&self`.
//!
//! [`beat_event`]: BeatObserver::beat_event
//! [`prepare_play`]: BeatObserver::prepare_play
//! [`stop_transport`]: BeatObserver::stop_transport

use std::sync::Arc;

use crate::types::{MidiByte, MidiTimeStamp};

/// MIDI clock pulses per quarter note.
pub const QUANTA_PER_QUARTER_NOTE: u64 = 24;

/// MIDI clock pulses per app-defined beat (a beat is not a quarter note).
pub const QUANTA_PER_BEAT: u64 = 6;

/// Capability interface for observing MIDI transport and clock events.
///
/// Override any subset of the hooks; the rest stay no-ops. Equality between
/// registered observers is identity equality over the shared handle (see
/// [`same_observer`]), never structural comparison of behavior.
pub trait BeatObserver: Send + Sync {
    /// A transport start or continue message arrived. Called once, before
    /// the first clock pulse is processed.
    fn prepare_play(&self, continue_playback: bool) {
        let _ = continue_playback;
    }

    /// First clock pulse following a start or continue message.
    fn start_first_beat(&self, continue_playback: bool) {
        let _ = continue_playback;
    }

    /// Transport stop message.
    fn stop_transport(&self) {}

    /// One beat elapsed (every 6 clock quanta).
    fn beat_event(&self, beat: u64) {
        let _ = beat;
    }

    /// Raw clock pulse with full positional context: timestamp,
    /// quarter-note index, beat index, and quantum index.
    fn clock_quantum(&self, time: MidiTimeStamp, quarter_note: MidiByte, beat: u64, quantum: u64) {
        let _ = (time, quarter_note, beat, quantum);
    }

    /// One quarter note elapsed (every 24 clock pulses).
    fn quarter_note_beat(&self, quarter_note: MidiByte) {
        let _ = quarter_note;
    }
}

/// Shared, registerable observer handle.
pub type SharedBeatObserver = Arc<dyn BeatObserver>;

/// Identity comparison between two registered observers.
///
/// Two observers are equal iff they are the same registered instance. The
/// comparison is over the data pointer of the shared allocation; two
/// distinct instances with identical overridden behavior are *not* equal.
pub fn same_observer(a: &SharedBeatObserver, b: &SharedBeatObserver) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;
    impl BeatObserver for Silent {}

    #[test]
    fn test_default_hooks_are_noops() {
        let obs = Silent;
        obs.prepare_play(false);
        obs.start_first_beat(true);
        obs.stop_transport();
        obs.beat_event(3);
        obs.clock_quantum(0, 0, 0, 0);
        obs.quarter_note_beat(1);
    }

    #[test]
    fn test_observer_equal_to_itself() {
        let a: SharedBeatObserver = Arc::new(Silent);
        let a2 = Arc::clone(&a);
        assert!(same_observer(&a, &a2));
    }

    #[test]
    fn test_distinct_observers_with_identical_behavior_not_equal() {
        let a: SharedBeatObserver = Arc::new(Silent);
        let b: SharedBeatObserver = Arc::new(Silent);
        assert!(!same_observer(&a, &b));
    }
}
