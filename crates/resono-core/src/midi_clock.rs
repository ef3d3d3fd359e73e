//! MIDI clock dispatch to registered beat observers.
//!
//! [`BeatClock`] owns the registered observers and turns the raw transport/
//! clock signal stream into the six [`BeatObserver`](crate::midi::BeatObserver)
//! notifications. Position
//! indices all derive from a single pulse counter: the beat index is
//! `quantum / 6` and the quarter-note index `quantum / 24`.
//!
//! Dispatch requires `&mut self`, so hooks for a given observer are
//! delivered in strictly increasing time order on one logical sequence —
//! there is no interleaving or reordering to guard against.

use crate::midi::{
    same_observer, SharedBeatObserver, QUANTA_PER_BEAT, QUANTA_PER_QUARTER_NOTE,
};
use crate::types::{MidiByte, MidiTimeStamp};

/// Transport and clock event dispatcher.
///
/// Hooks fire in this order within one pulse: `start_first_beat` (first
/// pulse after start only), then `clock_quantum`, then `beat_event` (every
/// 6th quantum), then `quarter_note_beat` (every 24th quantum). A span of
/// 24 pulses therefore delivers 24 quantum, 4 beat, and 1 quarter-note
/// notifications.
#[derive(Default)]
pub struct BeatClock {
    observers: Vec<SharedBeatObserver>,
    quantum: u64,
    running: bool,
    awaiting_first_pulse: bool,
    continue_playback: bool,
}

impl BeatClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    ///
    /// Duplicate registrations of the same instance are ignored (identity
    /// comparison); the observer will be notified once per event.
    pub fn add_observer(&mut self, observer: SharedBeatObserver) {
        if self.observers.iter().any(|o| same_observer(o, &observer)) {
            log::debug!("beat observer already registered, ignoring duplicate");
            return;
        }
        self.observers.push(observer);
    }

    /// Remove a previously registered observer (identity comparison).
    ///
    /// Unknown observers are ignored.
    pub fn remove_observer(&mut self, observer: &SharedBeatObserver) {
        self.observers.retain(|o| !same_observer(o, observer));
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Whether the transport is between a start/continue and a stop.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current pulse position (quanta since the last fresh start).
    pub fn quantum(&self) -> u64 {
        self.quantum
    }

    /// Transport start (`continue_playback == false`) or continue (`true`).
    ///
    /// Notifies `prepare_play` on every observer and arms the first-beat
    /// notification for the next pulse. A fresh start rewinds the pulse
    /// counter; a continue resumes where [`stop`](Self::stop) left off.
    pub fn start(&mut self, continue_playback: bool) {
        if !continue_playback {
            self.quantum = 0;
        }
        self.running = true;
        self.awaiting_first_pulse = true;
        self.continue_playback = continue_playback;
        log::debug!(
            "transport {} at quantum {}",
            if continue_playback { "continue" } else { "start" },
            self.quantum
        );
        for observer in &self.observers {
            observer.prepare_play(continue_playback);
        }
    }

    /// Transport stop.
    ///
    /// Notifies `stop_transport` and halts pulse dispatch; the pulse counter
    /// is kept so a later continue resumes the sequence. Repeated stop
    /// messages are forwarded, not absorbed.
    pub fn stop(&mut self) {
        self.running = false;
        log::debug!("transport stop at quantum {}", self.quantum);
        for observer in &self.observers {
            observer.stop_transport();
        }
    }

    /// Process one raw MIDI clock pulse at `time`.
    ///
    /// Ignored while the transport is stopped.
    pub fn pulse(&mut self, time: MidiTimeStamp) {
        if !self.running {
            return;
        }
        if self.awaiting_first_pulse {
            self.awaiting_first_pulse = false;
            for observer in &self.observers {
                observer.start_first_beat(self.continue_playback);
            }
        }

        let quantum = self.quantum;
        let beat = quantum / QUANTA_PER_BEAT;
        // Quarter-note index travels as a MIDI byte and wraps at 256.
        let quarter_note = ((quantum / QUANTA_PER_QUARTER_NOTE) & 0xFF) as MidiByte;

        for observer in &self.observers {
            observer.clock_quantum(time, quarter_note, beat, quantum);
        }
        if quantum % QUANTA_PER_BEAT == 0 {
            for observer in &self.observers {
                observer.beat_event(beat);
            }
        }
        if quantum % QUANTA_PER_QUARTER_NOTE == 0 {
            for observer in &self.observers {
                observer.quarter_note_beat(quarter_note);
            }
        }

        self.quantum = self.quantum.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::midi::BeatObserver;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex};

    /// Counts every notification and records positional context.
    #[derive(Default)]
    struct Counter {
        prepares: AtomicU64,
        first_beats: AtomicU64,
        stops: AtomicU64,
        beats: Mutex<Vec<u64>>,
        quanta: Mutex<Vec<(MidiTimeStamp, MidiByte, u64, u64)>>,
        quarter_notes: Mutex<Vec<MidiByte>>,
    }

    impl BeatObserver for Counter {
        fn prepare_play(&self, _continue_playback: bool) {
            self.prepares.fetch_add(1, Ordering::Relaxed);
        }

        fn start_first_beat(&self, _continue_playback: bool) {
            self.first_beats.fetch_add(1, Ordering::Relaxed);
        }

        fn stop_transport(&self) {
            self.stops.fetch_add(1, Ordering::Relaxed);
        }

        fn beat_event(&self, beat: u64) {
            self.beats.lock().unwrap().push(beat);
        }

        fn clock_quantum(&self, time: MidiTimeStamp, quarter_note: MidiByte, beat: u64, quantum: u64) {
            self.quanta.lock().unwrap().push((time, quarter_note, beat, quantum));
        }

        fn quarter_note_beat(&self, quarter_note: MidiByte) {
            self.quarter_notes.lock().unwrap().push(quarter_note);
        }
    }

    fn run_pulses(clock: &mut BeatClock, n: u64) {
        for t in 0..n {
            clock.pulse(t);
        }
    }

    #[test]
    fn test_quarter_note_span_dispatch_counts() {
        let counter = Arc::new(Counter::default());
        let mut clock = BeatClock::new();
        clock.add_observer(Arc::clone(&counter) as SharedBeatObserver);

        clock.start(false);
        run_pulses(&mut clock, 24);

        assert_eq!(counter.prepares.load(Ordering::Relaxed), 1);
        assert_eq!(counter.first_beats.load(Ordering::Relaxed), 1);
        assert_eq!(counter.quanta.lock().unwrap().len(), 24);
        assert_eq!(counter.beats.lock().unwrap().as_slice(), &[0, 1, 2, 3]);
        assert_eq!(counter.quarter_notes.lock().unwrap().as_slice(), &[0]);
    }

    #[test]
    fn test_quantum_context_indices_match() {
        let counter = Arc::new(Counter::default());
        let mut clock = BeatClock::new();
        clock.add_observer(Arc::clone(&counter) as SharedBeatObserver);

        clock.start(false);
        run_pulses(&mut clock, 50);

        let quanta = counter.quanta.lock().unwrap();
        assert_eq!(quanta.len(), 50);
        for (i, &(time, quarter_note, beat, quantum)) in quanta.iter().enumerate() {
            let i = i as u64;
            assert_eq!(time, i);
            assert_eq!(quantum, i);
            assert_eq!(beat, i / 6);
            assert_eq!(quarter_note as u64, i / 24);
        }
    }

    #[test]
    fn test_second_quarter_note_carries_incremented_index() {
        let counter = Arc::new(Counter::default());
        let mut clock = BeatClock::new();
        clock.add_observer(Arc::clone(&counter) as SharedBeatObserver);

        clock.start(false);
        run_pulses(&mut clock, 49);

        assert_eq!(counter.quarter_notes.lock().unwrap().as_slice(), &[0, 1, 2]);
        assert_eq!(counter.beats.lock().unwrap().len(), 9); // quanta 0,6,...,48
    }

    #[test]
    fn test_no_pulses_delivered_before_start_or_after_stop() {
        let counter = Arc::new(Counter::default());
        let mut clock = BeatClock::new();
        clock.add_observer(Arc::clone(&counter) as SharedBeatObserver);

        clock.pulse(0);
        assert!(counter.quanta.lock().unwrap().is_empty());

        clock.start(false);
        run_pulses(&mut clock, 3);
        clock.stop();
        clock.pulse(99);

        assert_eq!(counter.stops.load(Ordering::Relaxed), 1);
        assert_eq!(counter.quanta.lock().unwrap().len(), 3);
    }

    #[test]
    fn test_continue_resumes_sequence() {
        let counter = Arc::new(Counter::default());
        let mut clock = BeatClock::new();
        clock.add_observer(Arc::clone(&counter) as SharedBeatObserver);

        clock.start(false);
        run_pulses(&mut clock, 10);
        clock.stop();
        clock.start(true);
        clock.pulse(10);

        // Continue does not rewind: next quantum index is 10.
        let quanta = counter.quanta.lock().unwrap();
        assert_eq!(quanta.last().unwrap().3, 10);
        // Both the start and the continue announced themselves.
        assert_eq!(counter.prepares.load(Ordering::Relaxed), 2);
        assert_eq!(counter.first_beats.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_fresh_start_rewinds_sequence() {
        let counter = Arc::new(Counter::default());
        let mut clock = BeatClock::new();
        clock.add_observer(Arc::clone(&counter) as SharedBeatObserver);

        clock.start(false);
        run_pulses(&mut clock, 10);
        clock.stop();
        clock.start(false);
        clock.pulse(0);

        assert_eq!(counter.quanta.lock().unwrap().last().unwrap().3, 0);
    }

    #[test]
    fn test_duplicate_registration_ignored() {
        let counter = Arc::new(Counter::default());
        let shared = Arc::clone(&counter) as SharedBeatObserver;
        let mut clock = BeatClock::new();
        clock.add_observer(Arc::clone(&shared));
        clock.add_observer(shared);
        assert_eq!(clock.observer_count(), 1);

        clock.start(false);
        clock.pulse(0);
        assert_eq!(counter.quanta.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_observer_by_identity() {
        let a = Arc::new(Counter::default());
        let b = Arc::new(Counter::default());
        let shared_a = Arc::clone(&a) as SharedBeatObserver;
        let shared_b = Arc::clone(&b) as SharedBeatObserver;

        let mut clock = BeatClock::new();
        clock.add_observer(Arc::clone(&shared_a));
        clock.add_observer(Arc::clone(&shared_b));
        clock.remove_observer(&shared_a);
        assert_eq!(clock.observer_count(), 1);

        clock.start(false);
        clock.pulse(0);
        assert!(a.quanta.lock().unwrap().is_empty());
        assert_eq!(b.quanta.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_repeated_stop_messages_forwarded() {
        let counter = Arc::new(Counter::default());
        let mut clock = BeatClock::new();
        clock.add_observer(Arc::clone(&counter) as SharedBeatObserver);

        clock.stop();
        clock.stop();
        assert_eq!(counter.stops.load(Ordering::Relaxed), 2);
    }
}
