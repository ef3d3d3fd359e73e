//! Resono beat-monitor demo - observing a simulated MIDI clock.
//!
//! A `BeatObserver` overrides only the hooks it cares about; this monitor
//! tracks beats and quarter notes and ignores raw quanta. Counters are
//! atomics because hooks take `&self` and run on the clock-delivery thread.

use resono::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct BeatMonitor {
    beats: AtomicU64,
    quarter_notes: AtomicU64,
}

impl BeatObserver for BeatMonitor {
    fn prepare_play(&self, continue_playback: bool) {
        println!("transport: {}", if continue_playback { "continue" } else { "start" });
    }

    fn beat_event(&self, beat: u64) {
        self.beats.fetch_add(1, Ordering::Relaxed);
        println!("beat {beat}");
    }

    fn quarter_note_beat(&self, quarter_note: MidiByte) {
        self.quarter_notes.fetch_add(1, Ordering::Relaxed);
        println!("quarter note {quarter_note}");
    }

    fn stop_transport(&self) {
        println!("transport: stop");
    }
}

fn main() {
    let monitor = Arc::new(BeatMonitor::default());
    let mut clock = BeatClock::new();
    clock.add_observer(Arc::clone(&monitor) as SharedBeatObserver);

    // Two quarter notes of simulated clock pulses.
    clock.start(false);
    for time in 0..(2 * QUANTA_PER_QUARTER_NOTE) {
        clock.pulse(time);
    }
    clock.stop();

    println!(
        "saw {} beats, {} quarter notes",
        monitor.beats.load(Ordering::Relaxed),
        monitor.quarter_notes.load(Ordering::Relaxed),
    );
}
