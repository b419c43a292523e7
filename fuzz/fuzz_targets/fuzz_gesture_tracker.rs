//! Fuzz target: `GestureTracker::update`
//!
//! Each input byte is one run of samples: the top bit is the pin level,
//! the low seven bits the run length in milliseconds (scaled by 8). The
//! first four bytes pick the starting clock value so wraparound is covered.
//!
//! Invariants checked:
//! - No panics under any sample sequence
//! - Every emitted code is one of the seven legal gesture codes
//! - `NONE` is only emitted right after a long gesture
//! - After a long enough idle run the tracker is back in `Idle`
//!
//! cargo fuzz run fuzz_gesture_tracker

#![no_main]

use button_gestures::{GestureCode, GestureTracker, TimingConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let (start, runs) = data.split_at(4);
    let mut now = u32::from_le_bytes([start[0], start[1], start[2], start[3]]);

    let timing = TimingConfig::default();
    let mut tracker = GestureTracker::new(timing);
    let mut last = GestureCode::NONE;

    for &run in runs {
        let active = run & 0x80 != 0;
        let len = u32::from(run & 0x7F) * 8;
        for _ in 0..len {
            if let Some(code) = tracker.update(now, active) {
                assert!(code.is_valid(), "illegal gesture {code}");
                if code.is_none() {
                    assert!(last.is_long(), "NONE emitted without a preceding long press");
                }
                last = code;
            }
            now = now.wrapping_add(1);
        }
    }

    // Idle for longer than any window: every sequence must resolve.
    for _ in 0..timing.worst_case_ms() {
        if let Some(code) = tracker.update(now, false) {
            assert!(code.is_valid(), "illegal gesture {code}");
        }
        now = now.wrapping_add(1);
    }
    assert!(tracker.is_idle(), "tracker stuck after idle period");
});
