//! Blocking `poll()` against scripted press sequences.

use button_gestures::{ButtonConfig, ButtonGestures, GestureCode, InputMode, Polarity};

use super::mock_hw::{Script, SimClock, SimPin, Timeline, record, take_calls};
use std::rc::Rc;

const PIN: u8 = 4;

fn button(script: Script) -> (Rc<Timeline>, ButtonGestures<SimPin, SimClock>) {
    let (timeline, pin, clock) = script.build(Polarity::ActiveHigh);
    let btn = ButtonGestures::new(ButtonConfig::new(PIN), pin, clock).unwrap();
    (timeline, btn)
}

/// Poll until a gesture is reported or the script clock passes `until_ms`.
fn next_gesture(timeline: &Timeline, btn: &mut ButtonGestures<SimPin, SimClock>, until_ms: u32) -> GestureCode {
    while timeline.elapsed() < until_ms {
        let code = btn.poll();
        if !code.is_none() {
            return code;
        }
    }
    GestureCode::NONE
}

fn with_all_handlers(btn: &mut ButtonGestures<SimPin, SimClock>) {
    for code in GestureCode::ACTIONABLE {
        assert!(btn.register_handler(code, record));
    }
    take_calls();
}

#[test]
fn construction_configures_pin_once() {
    let (timeline, _btn) = button(Script::new());
    assert_eq!(timeline.configured(), vec![(PIN, InputMode::Floating)]);
}

#[test]
fn idle_poll_is_none_and_silent() {
    let (_t, mut btn) = button(Script::new());
    with_all_handlers(&mut btn);
    for _ in 0..100 {
        assert_eq!(btn.poll(), GestureCode::NONE);
    }
    assert!(take_calls().is_empty());
}

#[test]
fn blip_shorter_than_debounce_is_ignored() {
    let (_t, mut btn) = button(Script::new().press(20));
    assert_eq!(btn.poll(), GestureCode::NONE);
    assert_eq!(btn.poll(), GestureCode::NONE);
}

#[test]
fn single_short() {
    let (timeline, mut btn) = button(Script::new().press(100));
    with_all_handlers(&mut btn);
    assert_eq!(btn.poll(), GestureCode::SINGLE_SHORT);
    // Resolution waited out the multi-tap window after the release.
    assert!(timeline.elapsed() >= 100 + 252);
    assert_eq!(take_calls(), vec![(PIN, GestureCode::SINGLE_SHORT.bits())]);
    assert_eq!(btn.poll(), GestureCode::NONE);
}

#[test]
fn single_long_held_then_released() {
    let (_t, mut btn) = button(Script::new().press(2_000));
    with_all_handlers(&mut btn);

    assert_eq!(btn.poll(), GestureCode::SINGLE_LONG);
    // Still held: continuation, not a new gesture.
    assert_eq!(btn.poll(), GestureCode::SINGLE_LONG);
    // Tail of the hold is released before another long threshold.
    assert_eq!(btn.poll(), GestureCode::NONE);
    assert_eq!(btn.last_gesture(), GestureCode::NONE);
    assert_eq!(btn.poll(), GestureCode::NONE);

    let long = GestureCode::SINGLE_LONG.bits();
    assert_eq!(take_calls(), vec![(PIN, long), (PIN, long)]);
}

#[test]
fn double_short() {
    let (_t, mut btn) = button(Script::new().press(100).release(100).press(100));
    assert_eq!(btn.poll(), GestureCode::DOUBLE_SHORT);
    assert_eq!(btn.poll(), GestureCode::NONE);
}

#[test]
fn double_long_keeps_tap_count_while_held() {
    let (_t, mut btn) = button(Script::new().press(100).release(100).press(2_300));
    assert_eq!(btn.poll(), GestureCode::DOUBLE_LONG);
    assert_eq!(btn.poll(), GestureCode::DOUBLE_LONG);

    let mut released = false;
    for _ in 0..4 {
        match btn.poll() {
            GestureCode::NONE => {
                released = true;
                break;
            }
            code => assert_eq!(code, GestureCode::DOUBLE_LONG),
        }
    }
    assert!(released, "release after a long press must report NONE");
}

#[test]
fn triple_short_resolves_without_gap_wait() {
    let (timeline, mut btn) = button(
        Script::new()
            .press(100)
            .release(100)
            .press(100)
            .release(100)
            .press(100),
    );
    assert_eq!(btn.poll(), GestureCode::TRIPLE_SHORT);
    assert!(timeline.elapsed() < 500 + 50);
}

#[test]
fn triple_long() {
    let (_t, mut btn) = button(
        Script::new()
            .press(100)
            .release(100)
            .press(100)
            .release(100)
            .press(1_500),
    );
    assert_eq!(btn.poll(), GestureCode::TRIPLE_LONG);
}

#[test]
fn fourth_tap_starts_a_new_gesture() {
    let (timeline, mut btn) = button(
        Script::new()
            .press(100)
            .release(100)
            .press(100)
            .release(100)
            .press(100)
            .release(100)
            .press(100),
    );
    assert_eq!(btn.poll(), GestureCode::TRIPLE_SHORT);
    assert_eq!(next_gesture(&timeline, &mut btn, 2_000), GestureCode::SINGLE_SHORT);
}

#[test]
fn gap_longer_than_window_splits_taps() {
    let (timeline, mut btn) = button(Script::new().press(100).release(400).press(100));
    assert_eq!(btn.poll(), GestureCode::SINGLE_SHORT);
    assert_eq!(next_gesture(&timeline, &mut btn, 2_000), GestureCode::SINGLE_SHORT);
    assert_eq!(next_gesture(&timeline, &mut btn, 3_000), GestureCode::NONE);
}

#[test]
fn tap_after_long_press_is_reported() {
    let (timeline, mut btn) = button(Script::new().press(1_000).release(2_000).press(100));
    assert_eq!(btn.poll(), GestureCode::SINGLE_LONG);

    assert_eq!(next_gesture(&timeline, &mut btn, 4_000), GestureCode::SINGLE_SHORT);
    assert!(timeline.elapsed() > 3_000);
    assert_eq!(next_gesture(&timeline, &mut btn, 5_000), GestureCode::NONE);
}

#[test]
fn missing_handler_is_not_an_error() {
    let (_t, mut btn) = button(Script::new().press(100).release(100).press(100));
    assert!(btn.register_handler(GestureCode::SINGLE_SHORT, record));
    take_calls();
    assert_eq!(btn.poll(), GestureCode::DOUBLE_SHORT);
    assert!(take_calls().is_empty());
}

#[test]
fn invalid_registration_leaves_dispatch_intact() {
    let (_t, mut btn) = button(Script::new().press(100));
    assert!(btn.register_handler(GestureCode::SINGLE_SHORT, record));
    take_calls();

    assert!(!btn.register_handler(GestureCode::from_bits(0x03), record));
    assert!(!btn.register_handler(GestureCode::from_bits(0x0B), record));
    assert!(!btn.register_handler(GestureCode::NONE, record));

    assert_eq!(btn.poll(), GestureCode::SINGLE_SHORT);
    assert_eq!(take_calls(), vec![(PIN, GestureCode::SINGLE_SHORT.bits())]);
}

#[test]
fn active_low_with_pull_up() {
    let (timeline, pin, clock) = Script::new().press(100).release(100).press(100).build(Polarity::ActiveLow);
    let config = ButtonConfig::new(PIN)
        .with_polarity(Polarity::ActiveLow)
        .with_mode(InputMode::PullUp);
    let mut btn = ButtonGestures::new(config, pin, clock).unwrap();
    assert_eq!(timeline.configured(), vec![(PIN, InputMode::PullUp)]);
    assert_eq!(btn.poll(), GestureCode::DOUBLE_SHORT);
}

#[test]
fn active_low_idle_high_is_not_pressed() {
    let (_t, pin, clock) = Script::new().build(Polarity::ActiveLow);
    let config = ButtonConfig::new(PIN).with_polarity(Polarity::ActiveLow);
    let mut btn = ButtonGestures::new(config, pin, clock).unwrap();
    assert_eq!(btn.poll(), GestureCode::NONE);
}

#[test]
fn works_across_clock_wraparound() {
    let origin = u32::MAX - 150;
    let (_t, pin, clock) = Script::starting_at(origin).press(1_000).build(Polarity::ActiveHigh);
    let mut btn = ButtonGestures::new(ButtonConfig::new(PIN), pin, clock).unwrap();
    assert_eq!(btn.poll(), GestureCode::SINGLE_LONG);

    let (_t, pin, clock) = Script::starting_at(origin)
        .press(100)
        .release(100)
        .press(100)
        .build(Polarity::ActiveHigh);
    let mut btn = ButtonGestures::new(ButtonConfig::new(PIN), pin, clock).unwrap();
    assert_eq!(btn.poll(), GestureCode::DOUBLE_SHORT);
}
