// Host-side tests for clock-driven pulse and snap signals.

use field_core::{ClockReading, TimeEvents};

#[test]
fn first_frame_triggers_both_signals() {
    let mut te = TimeEvents::new();
    te.update(ClockReading::new(9, 15, 30), false);
    assert!((te.second_pulse - 0.9).abs() < 1e-6);
    assert!((te.minute_snap - 0.98).abs() < 1e-6);
    assert_eq!(te.last_second(), Some(30));
    assert_eq!(te.last_minute(), Some(15));
}

#[test]
fn signals_decay_geometrically_without_boundaries() {
    let clock = ClockReading::new(9, 15, 30);
    let mut te = TimeEvents::new();
    te.update(clock, false);
    let pulse0 = te.second_pulse;
    let snap0 = te.minute_snap;
    for k in 1..=40 {
        te.update(clock, false);
        let expected_pulse = pulse0 * 0.9_f32.powi(k);
        let expected_snap = snap0 * 0.98_f32.powi(k);
        assert!(
            (te.second_pulse - expected_pulse).abs() < 1e-5,
            "pulse after {k} frames: {} vs {}",
            te.second_pulse,
            expected_pulse
        );
        assert!((te.minute_snap - expected_snap).abs() < 1e-5);
    }
}

#[test]
fn second_boundary_retriggers_pulse_only() {
    let mut te = TimeEvents::new();
    te.update(ClockReading::new(9, 15, 30), false);
    for _ in 0..10 {
        te.update(ClockReading::new(9, 15, 30), false);
    }
    let snap_before = te.minute_snap;
    te.update(ClockReading::new(9, 15, 31), false);
    assert!((te.second_pulse - 0.9).abs() < 1e-6);
    assert!((te.minute_snap - snap_before * 0.98).abs() < 1e-6);
}

#[test]
fn minute_boundary_retriggers_snap() {
    let mut te = TimeEvents::new();
    te.update(ClockReading::new(9, 15, 59), false);
    for _ in 0..30 {
        te.update(ClockReading::new(9, 15, 59), false);
    }
    assert!(te.minute_snap < 0.6);
    te.update(ClockReading::new(9, 16, 0), false);
    assert!((te.minute_snap - 0.98).abs() < 1e-6);
    assert!((te.second_pulse - 0.9).abs() < 1e-6);
}

#[test]
fn frozen_signals_decay_but_never_retrigger() {
    let mut te = TimeEvents::new();
    te.update(ClockReading::new(9, 15, 30), false);
    let mut prev = te.second_pulse;
    for s in 31..60 {
        te.update(ClockReading::new(9, 15, s), true);
        assert!(te.second_pulse < prev);
        prev = te.second_pulse;
    }
    te.update(ClockReading::new(9, 16, 0), true);
    assert!(te.minute_snap < 0.98 * 0.98);
    // Tracking stopped at the last active frame.
    assert_eq!(te.last_second(), Some(30));
    assert_eq!(te.last_minute(), Some(15));
}

#[test]
fn hour_shift_follows_twelve_hour_dial() {
    let mut te = TimeEvents::new();
    te.update(ClockReading::new(0, 0, 0), false);
    assert_eq!(te.hour_shift, 0.0);
    te.update(ClockReading::new(15, 0, 0), false);
    assert!((te.hour_shift - 0.25).abs() < 1e-6);
    te.update(ClockReading::new(23, 0, 0), true);
    assert!((te.hour_shift - 11.0 / 12.0).abs() < 1e-6);
}
