// Host-side tests for raw and lagged pointer tracking.

use field_core::{is_on_surface, PointerTracker, OFF_SURFACE};
use glam::Vec2;

#[test]
fn tracker_starts_off_surface() {
    let t = PointerTracker::new();
    assert_eq!(t.mouse, OFF_SURFACE);
    assert_eq!(t.lagged, OFF_SURFACE);
    assert!(!is_on_surface(OFF_SURFACE));
}

#[test]
fn cold_start_snaps_lagged_to_pointer() {
    let mut t = PointerTracker::new();
    t.move_to(Vec2::new(300.0, 200.0), false);
    t.step(false);
    assert_eq!(t.lagged, Vec2::new(300.0, 200.0));
    assert!(is_on_surface(t.lagged));
}

#[test]
fn lagged_eases_toward_pointer() {
    let mut t = PointerTracker::new();
    t.move_to(Vec2::new(100.0, 100.0), false);
    t.step(false);
    t.move_to(Vec2::new(200.0, 50.0), false);
    t.step(false);
    assert!((t.lagged.x - 108.0).abs() < 1e-4);
    assert!((t.lagged.y - 96.0).abs() < 1e-4);

    // Converges after enough frames.
    for _ in 0..300 {
        t.step(false);
    }
    assert!((t.lagged - Vec2::new(200.0, 50.0)).length() < 1e-2);
}

#[test]
fn leave_resets_both_positions_within_a_frame() {
    let mut t = PointerTracker::new();
    t.move_to(Vec2::new(50.0, 60.0), false);
    t.step(false);
    t.leave();
    assert_eq!(t.mouse, OFF_SURFACE);
    t.step(false);
    assert_eq!(t.lagged, OFF_SURFACE);
}

#[test]
fn resolved_ignores_moves_and_parks_lagged() {
    let mut t = PointerTracker::new();
    t.move_to(Vec2::new(50.0, 60.0), false);
    t.step(false);

    t.move_to(Vec2::new(500.0, 600.0), true);
    assert_eq!(t.mouse, Vec2::new(50.0, 60.0));
    t.step(true);
    assert_eq!(t.lagged, OFF_SURFACE);
}

#[test]
fn lagged_does_not_fly_in_after_reentry() {
    let mut t = PointerTracker::new();
    t.move_to(Vec2::new(10.0, 10.0), false);
    t.step(false);
    t.leave();
    t.step(false);
    t.move_to(Vec2::new(700.0, 400.0), false);
    t.step(false);
    assert_eq!(t.lagged, Vec2::new(700.0, 400.0));
}
