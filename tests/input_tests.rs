// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_to_surface_identity_when_rect_matches_surface() {
    let size = Vec2::new(1000.0, 600.0);
    let p = client_to_surface(Vec2::new(250.0, 125.0), Vec2::ZERO, size, size).unwrap();
    assert!((p.x - 250.0).abs() < 1e-4);
    assert!((p.y - 125.0).abs() < 1e-4);
}

#[test]
fn client_to_surface_subtracts_rect_origin() {
    let size = Vec2::new(400.0, 300.0);
    let p = client_to_surface(Vec2::new(110.0, 60.0), Vec2::new(10.0, 20.0), size, size).unwrap();
    assert!((p.x - 100.0).abs() < 1e-4);
    assert!((p.y - 40.0).abs() < 1e-4);
}

#[test]
fn client_to_surface_scales_to_surface() {
    // Element drawn at half size: surface coordinates double.
    let p = client_to_surface(
        Vec2::new(50.0, 25.0),
        Vec2::ZERO,
        Vec2::new(500.0, 300.0),
        Vec2::new(1000.0, 600.0),
    )
    .unwrap();
    assert!((p.x - 100.0).abs() < 1e-4);
    assert!((p.y - 50.0).abs() < 1e-4);
}

#[test]
fn client_to_surface_rejects_collapsed_rect() {
    let surface = Vec2::new(100.0, 100.0);
    assert!(client_to_surface(Vec2::ONE, Vec2::ZERO, Vec2::new(0.0, 10.0), surface).is_none());
    assert!(client_to_surface(Vec2::ONE, Vec2::ZERO, Vec2::new(10.0, 0.0), surface).is_none());
}

#[test]
fn particle_count_accepts_values_in_range() {
    assert_eq!(parse_particle_count("100", 50_000), Some(100));
    assert_eq!(parse_particle_count(" 6000 ", 50_000), Some(6000));
    assert_eq!(parse_particle_count("50000", 50_000), Some(50_000));
}

#[test]
fn particle_count_rejects_zero_overflow_and_garbage() {
    assert_eq!(parse_particle_count("0", 50_000), None);
    assert_eq!(parse_particle_count("50001", 50_000), None);
    assert_eq!(parse_particle_count("-5", 50_000), None);
    assert_eq!(parse_particle_count("lots", 50_000), None);
    assert_eq!(parse_particle_count("", 50_000), None);
}

#[test]
fn target_ms_parses_finite_numbers() {
    assert_eq!(parse_target_ms("1767200400000"), Some(1_767_200_400_000.0));
    assert_eq!(parse_target_ms(" 12.5 "), Some(12.5));
}

#[test]
fn target_ms_rejects_non_finite_and_garbage() {
    assert_eq!(parse_target_ms("NaN"), None);
    assert_eq!(parse_target_ms("inf"), None);
    assert_eq!(parse_target_ms("tomorrow"), None);
}
