// Host-side tests for the cursor trail smoothing and hover transform.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod cursor {
    include!("../src/core/cursor.rs");
}

use cursor::*;
use glam::Vec2;

fn steps_to_converge(mut f: Follower, target: Vec2) -> usize {
    let start_dist = (target - f.pos).length();
    let mut steps = 0;
    while (target - f.pos).length() > 0.01 * start_dist {
        f.step(target);
        steps += 1;
        assert!(steps < 10_000, "follower never converged");
    }
    steps
}

#[test]
fn dot_converges_faster_than_glow() {
    let target = Vec2::new(640.0, 360.0);
    let glow = steps_to_converge(Follower::new(constants::CURSOR_GLOW_SMOOTHING), target);
    let dot = steps_to_converge(Follower::new(constants::CURSOR_DOT_SMOOTHING), target);
    assert!(dot < glow, "dot {} steps, glow {} steps", dot, glow);
    // (1 - 0.25)^n <= 0.01 and (1 - 0.15)^n <= 0.01
    assert_eq!(dot, 17);
    assert_eq!(glow, 29);
}

#[test]
fn follower_moves_fixed_fraction_of_remaining_distance() {
    let mut f = Follower::new(0.25);
    f.step(Vec2::new(100.0, -40.0));
    assert!((f.pos.x - 25.0).abs() < 1e-5);
    assert!((f.pos.y + 10.0).abs() < 1e-5);
}

#[test]
fn trail_lags_behind_pointer() {
    let mut trail = CursorTrail::default();
    trail.set_pointer(200.0, 100.0);
    trail.step();
    assert!(trail.dot().x > trail.glow().x);
    assert!(trail.dot().x < trail.pointer().x);
}

fn translate_xy(transform: &str) -> (f32, f32) {
    let inner = transform
        .strip_prefix("translate(")
        .and_then(|s| s.split(')').next())
        .unwrap();
    let mut parts = inner.split(", ").map(|p| p.trim_end_matches("px").parse::<f32>().unwrap());
    (parts.next().unwrap(), parts.next().unwrap())
}

#[test]
fn transforms_apply_element_offsets() {
    let mut trail = CursorTrail::default();
    trail.set_pointer(100.0, 100.0);
    for _ in 0..500 {
        trail.step();
    }
    let (gx, gy) = translate_xy(&trail.glow_transform());
    assert!((gx - 90.0).abs() < 1e-3 && (gy - 90.0).abs() < 1e-3);
    let (dx, dy) = translate_xy(&trail.dot_transform());
    assert!((dx - 98.0).abs() < 1e-3 && (dy - 98.0).abs() < 1e-3);
}

#[test]
fn hover_adds_scale_and_leave_removes_it() {
    let mut trail = CursorTrail::default();
    assert!(!trail.glow_transform().contains("scale"));
    trail.enter_hover();
    assert!(trail.glow_transform().ends_with(" scale(1.5)"));
    trail.leave_hover();
    assert!(!trail.glow_transform().contains("scale"));
}

#[test]
fn nested_hover_targets_do_not_cancel_each_other() {
    let mut trail = CursorTrail::default();
    trail.enter_hover(); // .card
    trail.enter_hover(); // button inside the card
    trail.leave_hover(); // leave the button, still on the card
    assert!(trail.is_hovering());
    assert_eq!(trail.glow_transform().matches("scale").count(), 1);
    trail.leave_hover();
    assert!(!trail.is_hovering());
}

#[test]
fn unmatched_leave_does_not_underflow() {
    let mut trail = CursorTrail::default();
    trail.leave_hover();
    trail.leave_hover();
    assert!(!trail.is_hovering());
    trail.enter_hover();
    assert!(trail.is_hovering());
}
