// Host-side tests for tuning constants, their relationships, and the DOM
// starfield generator. The main crate is wasm-only, so we include the
// pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod stars {
    include!("../src/core/stars.rs");
}

use constants::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_coefficients_are_fractions() {
    assert!(CURSOR_GLOW_SMOOTHING > 0.0 && CURSOR_GLOW_SMOOTHING < 1.0);
    assert!(CURSOR_DOT_SMOOTHING > 0.0 && CURSOR_DOT_SMOOTHING < 1.0);
    // the dot leads, the glow trails
    assert!(CURSOR_DOT_SMOOTHING > CURSOR_GLOW_SMOOTHING);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn observer_thresholds_are_ratios() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(STAT_THRESHOLD > 0.0 && STAT_THRESHOLD <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shells_sit_just_above_the_globe() {
    assert!(WIREFRAME_RADIUS > GLOBE_RADIUS);
    assert!(CLOUD_RADIUS > WIREFRAME_RADIUS);
    assert!(CAMERA_REST_Z > CLOUD_RADIUS + CAMERA_SWAY_X);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > SPACE_STAR_SPREAD);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn clouds_outpace_globe_and_stars_lag() {
    assert!(CLOUD_ROTATION_FACTOR > 1.0);
    assert!(STAR_ROTATION_FACTOR < 1.0);
    assert!(GLOBE_ROTATION_STEP > 0.0);
}

#[test]
fn starfield_specs_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    let specs = stars::generate(STARFIELD_COUNT, &mut rng);
    assert_eq!(specs.len(), 150);
    for s in &specs {
        assert!((0.0..100.0).contains(&s.left_pct));
        assert!((0.0..100.0).contains(&s.top_pct));
        assert!((1.0..3.0).contains(&s.size_px));
        assert!((0.0..3.0).contains(&s.delay_s));
        assert!((0.3..0.8).contains(&s.opacity));
    }
}

#[test]
fn star_style_uses_css_units() {
    let mut rng = StdRng::seed_from_u64(1);
    let spec = stars::StarSpec::random(&mut rng);
    let pairs = spec.style_pairs();
    let get = |name: &str| {
        pairs
            .iter()
            .find(|(p, _)| *p == name)
            .map(|(_, v)| v.clone())
            .unwrap()
    };
    assert!(get("left").ends_with('%'));
    assert!(get("width").ends_with("px"));
    assert_eq!(get("width"), get("height"));
    assert!(get("animation-delay").ends_with('s'));
}
