// Host-side tests for the scroll-linked controllers (nav, progress, parallax,
// indicator). The main crate is wasm-only, so we include the pure-Rust modules
// directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod scroll {
    include!("../src/core/scroll.rs");
}

use scroll::*;

#[test]
fn nav_toggles_around_threshold() {
    assert!(!nav_scrolled(0.0));
    assert!(!nav_scrolled(100.0));
    assert!(nav_scrolled(100.5));
    assert!(!nav_scrolled(40.0));
}

#[test]
fn progress_is_percentage_of_scrollable_height() {
    assert_eq!(progress_percent(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(progress_percent(1000.0, 3000.0, 1000.0), 50.0);
    assert_eq!(progress_percent(2000.0, 3000.0, 1000.0), 100.0);
}

#[test]
fn progress_guards_unscrollable_pages() {
    assert_eq!(progress_percent(0.0, 800.0, 800.0), 0.0);
    assert_eq!(progress_percent(10.0, 600.0, 800.0), 0.0);
    assert!(progress_percent(10.0, f64::NAN, 800.0).is_finite());
}

#[test]
fn progress_clamps_overscroll() {
    // elastic overscroll can report positions outside the range
    assert_eq!(progress_percent(-50.0, 3000.0, 1000.0), 0.0);
    assert_eq!(progress_percent(2300.0, 3000.0, 1000.0), 100.0);
}

#[test]
fn scroll_fraction_is_normalized() {
    assert!((scroll_fraction(500.0, 3000.0, 1000.0) - 0.25).abs() < 1e-12);
    assert_eq!(scroll_fraction(500.0, 500.0, 1000.0), 0.0);
}

#[test]
fn parallax_layer_offsets_follow_index() {
    let scroll_y = 800.0;
    for i in 0..6 {
        let expected = scroll_y * (0.3 + i as f64 * 0.1);
        let got = layer_offset(scroll_y, i);
        assert!((got.abs() - expected).abs() < 1e-9, "layer {}", i);
        assert!(got <= 0.0);
    }
}

#[test]
fn parallax_transforms() {
    assert_eq!(
        layer_transform(100.0, 0),
        "translate3d(0, -30px, 0) scale(1.1)"
    );
    assert_eq!(hero_transform(100.0), "translate3d(0, 50px, 0)");
}

#[test]
fn coalescer_requests_one_frame_per_burst() {
    let mut c = FrameCoalescer::default();
    let requested = (0..50).filter(|_| c.request()).count();
    assert_eq!(requested, 1);
    assert!(c.is_pending());

    c.complete();
    assert!(!c.is_pending());
    let requested = (0..10).filter(|_| c.request()).count();
    assert_eq!(requested, 1);
}

#[test]
fn indicator_hides_once_and_stays_hidden() {
    let mut latch = IndicatorLatch::default();
    assert!(!latch.on_scroll(20.0));
    assert!(!latch.on_scroll(100.0));
    assert!(!latch.is_hidden());

    assert!(latch.on_scroll(150.0));
    assert!(latch.is_hidden());

    // scrolling back above the threshold never brings it back
    assert!(!latch.on_scroll(0.0));
    assert!(!latch.on_scroll(400.0));
    assert!(latch.is_hidden());
}
