// Host-side tests for the stat counter text handling and easing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod counter {
    include!("../src/core/counter.rs");
}

use counter::*;

#[test]
fn parse_splits_prefix_number_suffix() {
    let parsed = CounterText::parse("1,234 satellites").unwrap();
    assert_eq!(parsed.prefix, "");
    assert_eq!(parsed.target, 1234);
    assert_eq!(parsed.suffix, " satellites");

    let parsed = CounterText::parse("€ 12,500,000+ revenue").unwrap();
    assert_eq!(parsed.prefix, "€ ");
    assert_eq!(parsed.target, 12_500_000);
    assert_eq!(parsed.suffix, "+ revenue");
}

#[test]
fn parse_takes_first_integer_only() {
    let parsed = CounterText::parse("Phase 3 of 4").unwrap();
    assert_eq!(parsed.target, 3);
    assert_eq!(parsed.suffix, " of 4");
}

#[test]
fn parse_ignores_leading_and_trailing_commas() {
    // a comma before the first digit belongs to the prefix
    let parsed = CounterText::parse("Hello, 42, world").unwrap();
    assert_eq!(parsed.prefix, "Hello, ");
    assert_eq!(parsed.target, 42);
    assert_eq!(parsed.suffix, ", world");
}

#[test]
fn parse_rejects_text_without_digits() {
    assert!(CounterText::parse("Global coverage").is_none());
    assert!(CounterText::parse("").is_none());
}

#[test]
fn parse_rejects_overflowing_numbers() {
    assert!(CounterText::parse("99999999999999999999999 km").is_none());
}

#[test]
fn format_thousands_groups_digits() {
    assert_eq!(format_thousands(0), "0");
    assert_eq!(format_thousands(999), "999");
    assert_eq!(format_thousands(1000), "1,000");
    assert_eq!(format_thousands(1234), "1,234");
    assert_eq!(format_thousands(1_234_567), "1,234,567");
}

#[test]
fn ease_out_quart_endpoints_and_shape() {
    assert_eq!(ease_out_quart(0.0), 0.0);
    assert_eq!(ease_out_quart(1.0), 1.0);
    // ease-out runs ahead of linear
    assert!(ease_out_quart(0.5) > 0.5);
    assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-12);
    // out of range input is clamped
    assert_eq!(ease_out_quart(-1.0), 0.0);
    assert_eq!(ease_out_quart(2.0), 1.0);
}

#[test]
fn animation_restores_original_text_at_the_end() {
    let anim = CounterAnimation::new(CounterText::parse("1,234 satellites").unwrap());
    let first = anim.frame_at(0.0);
    assert_eq!(first.text, "0 satellites");
    assert!(!first.finished);

    let last = anim.frame_at(2000.0);
    assert_eq!(last.text, "1,234 satellites");
    assert!(last.finished);

    // overshooting the duration still lands exactly on the target
    assert_eq!(anim.frame_at(5000.0).text, "1,234 satellites");
}

#[test]
fn animation_values_are_monotonic_and_bounded() {
    let anim = CounterAnimation::new(CounterText::parse("~250,000 users").unwrap());
    let mut prev = 0;
    for step in 0..=120 {
        let t = step as f64 * (2000.0 / 120.0);
        let v = anim.value_at(t);
        assert!(v >= prev, "value went backwards at t={}", t);
        assert!(v <= anim.target());
        prev = v;
    }
    assert_eq!(prev, 250_000);
}

#[test]
fn intermediate_frames_keep_prefix_and_suffix() {
    let anim = CounterAnimation::new(CounterText::parse("$4,800M market").unwrap());
    let mid = anim.frame_at(700.0).text;
    assert!(mid.starts_with('$'));
    assert!(mid.ends_with("M market"));
}

#[test]
fn zero_duration_jumps_to_target() {
    let anim = CounterAnimation::with_duration(CounterText::parse("75%").unwrap(), 0.0);
    assert_eq!(anim.value_at(0.0), 75);
    assert!(anim.frame_at(0.0).finished);
}
