// Host-side tests for the page boot order.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod startup {
    include!("../src/core/startup.rs");
}

use startup::*;

fn position(step: Initializer) -> usize {
    BOOT_ORDER.iter().position(|s| *s == step).unwrap()
}

#[test]
fn every_initializer_runs_exactly_once() {
    for step in BOOT_ORDER {
        assert_eq!(BOOT_ORDER.iter().filter(|s| **s == step).count(), 1, "{}", step.name());
    }
}

#[test]
fn section_backgrounds_activate_after_cursor() {
    assert_eq!(BOOT_ORDER.last(), Some(&Initializer::SectionBackgrounds));
    assert!(position(Initializer::Cursor) < position(Initializer::SectionBackgrounds));
}

#[test]
fn starfield_and_globe_come_first() {
    assert_eq!(BOOT_ORDER[0], Initializer::Starfield);
    assert_eq!(BOOT_ORDER[1], Initializer::Globe);
}

#[test]
fn reveal_hides_children_before_stats_and_images_run() {
    assert!(position(Initializer::Reveal) < position(Initializer::Images));
    assert!(position(Initializer::Reveal) < position(Initializer::Stats));
}

#[test]
fn names_are_distinct_log_tags() {
    let names: Vec<_> = BOOT_ORDER.iter().map(|s| s.name()).collect();
    for (i, n) in names.iter().enumerate() {
        assert!(!n.is_empty());
        assert!(!names[i + 1..].contains(n));
    }
}
