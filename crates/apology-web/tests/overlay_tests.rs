// Host-side tests for overlay text and label placement.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod overlay {
    include!("../src/overlay.rs");
}
mod placement {
    include!("../src/placement.rs");
}

use apology_core::{OrbitCamera, TITLE_FONT_SIZE};
use constants::*;
use glam::{Vec2, Vec3};
use overlay::*;
use placement::*;

#[test]
fn counter_text_matches_the_page_copy() {
    assert_eq!(counter_text(0), "Sorries Sent: 0 💕");
    assert_eq!(counter_text(48), "Sorries Sent: 48 💕");
}

#[test]
fn floating_heart_style_is_inline_css() {
    let s = floating_heart_style(12.5, 80.0, 1.25, 3.5);
    assert_eq!(
        s,
        "left:12.50%;top:80.00%;animation-delay:1.25s;animation-duration:3.50s"
    );
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn decoration_constants_are_sane() {
    assert_eq!(FLOATING_HEART_COUNT, 20);
    assert!(FLOATING_HEART_MIN_DURATION_SEC > 0.0);
    assert!(CLICK_SLOP_PX > 0.0);
    assert!(INSTANCE_CAPACITY >= 78);
}

const PAGE: &str = include_str!("../../../index.html");

/// Body of the first CSS rule whose selector is exactly `selector`.
fn css_rule(selector: &str) -> &'static str {
    let open = format!("{} {{", selector);
    let start = PAGE
        .lines()
        .position(|l| l.trim() == open)
        .unwrap_or_else(|| panic!("no rule for {}", selector));
    let body_start = PAGE
        .lines()
        .take(start + 1)
        .map(|l| l.len() + 1)
        .sum::<usize>();
    let rest = &PAGE[body_start..];
    &rest[..rest.find('}').expect("rule is closed")]
}

#[test]
fn message_panel_lets_pointer_events_reach_the_scene() {
    let rule = css_rule("#message-panel");
    assert!(rule.contains("pointer-events: none"), "{}", rule);
    assert!(PAGE.contains(&format!("id=\"{}\" class=\"ui {}\"", MESSAGE_PANEL_ID, HIDDEN_CLASS)));
}

#[test]
fn failed_loading_overlay_no_longer_covers_the_page() {
    let full = css_rule("#loading-overlay");
    assert!(full.contains("inset: 0"));
    let failed = css_rule(&format!("#loading-overlay.{}", LOADING_FAILED_CLASS));
    assert!(failed.contains("inset: auto"), "{}", failed);
    assert!(failed.contains("max-width"), "{}", failed);
    assert!(PAGE.contains(&format!("id=\"{}\"", SORRY_BUTTON_ID)));
}

#[test]
fn title_label_sits_above_center() {
    let cam = OrbitCamera::default().camera(1.0);
    let viewport = Vec2::new(800.0, 800.0);
    let p = place_label(&cam, Vec3::new(0.0, 3.0, 0.0), TITLE_FONT_SIZE, viewport, 2.0)
        .expect("title is visible from the default camera");
    assert!((p.left - 400.0).abs() < 1e-2);
    assert!(p.top < 400.0);
    assert!(p.font_px > 10.0);
    assert!(p.depth > 0.0 && p.depth < 1.0);
}

#[test]
fn labels_behind_the_camera_or_too_small_are_hidden() {
    let cam = OrbitCamera::default().camera(1.0);
    let viewport = Vec2::new(800.0, 800.0);
    assert!(place_label(&cam, Vec3::new(0.0, 0.0, 12.0), 0.3, viewport, 2.0).is_none());
    assert!(place_label(&cam, Vec3::ZERO, 0.001, viewport, 2.0).is_none());
    assert!(place_label(&cam, Vec3::new(200.0, 0.0, 0.0), 0.3, viewport, 2.0).is_none());
}

#[test]
fn nearer_labels_stack_on_top() {
    let cam = OrbitCamera::default().camera(1.0);
    let viewport = Vec2::new(640.0, 480.0);
    let near = place_label(&cam, Vec3::new(0.0, 0.0, 3.0), 0.3, viewport, 0.0).unwrap();
    let far = place_label(&cam, Vec3::new(0.0, 0.0, -3.0), 0.3, viewport, 0.0).unwrap();
    assert!(near.z_index() > far.z_index());
    assert!(near.font_px > far.font_px);
    let style = near.style("#FF69B4");
    assert!(style.starts_with("left:320.0px;top:240.0px;"));
    assert!(style.contains("color:#FF69B4"));
}
