// Host-side tests for pointer click/drag classification.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use apology_core::ObjectId;
use glam::Vec2;
use input::*;

const HEART: Option<ObjectId> = Some(ObjectId(1));
const BUTTERFLY: Option<ObjectId> = Some(ObjectId(10));

#[test]
fn press_and_release_in_place_is_a_click() {
    let mut p = PointerState::default();
    p.press(Vec2::new(100.0, 100.0), HEART);
    assert!(p.down);
    assert_eq!(p.release(Vec2::new(100.0, 100.0), HEART), HEART);
    assert!(!p.down);
    assert!(p.press.is_none());
}

#[test]
fn small_jitter_still_clicks() {
    let mut p = PointerState::default();
    p.press(Vec2::new(50.0, 50.0), BUTTERFLY);
    p.move_to(Vec2::new(52.0, 51.0));
    assert!(!p.is_dragging());
    assert_eq!(p.release(Vec2::new(51.0, 50.0), BUTTERFLY), BUTTERFLY);
}

#[test]
fn travel_past_the_slop_is_a_drag() {
    let mut p = PointerState::default();
    p.press(Vec2::new(50.0, 50.0), HEART);
    // Wander off and come back: the farthest point counts
    p.move_to(Vec2::new(60.0, 50.0));
    assert!(p.is_dragging());
    p.move_to(Vec2::new(50.0, 50.0));
    assert_eq!(p.release(Vec2::new(50.0, 50.0), HEART), None);
}

#[test]
fn release_over_a_different_object_is_not_a_click() {
    let mut p = PointerState::default();
    p.press(Vec2::new(10.0, 10.0), HEART);
    assert_eq!(p.release(Vec2::new(10.0, 10.0), BUTTERFLY), None);

    p.press(Vec2::new(10.0, 10.0), None);
    assert_eq!(p.release(Vec2::new(10.0, 10.0), None), None);

    p.press(Vec2::new(10.0, 10.0), HEART);
    assert_eq!(p.release(Vec2::new(10.0, 10.0), None), None);
}

#[test]
fn moves_report_deltas_only_while_held() {
    let mut p = PointerState::default();
    assert_eq!(p.move_to(Vec2::new(5.0, 5.0)), None);
    p.press(Vec2::new(5.0, 5.0), None);
    assert_eq!(p.move_to(Vec2::new(8.0, 1.0)), Some(Vec2::new(3.0, -4.0)));
    assert_eq!(p.move_to(Vec2::new(8.0, 2.0)), Some(Vec2::new(0.0, 1.0)));
}

#[test]
fn cancel_drops_the_press() {
    let mut p = PointerState::default();
    p.press(Vec2::new(0.0, 0.0), HEART);
    p.cancel();
    assert!(!p.down);
    assert_eq!(p.release(Vec2::new(0.0, 0.0), HEART), None);
}

#[test]
fn release_without_press_is_ignored() {
    let mut p = PointerState::default();
    assert_eq!(p.release(Vec2::new(3.0, 3.0), HEART), None);
}
